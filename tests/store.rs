// tests/store.rs
use std::fs;

use bgg_rank::error::Error;
use bgg_rank::store::{latest_csv, load_games, snapshot_label};

const HEADER: &str = "ID,Name,Year,Rank,Average,Bayes average,Users rated,URL,Thumbnail\n";

#[test]
fn picks_lexicographically_last_dated_file() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["2024-12-31T23-59-59.csv", "2025-06-18T11-00-01.csv", "2025-01-02T08-00-00.csv"] {
        fs::write(dir.path().join(name), HEADER).unwrap();
    }
    // not matching 20*.csv
    fs::write(dir.path().join("ratings.csv"), HEADER).unwrap();
    fs::write(dir.path().join("2099-01-01T00-00-00.txt"), HEADER).unwrap();

    let latest = latest_csv(dir.path()).unwrap();
    assert_eq!(latest.file_name().unwrap(), "2025-06-18T11-00-01.csv");
    assert_eq!(snapshot_label(&latest), "2025-06-18 11:00:01 UTC");
}

#[test]
fn empty_directory_has_no_input() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.csv"), HEADER).unwrap();
    let err = latest_csv(dir.path()).unwrap_err();
    assert!(matches!(err, Error::NoInputAvailable(_)));
}

#[test]
fn loads_file_and_counts_skips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("2025-06-18T11-00-01.csv");
    let body = format!(
        "{HEADER}\
174430,Gloomhaven,2017,3,8.6,8.4,60000,/boardgame/174430,https://img/g.jpg\n\
13,\"Catan, the game\",1995,500,7.1,7.0,120000,/boardgame/13,\n\
oops,Broken,2000,1,7,7,10,/x,\n"
    );
    fs::write(&path, body).unwrap();

    let loaded = load_games(&path).unwrap();
    assert_eq!(loaded.skipped, 1);
    assert_eq!(loaded.games.len(), 2);
    assert_eq!(loaded.games[1].name, "Catan, the game");
    assert_eq!(loaded.games[0].thumbnail.as_deref(), Some("https://img/g.jpg"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_games(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
