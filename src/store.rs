// src/store.rs
//! Input side: find the snapshot, label it, load its rows.

use std::{fs::File, io::Read, path::{Path, PathBuf}};

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::config::consts::{INPUT_PATTERN, SNAPSHOT_FORMAT};
use crate::data::GameRecord;
use crate::error::{Error, Result};
use crate::specs::ratings::{parse_row, Columns};

/// Rows that made it, and how many were dropped.
#[derive(Debug, Default)]
pub struct Loaded {
    pub games: Vec<GameRecord>,
    pub skipped: usize,
}

/// Newest snapshot in `dir`: the lexicographically last `20*.csv`.
/// Timestamped names sort chronologically.
pub fn latest_csv(dir: &Path) -> Result<PathBuf> {
    let escaped_dir = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped_dir).join(INPUT_PATTERN);

    let paths = glob::glob(&pattern.to_string_lossy())
        .map_err(|e| Error::Config(e.to_string()))?;
    let mut files: Vec<PathBuf> = paths
        .filter_map(|entry| entry.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    files.pop().ok_or_else(|| Error::NoInputAvailable(dir.to_path_buf()))
}

/// `2025-06-18T11-00-01.csv` → `2025-06-18 11:00:01 UTC`; any other name → its stem.
pub fn snapshot_label(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match NaiveDateTime::parse_from_str(&stem, SNAPSHOT_FORMAT) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        Err(_) => stem,
    }
}

pub fn load_games(path: &Path) -> Result<Loaded> {
    let file = File::open(path)?;
    let loaded = read_games(file)?;
    info!(
        path = %path.display(),
        games = loaded.games.len(),
        skipped = loaded.skipped,
        "loaded ratings snapshot"
    );
    Ok(loaded)
}

/// Parse a ratings CSV. Malformed rows are skipped, never fatal.
/// Only an unreadable header is an error.
pub fn read_games<R: Read>(reader: R) -> Result<Loaded> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let cols = Columns::from_headers(rdr.headers()?);
    let missing = cols.missing_required();
    if !missing.is_empty() {
        warn!(?missing, "ratings header lacks required columns; every row will be skipped");
    }

    let mut out = Loaded::default();
    for (i, record) in rdr.records().enumerate() {
        // header is line 1
        let line = i as u64 + 2;
        let parsed = record
            .map_err(|e| Error::MalformedRow { line, reason: e.to_string() })
            .and_then(|row| parse_row(&row, &cols, line));
        match parsed {
            Ok(game) => out.games.push(game),
            Err(e) => {
                debug!(error = %e, "skipping row");
                out.skipped += 1;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_from_timestamped_name() {
        assert_eq!(
            snapshot_label(Path::new("data/2025-06-18T11-00-01.csv")),
            "2025-06-18 11:00:01 UTC"
        );
        assert_eq!(snapshot_label(Path::new("ratings.csv")), "ratings");
    }

    #[test]
    fn skips_malformed_rows() {
        let text = "\
ID,Name,Year,Rank,Average,Bayes average,Users rated,URL,Thumbnail
1,Good,2020,10,8.1,7.9,5000,/x,http://img/1.png
2,Bad rank,2020,N/A,8.1,7.9,5000,/x,
3,Short
4,Also good,1999,2000,6.0,5.5,40,/y,
";
        let loaded = read_games(text.as_bytes()).unwrap();
        assert_eq!(loaded.games.iter().map(|g| g.id).collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(loaded.skipped, 2);
    }
}
