// src/specs/ratings.rs
//! Row spec for the ratings snapshot.
//!
//! Required: `ID`, `Users rated`, `Average`, `Rank`.
//! Optional: `Name` (empty), `Year` (`None` when not an integer),
//! `Thumbnail` (`None` when empty).
//!
//! Totals exports name the columns `name`, `votes`, `sum_scores` instead. Those
//! are accepted in place of `Name`, `Users rated` and `Average`; the average is
//! then `sum_scores / votes`.

use csv::StringRecord;

use crate::data::GameRecord;
use crate::error::{Error, Result};

pub const COL_ID: &str = "ID";
pub const COL_NAME: &str = "Name";
pub const COL_YEAR: &str = "Year";
pub const COL_USERS_RATED: &str = "Users rated";
pub const COL_AVERAGE: &str = "Average";
pub const COL_RANK: &str = "Rank";
pub const COL_THUMBNAIL: &str = "Thumbnail";

pub const COL_TOTALS_NAME: &str = "name";
pub const COL_VOTES: &str = "votes";
pub const COL_SUM_SCORES: &str = "sum_scores";

/// Header positions, resolved once per file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Columns {
    id: Option<usize>,
    name: Option<usize>,
    year: Option<usize>,
    users_rated: Option<usize>,
    average: Option<usize>,
    rank: Option<usize>,
    thumbnail: Option<usize>,
    sum_scores: Option<usize>,
}

impl Columns {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            id: find(COL_ID),
            name: find(COL_NAME).or_else(|| find(COL_TOTALS_NAME)),
            year: find(COL_YEAR),
            users_rated: find(COL_USERS_RATED).or_else(|| find(COL_VOTES)),
            average: find(COL_AVERAGE),
            rank: find(COL_RANK),
            thumbnail: find(COL_THUMBNAIL),
            sum_scores: find(COL_SUM_SCORES),
        }
    }

    /// Required columns the header lacks. Every row will be malformed if non-empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            (self.id, COL_ID),
            (self.users_rated, COL_USERS_RATED),
            (self.average.or(self.sum_scores), COL_AVERAGE),
            (self.rank, COL_RANK),
        ]
        .into_iter()
        .filter(|(ix, _)| ix.is_none())
        .map(|(_, name)| name)
        .collect()
    }
}

fn cell<'r>(row: &'r StringRecord, ix: Option<usize>) -> Option<&'r str> {
    ix.and_then(|i| row.get(i)).map(str::trim)
}

fn required<T: std::str::FromStr>(
    row: &StringRecord,
    ix: Option<usize>,
    col: &str,
    line: u64,
) -> Result<T> {
    let raw = cell(row, ix).ok_or_else(|| Error::MalformedRow {
        line,
        reason: format!("missing {col}"),
    })?;
    raw.parse::<T>().map_err(|_| Error::MalformedRow {
        line,
        reason: format!("{col} is not a number: {raw:?}"),
    })
}

/// Parse one data row. Scores are left at zero for the scoring pass.
pub fn parse_row(row: &StringRecord, cols: &Columns, line: u64) -> Result<GameRecord> {
    let id: u32 = required(row, cols.id, COL_ID, line)?;
    let users_rated: u64 = required(row, cols.users_rated, COL_USERS_RATED, line)?;
    let average: f64 = match (cols.average, cols.sum_scores) {
        (None, Some(ix)) => {
            let sum: f64 = required(row, Some(ix), COL_SUM_SCORES, line)?;
            if users_rated == 0 { 0.0 } else { sum / users_rated as f64 }
        }
        _ => required(row, cols.average, COL_AVERAGE, line)?,
    };
    let bgg_rank: u32 = required(row, cols.rank, COL_RANK, line)?;

    let name = cell(row, cols.name).map(|n| s!(n)).unwrap_or_default();
    let year = cell(row, cols.year).and_then(|y| y.parse::<i32>().ok());
    let thumbnail = cell(row, cols.thumbnail).filter(|t| !t.is_empty()).map(|t| s!(t));

    Ok(GameRecord {
        id,
        name,
        year,
        users_rated,
        average,
        bgg_rank,
        thumbnail,
        wilson: 0.0,
        weighted: 0.0,
        enrichment: None,
    })
}
