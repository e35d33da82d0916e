// src/report/mod.rs
//! Report assembly: order, truncate, partition, then freeze into view-models.
//!
//! Records are addressed by index into the loaded slice, so selection happens
//! before enrichment and the same indices are read back afterwards.

pub mod html;
pub mod view;

use std::collections::BTreeSet;

use crate::data::GameRecord;

pub use view::{Report, RowView};

/// `candidates` ordered by `weighted`, best first. Stable: ties keep input order.
pub fn rank_order(games: &[GameRecord], candidates: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let mut ix: Vec<usize> = candidates.into_iter().collect();
    ix.sort_by(|&a, &b| games[b].weighted.total_cmp(&games[a].weighted));
    ix
}

/// Truncated top lists, as indices into the loaded records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Games released in or after `min_year`, when a threshold is set.
    pub recent: Option<Vec<usize>>,
    pub all: Vec<usize>,
    pub min_year: Option<i32>,
}

impl Selection {
    pub fn select(games: &[GameRecord], page_size: usize, min_year: Option<i32>) -> Self {
        let top = |candidates: Vec<usize>| {
            let mut ix = rank_order(games, candidates);
            ix.truncate(page_size);
            ix
        };

        let all = top((0..games.len()).collect());
        let recent = min_year.map(|year| {
            top((0..games.len()).filter(|&i| games[i].is_recent(year)).collect())
        });

        Self { recent, all, min_year }
    }

    /// Every id on any page. The only ids worth a catalog lookup.
    pub fn enrichment_ids(&self, games: &[GameRecord]) -> BTreeSet<u32> {
        self.all
            .iter()
            .chain(self.recent.iter().flatten())
            .map(|&i| games[i].id)
            .collect()
    }

    /// Freeze the selected records into rows. Call after enrichment.
    pub fn report(&self, games: &[GameRecord]) -> Report {
        let rows = |ix: &[usize]| -> Vec<RowView> {
            ix.iter()
                .enumerate()
                .map(|(pos, &i)| RowView::new(pos + 1, &games[i]))
                .collect()
        };
        Report {
            recent: self.recent.as_deref().map(&rows),
            all: rows(&self.all),
            min_year: self.min_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: u32, year: Option<i32>, weighted: f64) -> GameRecord {
        GameRecord {
            id,
            name: format!("G{id}"),
            year,
            users_rated: 1,
            average: 1.0,
            bgg_rank: id,
            thumbnail: None,
            wilson: weighted,
            weighted,
            enrichment: None,
        }
    }

    #[test]
    fn ties_keep_input_order() {
        let games = vec![game(1, None, 5.0), game(2, None, 7.0), game(3, None, 5.0), game(4, None, 7.0)];
        assert_eq!(rank_order(&games, 0..4), vec![1, 3, 0, 2]);
    }

    #[test]
    fn recent_is_filtered_then_truncated() {
        let games = vec![
            game(1, Some(2024), 9.0),
            game(2, Some(2025), 6.0),
            game(3, Some(2026), 7.0),
            game(4, None, 8.0),
            game(5, Some(2025), 5.0),
        ];
        let sel = Selection::select(&games, 2, Some(2025));
        assert_eq!(sel.all, vec![0, 3]);
        assert_eq!(sel.recent, Some(vec![2, 1]));
        assert_eq!(sel.enrichment_ids(&games), BTreeSet::from([1, 2, 3, 4]));
    }

    #[test]
    fn no_threshold_no_recent() {
        let games = vec![game(1, Some(2025), 1.0)];
        let sel = Selection::select(&games, 10, None);
        assert!(sel.recent.is_none());
        let report = sel.report(&games);
        assert!(report.recent.is_none());
        assert_eq!(report.all[0].rank, 1);
    }
}
