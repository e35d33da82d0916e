// src/report/view.rs
use crate::core::classify::{statuses, StatusLabel};
use crate::data::GameRecord;

/// One rendered table row. Immutable; everything the renderer needs.
#[derive(Clone, Debug, PartialEq)]
pub struct RowView {
    /// 1-based position within its view.
    pub rank: usize,
    pub id: u32,
    pub name: String,
    pub year: Option<i32>,
    pub users_rated: u64,
    pub average: f64,
    pub bgg_rank: u32,
    pub thumbnail: Option<String>,
    pub statuses: Vec<StatusLabel>,
    pub weight: f64,
    pub wilson: f64,
    pub weighted: f64,
}

impl RowView {
    pub fn new(rank: usize, game: &GameRecord) -> Self {
        Self {
            rank,
            id: game.id,
            name: game.name.clone(),
            year: game.year,
            users_rated: game.users_rated,
            average: game.average,
            bgg_rank: game.bgg_rank,
            thumbnail: game.thumbnail.clone(),
            statuses: statuses(game),
            weight: game.weight(),
            wilson: game.wilson,
            weighted: game.weighted,
        }
    }
}

/// Finalized views handed to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub recent: Option<Vec<RowView>>,
    pub all: Vec<RowView>,
    pub min_year: Option<i32>,
}
