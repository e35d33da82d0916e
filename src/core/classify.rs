// src/core/classify.rs
//! Threshold ladders that turn numbers into display statuses.
//!
//! Cut points (inclusive upper bounds for rank, exclusive for weight):
//!
//! | rank        | status     |   | weight  | status      |
//! |-------------|------------|---|---------|-------------|
//! | `<= 200`    | Bestseller |   | `< 2`   | Light       |
//! | `<= 1000`   | Rare find  |   | `< 3`   | Medium      |
//! | otherwise   | Hidden gem |   | `< 4`   | Complicated |
//! |             |            |   | else    | Hardcore    |

use crate::data::GameRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StatusLabel {
    pub icon: &'static str,
    pub label: &'static str,
}

impl StatusLabel {
    const fn new(icon: &'static str, label: &'static str) -> Self {
        Self { icon, label }
    }
}

pub const BESTSELLER: StatusLabel = StatusLabel::new("🔥", "Bestseller");
pub const RARE_FIND: StatusLabel = StatusLabel::new("🔎", "Rare find");
pub const HIDDEN_GEM: StatusLabel = StatusLabel::new("💎", "Hidden gem");

pub const LIGHT: StatusLabel = StatusLabel::new("🟢", "Light");
pub const MEDIUM: StatusLabel = StatusLabel::new("🟡", "Medium");
pub const COMPLICATED: StatusLabel = StatusLabel::new("🟠", "Complicated");
pub const HARDCORE: StatusLabel = StatusLabel::new("🔴", "Hardcore");

pub const EXPANSION: StatusLabel = StatusLabel::new("🧩", "Expansion");
pub const REIMPLEMENTS: StatusLabel = StatusLabel::new("♻️", "Reimplements");
pub const HAS_VERSIONS: StatusLabel = StatusLabel::new("🌐", "Has versions");

pub fn status_for_rank(rank: u32) -> StatusLabel {
    if rank <= 200 {
        BESTSELLER
    } else if rank <= 1000 {
        RARE_FIND
    } else {
        HIDDEN_GEM
    }
}

/// Negative weights land in Light.
pub fn complexity_status(weight: f64) -> StatusLabel {
    if weight < 2.0 {
        LIGHT
    } else if weight < 3.0 {
        MEDIUM
    } else if weight < 4.0 {
        COMPLICATED
    } else {
        HARDCORE
    }
}

/// Status icons for one row, in display order:
/// rank, expansion, reimplements, versions, complexity.
pub fn statuses(game: &GameRecord) -> Vec<StatusLabel> {
    let mut out = Vec::with_capacity(5);
    out.push(status_for_rank(game.bgg_rank));
    if game.is_expansion() { out.push(EXPANSION); }
    if game.reimplements() { out.push(REIMPLEMENTS); }
    if game.has_versions() { out.push(HAS_VERSIONS); }
    out.push(complexity_status(game.weight()));
    out
}
