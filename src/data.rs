// src/data.rs
//
// Typed records carried through the pipeline.
//
// - ScoreInput: the two numbers the scoring engine needs.
// - GameRecord: one dataset row. Built by the loader, scored once,
//               optionally enriched once, read-only afterwards.
// - Enrichment: catalog fields merged into a record. Absent until a
//               lookup succeeds; accessors on GameRecord default them.

/// Vote count and summed ratings for one game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreInput {
    pub votes: u64,
    pub total_score: f64,
}

impl ScoreInput {
    /// Rebuild the total from a published average.
    pub fn from_average(votes: u64, average: f64) -> Self {
        Self { votes, total_score: average * votes as f64 }
    }
}

/// Catalog-derived fields for a record.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Enrichment {
    pub weight: f64,
    pub is_expansion: bool,
    pub reimplements: bool,
    pub version_count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    pub id: u32,
    pub name: String,
    pub year: Option<i32>,
    pub users_rated: u64,
    pub average: f64,
    pub bgg_rank: u32,
    pub thumbnail: Option<String>,

    pub wilson: f64,
    pub weighted: f64,

    pub enrichment: Option<Enrichment>,
}

impl GameRecord {
    pub fn score_input(&self) -> ScoreInput {
        ScoreInput::from_average(self.users_rated, self.average)
    }

    pub fn is_enriched(&self) -> bool { self.enrichment.is_some() }

    /// Complexity weight; `0.0` when unknown.
    pub fn weight(&self) -> f64 {
        self.enrichment.map_or(0.0, |e| e.weight)
    }

    pub fn is_expansion(&self) -> bool {
        self.enrichment.is_some_and(|e| e.is_expansion)
    }

    pub fn reimplements(&self) -> bool {
        self.enrichment.is_some_and(|e| e.reimplements)
    }

    pub fn version_count(&self) -> usize {
        self.enrichment.map_or(0, |e| e.version_count)
    }

    pub fn has_versions(&self) -> bool { self.version_count() > 1 }

    pub fn is_recent(&self, min_year: i32) -> bool {
        self.year.is_some_and(|y| y >= min_year)
    }
}
