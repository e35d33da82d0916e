// src/core/scoring.rs
//! Confidence-bound scoring on a 1–10 rating scale.
//!
//! The mean rating `R` is rescaled to a proportion `p = (R - 1) / 9`, the
//! Wilson score interval for a Bernoulli proportion is applied, and the lower
//! bound is mapped back onto `[1, 10]`. The weighted variant adds
//! `prior_votes` pseudo-votes at `prior_rating` first, which damps small
//! (possibly coordinated) vote blocs on niche games.

use crate::config::consts::{DEFAULT_PRIOR_RATING, DEFAULT_PRIOR_VOTES, DEFAULT_Z};
use crate::data::{GameRecord, ScoreInput};

/// Lower bound of the Wilson interval for a 1–10 scale.
///
/// `votes == 0` returns exactly `0.0`: a sentinel for "no data", not a bound.
/// `z` is not validated. Totals outside `[votes, 10 * votes]` push `p` out of
/// `[0, 1]`; the result is still computed.
pub fn wilson_lower_bound(votes: u64, total_score: f64, z: f64) -> f64 {
    if votes == 0 {
        return 0.0;
    }
    let n = votes as f64;
    let mean = total_score / n;
    let p = (mean - 1.0) / 9.0;
    let z2 = z * z;

    let denom = 1.0 + z2 / n;
    let centre = p + z2 / (2.0 * n);
    let adj = z * ((p * (1.0 - p) + z2 / (4.0 * n)) / n).sqrt();

    1.0 + 9.0 * ((centre - adj) / denom)
}

/// Wilson bound after adding `prior_votes` pseudo-votes rated `prior_rating`.
/// The vote count saturates instead of overflowing.
pub fn weighted_score(votes: u64, total_score: f64, params: &ScoringParams) -> f64 {
    wilson_lower_bound(
        votes.saturating_add(params.prior_votes),
        total_score + params.prior_votes as f64 * params.prior_rating,
        params.z,
    )
}

/// Tunables for both scores. Both use the same `z`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoringParams {
    /// Confidence multiplier (2.326 ≈ 99% one-sided, 2.576 ≈ 99.5%).
    pub z: f64,
    pub prior_votes: u64,
    pub prior_rating: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            z: DEFAULT_Z,
            prior_votes: DEFAULT_PRIOR_VOTES,
            prior_rating: DEFAULT_PRIOR_RATING,
        }
    }
}

impl ScoringParams {
    /// `(wilson, weighted)` for one input.
    pub fn score(&self, input: ScoreInput) -> (f64, f64) {
        (
            wilson_lower_bound(input.votes, input.total_score, self.z),
            weighted_score(input.votes, input.total_score, self),
        )
    }
}

/// Fill `wilson` and `weighted` on every record.
pub fn score_all(games: &mut [GameRecord], params: &ScoringParams) {
    for game in games {
        let (wilson, weighted) = params.score(game.score_input());
        game.wilson = wilson;
        game.weighted = weighted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_votes_is_sentinel() {
        assert_eq!(wilson_lower_bound(0, 0.0, DEFAULT_Z), 0.0);
        assert_eq!(wilson_lower_bound(0, 1234.5, 1.0), 0.0);
    }

    #[test]
    fn unanimous_tens_stay_below_ten() {
        let s = wilson_lower_bound(50, 500.0, DEFAULT_Z);
        assert!(s < 10.0 && s > 8.0, "{s}");
    }

    #[test]
    fn prior_pulls_small_samples_towards_prior_rating() {
        let p = ScoringParams::default();
        let raw = wilson_lower_bound(3, 30.0, p.z);
        let weighted = weighted_score(3, 30.0, &p);
        // three perfect votes barely move 25 pseudo-votes at 6.5,
        // but the larger sample tightens the bound
        assert!(weighted < 6.5);
        assert!(weighted > raw);
    }

    #[test]
    fn huge_prior_saturates() {
        let p = ScoringParams { prior_votes: u64::MAX, ..ScoringParams::default() };
        let s = weighted_score(10, 90.0, &p);
        assert!(s.is_finite());
        assert!((s - 6.5).abs() < 1e-3, "{s}");
    }

    #[test]
    fn score_returns_both() {
        let p = ScoringParams::default();
        let (w, ws) = p.score(ScoreInput { votes: 100, total_score: 800.0 });
        assert_eq!(w, wilson_lower_bound(100, 800.0, p.z));
        assert_eq!(ws, weighted_score(100, 800.0, &p));
    }
}
