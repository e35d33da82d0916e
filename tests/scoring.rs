// tests/scoring.rs
use bgg_rank::core::scoring::{score_all, weighted_score, wilson_lower_bound, ScoringParams};
use bgg_rank::data::{GameRecord, ScoreInput};
use proptest::prelude::*;

/// Straight transcription of the 1–10 Wilson bound, for cross-checking.
fn reference(n: f64, mean: f64, z: f64) -> f64 {
    let p = (mean - 1.0) / 9.0;
    let lower = (p + z * z / (2.0 * n) - z * ((p * (1.0 - p) + z * z / (4.0 * n)) / n).sqrt())
        / (1.0 + z * z / n);
    1.0 + 9.0 * lower
}

fn game(id: u32, votes: u64, average: f64) -> GameRecord {
    GameRecord {
        id,
        name: format!("g{id}"),
        year: None,
        users_rated: votes,
        average,
        bgg_rank: 1,
        thumbnail: None,
        wilson: 0.0,
        weighted: 0.0,
        enrichment: None,
    }
}

#[test]
fn matches_reference_formula() {
    let z = 2.576;
    let got = wilson_lower_bound(100, 800.0, z);
    assert!((got - reference(100.0, 8.0, z)).abs() < 1e-9);
    assert!(got < 8.0 && got > 1.0);
}

#[test]
fn zero_votes_is_zero() {
    assert_eq!(wilson_lower_bound(0, 0.0, 2.576), 0.0);
    let params = ScoringParams { z: 2.576, prior_votes: 0, prior_rating: 6.5 };
    assert_eq!(weighted_score(0, 0.0, &params), 0.0);
}

#[test]
fn weighted_adds_pseudo_votes() {
    let params = ScoringParams::default();
    let expected = wilson_lower_bound(10 + 25, 90.0 + 25.0 * 6.5, 2.576);
    assert_eq!(weighted_score(10, 90.0, &params), expected);
}

#[test]
fn score_all_fills_both_scores() {
    let mut games = vec![game(1, 100, 8.0), game(2, 0, 0.0)];
    let params = ScoringParams::default();
    score_all(&mut games, &params);

    let input = ScoreInput::from_average(100, 8.0);
    assert_eq!(games[0].wilson, wilson_lower_bound(input.votes, input.total_score, params.z));
    assert_eq!(games[0].weighted, weighted_score(input.votes, input.total_score, &params));
    assert_eq!(games[1].wilson, 0.0);
    assert!(games[1].weighted > 0.0);
}

proptest! {
    #[test]
    fn bound_stays_between_one_and_mean(votes in 1u64..1_000_000, mean in 1.0f64..=10.0) {
        let lb = wilson_lower_bound(votes, mean * votes as f64, 2.576);
        prop_assert!(lb >= 1.0 - 1e-9);
        prop_assert!(lb <= mean + 1e-9);
    }

    #[test]
    fn more_votes_never_lower_the_bound(votes in 1u64..100_000, extra in 1u64..100_000, mean in 1.0f64..=10.0) {
        let a = wilson_lower_bound(votes, mean * votes as f64, 2.576);
        let b = wilson_lower_bound(votes + extra, mean * (votes + extra) as f64, 2.576);
        prop_assert!(b >= a - 1e-9);
    }

    #[test]
    fn higher_mean_never_lowers_the_bound(votes in 1u64..100_000, m1 in 1.0f64..=10.0, m2 in 1.0f64..=10.0) {
        let (lo, hi) = if m1 <= m2 { (m1, m2) } else { (m2, m1) };
        let a = wilson_lower_bound(votes, lo * votes as f64, 2.576);
        let b = wilson_lower_bound(votes, hi * votes as f64, 2.576);
        prop_assert!(b >= a - 1e-9);
    }
}
