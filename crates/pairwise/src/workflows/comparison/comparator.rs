use super::domain::{DimensionKey, Direction, Level, Relation, Score};
use serde::Serialize;

/// Deltas at or above this are `different`.
pub const DIFFERENT_THRESHOLD: f64 = 0.8;
/// Deltas at or above this are `very_different`.
pub const VERY_DIFFERENT_THRESHOLD: f64 = 1.6;
/// Minimum absolute gap before one person counts as higher.
pub const DIRECTION_EPSILON: f64 = 0.1;
/// Slack for binary noise such as `0.6 - 0.5 = 0.09999999999999998`.
const FLOAT_TOLERANCE: f64 = 1e-9;
/// Scores below this are `low`.
pub const LOW_LEVEL_CEILING: f64 = 1.5;
/// Scores below this (and not low) are `medium`.
pub const MEDIUM_LEVEL_CEILING: f64 = 2.5;

/// Result of comparing two people on a single dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionComparison {
    pub dimension: DimensionKey,
    pub a_score: Score,
    pub b_score: Score,
    pub delta: f64,
    pub relation: Relation,
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a_level: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b_level: Option<Level>,
    pub valid: bool,
}

impl DimensionComparison {
    /// Safe defaults for a dimension where at least one score is unknown.
    pub fn unscored(dimension: DimensionKey, a_score: Score, b_score: Score) -> Self {
        Self {
            dimension,
            a_score,
            b_score,
            delta: 0.0,
            relation: Relation::Similar,
            direction: Direction::Neither,
            a_level: a_score.value().map(level_for),
            b_level: b_score.value().map(level_for),
            valid: false,
        }
    }

    /// `Some(relation)` only when the classification is backed by two known scores.
    pub fn scored_relation(&self) -> Option<Relation> {
        self.valid.then_some(self.relation)
    }
}

pub fn compare_dimension(dimension: DimensionKey, a_score: Score, b_score: Score) -> DimensionComparison {
    let (a, b) = match (a_score, b_score) {
        (Score::Known(a), Score::Known(b)) => (a, b),
        _ => return DimensionComparison::unscored(dimension, a_score, b_score),
    };

    let delta = round_delta(a - b);

    DimensionComparison {
        dimension,
        a_score,
        b_score,
        delta,
        relation: classify_delta(delta),
        direction: direction_between(a, b),
        a_level: Some(level_for(a)),
        b_level: Some(level_for(b)),
        valid: true,
    }
}

pub fn classify_delta(delta: f64) -> Relation {
    if delta >= VERY_DIFFERENT_THRESHOLD {
        Relation::VeryDifferent
    } else if delta >= DIFFERENT_THRESHOLD {
        Relation::Different
    } else {
        Relation::Similar
    }
}

/// Absolute gap to one decimal, rounding half up.
pub fn round_delta(gap: f64) -> f64 {
    (gap.abs() * 10.0 + 0.5 + FLOAT_TOLERANCE).floor() / 10.0
}

pub fn direction_between(a: f64, b: f64) -> Direction {
    if (a - b).abs() < DIRECTION_EPSILON - FLOAT_TOLERANCE {
        Direction::Neither
    } else if a > b {
        Direction::AHigher
    } else {
        Direction::BHigher
    }
}

pub fn level_for(score: f64) -> Level {
    if score < LOW_LEVEL_CEILING {
        Level::Low
    } else if score < MEDIUM_LEVEL_CEILING {
        Level::Medium
    } else {
        Level::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_rounds_half_up_to_one_decimal() {
        assert_eq!(round_delta(0.25), 0.3);
        assert_eq!(round_delta(-0.35), 0.4);
        assert_eq!(round_delta(2.3 - 1.5), 0.8);
        assert_eq!(round_delta(0.04), 0.0);
    }

    #[test]
    fn delta_just_below_a_half_rounds_down() {
        assert_eq!(round_delta(0.24996), 0.2);
        assert_eq!(round_delta(3.05 - 1.5), 1.6);
    }

    #[test]
    fn levels_are_monotone() {
        assert_eq!(level_for(0.0), Level::Low);
        assert_eq!(level_for(1.49), Level::Low);
        assert_eq!(level_for(1.5), Level::Medium);
        assert_eq!(level_for(2.5), Level::High);
        assert_eq!(level_for(4.0), Level::High);
    }
}
