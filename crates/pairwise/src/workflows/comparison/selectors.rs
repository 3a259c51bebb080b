//! One decision procedure per narrative section.
//!
//! Sections are not interchangeable: each one decides which metadata fields
//! matter for it and how to gate on the comparison state before asking the
//! resolver for a template.

use super::comparator::DimensionComparison;
use super::domain::{DimensionKey, Direction, Relation, Section, Variance};
use super::resolver::{FallbackResolver, Resolution};
use super::state::ComparisonState;
use super::templates::TemplateKey;
use serde::Serialize;

/// The mutually exclusive regimes of the safety section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyRegime {
    VeryLowConfidence,
    LowConfidence,
    Standard,
}

impl SafetyRegime {
    pub fn for_state(state: &ComparisonState) -> Self {
        if state.very_low_confidence() {
            Self::VeryLowConfidence
        } else if state.low_confidence() {
            Self::LowConfidence
        } else {
            Self::Standard
        }
    }
}

pub fn select_dominant_difference<'r>(
    resolver: &FallbackResolver<'r>,
    state: &ComparisonState,
) -> Resolution<'r> {
    let desired = TemplateKey::section(Section::DominantDifference).dimension(state.dominant_dimension());
    resolver.resolve(&desired, state)
}

/// One resolution per dimension, in [`DimensionKey::ORDERED`] order.
pub fn select_mental_map<'r>(
    resolver: &FallbackResolver<'r>,
    state: &ComparisonState,
) -> Vec<(DimensionKey, Resolution<'r>)> {
    state
        .dimensions()
        .iter()
        .map(|comparison| {
            let desired = TemplateKey::section(Section::MentalMap)
                .dimension(comparison.dimension)
                .maybe_relation(comparison.scored_relation());
            (comparison.dimension, resolver.resolve(&desired, state))
        })
        .collect()
}

/// `None` when the dominant dimension is very different: that case has no
/// prose on purpose and callers show the structured list instead.
pub fn select_key_differences<'r>(
    resolver: &FallbackResolver<'r>,
    state: &ComparisonState,
) -> Option<Resolution<'r>> {
    let dominant = state.dominant();
    let base = TemplateKey::section(Section::KeyDifferences).dimension(dominant.dimension);

    let desired = match dominant.scored_relation() {
        Some(Relation::VeryDifferent) => return None,
        Some(Relation::Different) => match dominant.direction {
            Direction::Neither => base.relation(Relation::Different),
            direction => base.relation(Relation::Different).direction(direction),
        },
        Some(Relation::Similar) => base
            .relation(Relation::Similar)
            .variance(level_variance(dominant)),
        None => base,
    };

    Some(resolver.resolve(&desired, state))
}

/// Only different and very different relations carry loop content; a similar
/// dominant dimension falls through to the safety tiers.
pub fn select_loop<'r>(resolver: &FallbackResolver<'r>, state: &ComparisonState) -> Resolution<'r> {
    let dominant = state.dominant();
    let desired = TemplateKey::section(Section::Loop)
        .dimension(dominant.dimension)
        .maybe_relation(dominant.scored_relation());
    resolver.resolve(&desired, state)
}

/// Without a direction there is nothing honest to say about how the gap
/// feels, so the safety selection stands in.
pub fn select_felt_experience<'r>(
    resolver: &FallbackResolver<'r>,
    state: &ComparisonState,
) -> Resolution<'r> {
    let dominant = state.dominant();
    match dominant.direction {
        Direction::Neither => select_safety(resolver, state),
        direction => {
            let desired = TemplateKey::section(Section::FeltExperience)
                .dimension(dominant.dimension)
                .direction(direction);
            resolver.resolve(&desired, state)
        }
    }
}

pub fn select_triggers<'r>(resolver: &FallbackResolver<'r>, state: &ComparisonState) -> Resolution<'r> {
    let desired = TemplateKey::section(Section::Triggers).dimension(state.dominant_dimension());
    resolver.resolve(&desired, state)
}

pub fn select_safety<'r>(resolver: &FallbackResolver<'r>, state: &ComparisonState) -> Resolution<'r> {
    let desired = match SafetyRegime::for_state(state) {
        SafetyRegime::VeryLowConfidence => {
            TemplateKey::very_low_confidence(Variance::SeverelyIncomplete)
        }
        SafetyRegime::LowConfidence => TemplateKey::low_confidence_safety(state.dominant_dimension()),
        SafetyRegime::Standard => TemplateKey::dimension_safety(state.dominant_dimension()),
    };
    resolver.resolve(&desired, state)
}

fn level_variance(comparison: &DimensionComparison) -> Variance {
    if comparison.a_level == comparison.b_level {
        Variance::Aligned
    } else {
        Variance::Split
    }
}
