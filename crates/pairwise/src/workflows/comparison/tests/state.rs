use super::common::*;
use crate::workflows::comparison::domain::{DimensionKey, Relation, DOMINANCE_PRIORITY};
use crate::workflows::comparison::insights::{RiskLabel, SimilarityLabel};

#[test]
fn equal_different_deltas_resolve_by_priority() {
    let state = built_state([
        scored(DimensionKey::Engagement, 1.0, Relation::Different),
        scored(DimensionKey::Expression, 1.0, Relation::Different),
        scored(DimensionKey::Reassurance, 1.0, Relation::Different),
        scored(DimensionKey::Repair, 1.0, Relation::Different),
    ]);

    assert_eq!(state.dominant_dimension(), DOMINANCE_PRIORITY[0]);
    assert_eq!(state.dominant_dimension(), DimensionKey::Reassurance);
    assert!(state.dominant_tied());
}

#[test]
fn very_different_wins_over_a_slightly_larger_different_delta() {
    let state = built_state([
        scored(DimensionKey::Engagement, 1.605, Relation::Different),
        scored(DimensionKey::Expression, 1.605, Relation::Different),
        scored(DimensionKey::Reassurance, 1.605, Relation::Different),
        scored(DimensionKey::Repair, 1.6, Relation::VeryDifferent),
    ]);

    assert_eq!(state.dominant_dimension(), DimensionKey::Repair);
    assert!(state.dominant_tied());
}

#[test]
fn clear_maximum_is_not_tied() {
    let state = state_for([3.0, 2.0, 2.0, 2.0], [1.0, 2.0, 1.5, 2.2]);

    assert_eq!(state.dominant_dimension(), DimensionKey::Engagement);
    assert!(!state.dominant_tied());
}

#[test]
fn input_order_of_comparisons_does_not_matter() {
    let forward = built_state([
        scored(DimensionKey::Engagement, 0.2, Relation::Similar),
        scored(DimensionKey::Expression, 1.2, Relation::Different),
        scored(DimensionKey::Reassurance, 0.4, Relation::Similar),
        scored(DimensionKey::Repair, 0.0, Relation::Similar),
    ]);
    let shuffled = built_state([
        scored(DimensionKey::Repair, 0.0, Relation::Similar),
        scored(DimensionKey::Reassurance, 0.4, Relation::Similar),
        scored(DimensionKey::Expression, 1.2, Relation::Different),
        scored(DimensionKey::Engagement, 0.2, Relation::Similar),
    ]);

    assert_eq!(forward, shuffled);
    assert_eq!(
        shuffled
            .dimensions()
            .iter()
            .map(|comparison| comparison.dimension)
            .collect::<Vec<_>>(),
        DimensionKey::ORDERED.to_vec()
    );
}

#[test]
fn confidence_flags_follow_the_valid_count() {
    let full = state_for([1.0; 4], [2.0; 4]);
    assert_eq!(full.valid_count(), 4);
    assert!(!full.low_confidence());
    assert!(!full.very_low_confidence());

    let three = partial_state(
        [Some(1.0), Some(1.0), Some(1.0), None],
        [Some(2.0), Some(2.0), Some(2.0), Some(2.0)],
    );
    assert_eq!(three.valid_count(), 3);
    assert!(three.low_confidence());
    assert!(!three.very_low_confidence());

    let two = partial_state(
        [Some(1.0), None, Some(1.0), None],
        [Some(2.0), Some(2.0), Some(2.0), None],
    );
    assert_eq!(two.valid_count(), 2);
    assert!(two.low_confidence());
    assert!(!two.very_low_confidence());

    let one = partial_state([Some(1.0), None, None, None], [Some(2.0), None, None, None]);
    assert_eq!(one.valid_count(), 1);
    assert!(one.low_confidence());
    assert!(one.very_low_confidence());
}

#[test]
fn no_valid_dimension_falls_back_to_first_priority() {
    let state = partial_state([None; 4], [Some(2.0); 4]);

    assert_eq!(state.valid_count(), 0);
    assert_eq!(state.dominant_dimension(), DOMINANCE_PRIORITY[0]);
    assert!(!state.dominant_tied());
    assert!(state.very_low_confidence());
    assert_eq!(state.similarity_label(), SimilarityLabel::Mixed);
    assert_eq!(state.risk_label(), RiskLabel::Low);
}

#[test]
fn relation_lists_agree_with_per_dimension_relations() {
    for a in score_grid() {
        for b in score_grid() {
            let state = partial_state([a, Some(2.0), b, a], [b, a, Some(0.5), Some(4.0)]);
            let insights = state.insights();

            for comparison in state.dimensions() {
                let listed = insights.very_different.contains(&comparison.dimension);
                let very_different =
                    comparison.valid && comparison.relation == Relation::VeryDifferent;
                assert_eq!(listed, very_different, "{:?}", comparison);
            }
            assert_eq!(state.risk_count_very_different(), insights.very_different.len());
            assert_eq!(state.risk_label(), insights.risk_label());
            assert_eq!(state.similarity_label(), insights.similarity_label());
        }
    }
}

#[test]
fn unknown_dimension_never_outranks_a_valid_very_different_one() {
    let state = partial_state(
        [Some(0.5), Some(2.0), None, Some(2.0)],
        [Some(3.5), Some(2.0), Some(4.0), Some(2.0)],
    );

    let reassurance = state.dimension(DimensionKey::Reassurance);
    assert!(!reassurance.valid);
    assert_eq!(reassurance.relation, Relation::Similar);
    assert_eq!(state.dominant_dimension(), DimensionKey::Engagement);
    assert!(state.low_confidence());
}
