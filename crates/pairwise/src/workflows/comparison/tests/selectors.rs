use super::common::*;
use crate::workflows::comparison::domain::{DimensionKey, Direction, Relation, Section, Variance};
use crate::workflows::comparison::resolver::{FallbackResolver, ResolutionTier};
use crate::workflows::comparison::selectors::{
    select_dominant_difference, select_felt_experience, select_key_differences, select_loop,
    select_mental_map, select_safety, select_triggers, SafetyRegime,
};
use crate::workflows::comparison::templates::TemplateRepository;

#[test]
fn key_differences_is_absent_for_a_very_different_dominant() {
    let repository = TemplateRepository::standard();
    let observer = RecordingObserver::default();
    let resolver = FallbackResolver::new(&repository, &observer);

    for (a, b) in [(0.0, 4.0), (4.0, 0.0), (0.4, 2.0), (3.5, 0.5)] {
        let state = state_for([a, 2.0, 2.0, 2.0], [b, 2.0, 2.0, 2.0]);
        assert_eq!(state.dominant().relation, Relation::VeryDifferent);
        assert!(select_key_differences(&resolver, &state).is_none());
    }
    assert!(observer.selections().is_empty());
}

#[test]
fn key_differences_uses_direction_when_different() {
    let repository = TemplateRepository::standard();
    let observer = RecordingObserver::default();
    let resolver = FallbackResolver::new(&repository, &observer);
    let state = state_for([2.0, 2.0, 1.0, 2.0], [2.0, 2.0, 2.0, 2.0]);

    let resolution = select_key_differences(&resolver, &state).expect("template selected");

    assert_eq!(resolution.template.id, "K12");
    assert_eq!(resolution.template.key.direction, Some(Direction::BHigher));
}

#[test]
fn key_differences_uses_level_variance_when_similar() {
    let repository = TemplateRepository::standard();
    let observer = RecordingObserver::default();
    let resolver = FallbackResolver::new(&repository, &observer);

    let aligned = state_for([2.0, 2.0, 2.0, 3.0], [2.0, 2.0, 2.0, 3.5]);
    assert_eq!(aligned.dominant_dimension(), DimensionKey::Repair);
    let resolution = select_key_differences(&resolver, &aligned).expect("template selected");
    assert_eq!(resolution.template.key.variance, Some(Variance::Aligned));
    assert_eq!(resolution.template.id, "K13");

    let split = state_for([2.0, 2.0, 2.0, 2.2], [2.0, 2.0, 2.0, 2.6]);
    let resolution = select_key_differences(&resolver, &split).expect("template selected");
    assert_eq!(resolution.template.key.variance, Some(Variance::Split));
    assert_eq!(resolution.template.id, "K14");
}

#[test]
fn mental_map_covers_every_dimension_in_order() {
    let repository = TemplateRepository::standard();
    let observer = RecordingObserver::default();
    let resolver = FallbackResolver::new(&repository, &observer);
    let state = state_for([0.5, 2.0, 1.0, 3.0], [3.5, 2.2, 2.0, 3.0]);

    let entries = select_mental_map(&resolver, &state);

    let ids: Vec<&str> = entries
        .iter()
        .map(|(_, resolution)| resolution.template.id.as_str())
        .collect();
    assert_eq!(ids, vec!["M03", "M04", "M08", "M10"]);
    assert_eq!(
        entries.iter().map(|(key, _)| *key).collect::<Vec<_>>(),
        DimensionKey::ORDERED.to_vec()
    );
}

#[test]
fn loop_for_a_similar_dominant_falls_through_to_safety() {
    let repository = TemplateRepository::standard();
    let observer = RecordingObserver::default();
    let resolver = FallbackResolver::new(&repository, &observer);
    let state = state_for([2.0; 4], [2.0; 4]);

    let resolution = select_loop(&resolver, &state);

    assert_eq!(resolution.tier, ResolutionTier::DimensionSafety);
    assert_eq!(resolution.template.key.section, Section::Safety);
    assert_eq!(resolution.template.key.dimension, Some(state.dominant_dimension()));
    assert!(observer.defects().is_empty());
}

#[test]
fn loop_matches_relation_of_the_dominant_dimension() {
    let repository = TemplateRepository::standard();
    let observer = RecordingObserver::default();
    let resolver = FallbackResolver::new(&repository, &observer);
    let state = state_for([2.0, 0.5, 2.0, 2.0], [2.0, 3.0, 2.0, 2.0]);

    let resolution = select_loop(&resolver, &state);

    assert_eq!(resolution.template.id, "L04");
    assert_eq!(resolution.tier, ResolutionTier::Exact);
}

#[test]
fn felt_experience_without_direction_uses_the_safety_selection() {
    let repository = TemplateRepository::standard();
    let observer = RecordingObserver::default();
    let resolver = FallbackResolver::new(&repository, &observer);
    let state = state_for([2.0; 4], [2.0; 4]);
    assert_eq!(state.dominant().direction, Direction::Neither);

    let felt = select_felt_experience(&resolver, &state);
    let safety = select_safety(&resolver, &state);

    assert_eq!(felt.template.id, safety.template.id);
    assert_eq!(felt.template.key.section, Section::Safety);
}

#[test]
fn felt_experience_follows_direction() {
    let repository = TemplateRepository::standard();
    let observer = RecordingObserver::default();
    let resolver = FallbackResolver::new(&repository, &observer);
    let state = state_for([3.0, 2.0, 2.0, 2.0], [1.0, 2.0, 2.0, 2.0]);

    let resolution = select_felt_experience(&resolver, &state);

    assert_eq!(resolution.template.id, "F01");
}

#[test]
fn dominant_difference_and_triggers_track_the_dominant_dimension() {
    let repository = TemplateRepository::standard();
    let observer = RecordingObserver::default();
    let resolver = FallbackResolver::new(&repository, &observer);
    let state = state_for([2.0, 2.0, 2.0, 0.5], [2.0, 2.0, 2.0, 2.5]);

    assert_eq!(select_dominant_difference(&resolver, &state).template.id, "D04");
    assert_eq!(select_triggers(&resolver, &state).template.id, "T04");
}

#[test]
fn safety_regimes_are_mutually_exclusive() {
    let repository = TemplateRepository::standard();
    let observer = RecordingObserver::default();
    let resolver = FallbackResolver::new(&repository, &observer);

    let standard = state_for([1.0, 2.0, 3.0, 2.0], [1.0, 2.0, 1.0, 2.0]);
    assert_eq!(SafetyRegime::for_state(&standard), SafetyRegime::Standard);
    assert_eq!(select_safety(&resolver, &standard).template.id, "S03");

    let low = partial_state(
        [Some(1.0), Some(2.0), Some(3.0), None],
        [Some(1.0), Some(2.0), Some(1.0), Some(2.0)],
    );
    assert_eq!(SafetyRegime::for_state(&low), SafetyRegime::LowConfidence);
    assert_eq!(select_safety(&resolver, &low).template.id, "S13");

    let very_low = partial_state([Some(1.0), None, None, None], [Some(3.0), None, None, None]);
    assert_eq!(SafetyRegime::for_state(&very_low), SafetyRegime::VeryLowConfidence);
    assert_eq!(select_safety(&resolver, &very_low).template.id, "S22");

    assert!(observer
        .selections()
        .iter()
        .all(|event| event.tier == ResolutionTier::Exact));
}
