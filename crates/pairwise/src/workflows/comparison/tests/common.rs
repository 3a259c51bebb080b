use std::sync::{Arc, Mutex};

use crate::workflows::comparison::comparator::DimensionComparison;
use crate::workflows::comparison::domain::{
    DimensionKey, Direction, PersonProfile, Relation, Score, ScoreMap,
};
use crate::workflows::comparison::narrative::NarrativeAggregator;
use crate::workflows::comparison::resolver::{CorpusDefect, SelectionEvent, SelectionObserver};
use crate::workflows::comparison::state::{ComparisonState, ComparisonStateBuilder};
use crate::workflows::comparison::templates::TemplateRepository;

/// Keeps every selection and defect for later assertions.
#[derive(Default)]
pub(super) struct RecordingObserver {
    selections: Mutex<Vec<SelectionEvent>>,
    defects: Mutex<Vec<CorpusDefect>>,
}

impl RecordingObserver {
    pub(super) fn selections(&self) -> Vec<SelectionEvent> {
        self.selections.lock().expect("selection mutex poisoned").clone()
    }

    pub(super) fn defects(&self) -> Vec<CorpusDefect> {
        self.defects.lock().expect("defect mutex poisoned").clone()
    }
}

impl SelectionObserver for RecordingObserver {
    fn on_selection(&self, event: &SelectionEvent) {
        self.selections
            .lock()
            .expect("selection mutex poisoned")
            .push(event.clone());
    }

    fn on_defect(&self, defect: &CorpusDefect) {
        self.defects
            .lock()
            .expect("defect mutex poisoned")
            .push(defect.clone());
    }
}

pub(super) fn profile(name: &str, scores: [f64; 4]) -> PersonProfile {
    PersonProfile::new(name, ScoreMap::from_ordered(scores))
}

/// Scores given in enumeration order; `None` is an unanswered dimension.
pub(super) fn partial_profile(name: &str, scores: [Option<f64>; 4]) -> PersonProfile {
    let map = DimensionKey::ORDERED
        .into_iter()
        .zip(scores)
        .map(|(key, score)| (key, Score::from(score)))
        .collect();
    PersonProfile::new(name, map)
}

pub(super) fn state_for(a: [f64; 4], b: [f64; 4]) -> ComparisonState {
    ComparisonState::compare(&profile("Maya", a), &profile("Jonas", b))
}

pub(super) fn partial_state(a: [Option<f64>; 4], b: [Option<f64>; 4]) -> ComparisonState {
    ComparisonState::compare(&partial_profile("Maya", a), &partial_profile("Jonas", b))
}

/// A hand-built valid comparison, for dominance cases that need exact deltas.
pub(super) fn scored(dimension: DimensionKey, delta: f64, relation: Relation) -> DimensionComparison {
    DimensionComparison {
        dimension,
        a_score: Score::Known(delta),
        b_score: Score::Known(0.0),
        delta,
        relation,
        direction: Direction::AHigher,
        a_level: None,
        b_level: None,
        valid: true,
    }
}

pub(super) fn built_state(comparisons: [DimensionComparison; 4]) -> ComparisonState {
    ComparisonStateBuilder::new("Maya", "Jonas").build(comparisons)
}

pub(super) fn recording_aggregator() -> (NarrativeAggregator, Arc<RecordingObserver>) {
    let observer = Arc::new(RecordingObserver::default());
    let aggregator = NarrativeAggregator::new(TemplateRepository::standard(), observer.clone());
    (aggregator, observer)
}

/// Every score in 0.0..=4.0 at half-point steps, plus unknown.
pub(super) fn score_grid() -> Vec<Option<f64>> {
    let mut grid: Vec<Option<f64>> = (0..=8).map(|step| Some(f64::from(step) * 0.5)).collect();
    grid.push(None);
    grid
}
