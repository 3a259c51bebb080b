use super::comparator::{compare_dimension, DimensionComparison};
use super::domain::{DimensionKey, PersonProfile, Relation, DOMINANCE_PRIORITY};
use super::insights::{InsightLists, RiskLabel, SimilarityLabel};
use serde::Serialize;

/// Two deltas closer than this are treated as tied for dominance.
pub const DOMINANCE_EPSILON: f64 = 0.01;
/// Fewer valid dimensions than this is very low confidence.
pub const VERY_LOW_CONFIDENCE_FLOOR: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantNames {
    pub a: String,
    pub b: String,
}

/// Immutable summary of one comparison, shared by every narrative section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonState {
    names: ParticipantNames,
    dominant_dimension: DimensionKey,
    dominant_tied: bool,
    similarity_label: SimilarityLabel,
    risk_label: RiskLabel,
    risk_count_very_different: usize,
    dimensions: [DimensionComparison; 4],
    valid_count: usize,
    low_confidence: bool,
    very_low_confidence: bool,
}

impl ComparisonState {
    /// Compares two profiles dimension by dimension and aggregates the result.
    pub fn compare(a: &PersonProfile, b: &PersonProfile) -> Self {
        let comparisons = DimensionKey::ORDERED
            .map(|key| compare_dimension(key, a.scores.get(key), b.scores.get(key)));
        ComparisonStateBuilder::new(&a.name, &b.name).build(comparisons)
    }

    pub fn names(&self) -> &ParticipantNames {
        &self.names
    }

    pub fn dominant_dimension(&self) -> DimensionKey {
        self.dominant_dimension
    }

    pub fn dominant_tied(&self) -> bool {
        self.dominant_tied
    }

    pub fn dominant(&self) -> &DimensionComparison {
        self.dimension(self.dominant_dimension)
    }

    pub fn similarity_label(&self) -> SimilarityLabel {
        self.similarity_label
    }

    pub fn risk_label(&self) -> RiskLabel {
        self.risk_label
    }

    pub fn risk_count_very_different(&self) -> usize {
        self.risk_count_very_different
    }

    pub fn dimension(&self, key: DimensionKey) -> &DimensionComparison {
        &self.dimensions[key.index()]
    }

    /// Per-dimension comparisons in [`DimensionKey::ORDERED`] order.
    pub fn dimensions(&self) -> &[DimensionComparison; 4] {
        &self.dimensions
    }

    pub fn valid_count(&self) -> usize {
        self.valid_count
    }

    pub fn low_confidence(&self) -> bool {
        self.low_confidence
    }

    pub fn very_low_confidence(&self) -> bool {
        self.very_low_confidence
    }

    pub fn insights(&self) -> InsightLists {
        InsightLists::from_comparisons(&self.dimensions)
    }
}

/// Packages four dimension comparisons and the display names into a [`ComparisonState`].
#[derive(Debug, Clone)]
pub struct ComparisonStateBuilder {
    names: ParticipantNames,
}

impl ComparisonStateBuilder {
    pub fn new(a_name: impl Into<String>, b_name: impl Into<String>) -> Self {
        Self {
            names: ParticipantNames {
                a: a_name.into(),
                b: b_name.into(),
            },
        }
    }

    /// Expects each dimension exactly once, in any order.
    pub fn build(self, comparisons: [DimensionComparison; 4]) -> ComparisonState {
        let mut slots = comparisons;
        slots.sort_by_key(|comparison| comparison.dimension.index());
        debug_assert!(slots
            .iter()
            .enumerate()
            .all(|(slot, comparison)| comparison.dimension.index() == slot));

        let (dominant_dimension, dominant_tied) = select_dominant(&slots);
        let insights = InsightLists::from_comparisons(&slots);
        let valid_count = slots.iter().filter(|comparison| comparison.valid).count();

        ComparisonState {
            names: self.names,
            dominant_dimension,
            dominant_tied,
            similarity_label: insights.similarity_label(),
            risk_label: insights.risk_label(),
            risk_count_very_different: insights.very_different.len(),
            dimensions: slots,
            valid_count,
            // Anything short of the full set is low confidence.
            low_confidence: valid_count < DimensionKey::ORDERED.len(),
            very_low_confidence: valid_count < VERY_LOW_CONFIDENCE_FLOOR,
        }
    }
}

fn select_dominant(comparisons: &[DimensionComparison]) -> (DimensionKey, bool) {
    let valid: Vec<&DimensionComparison> = comparisons
        .iter()
        .filter(|comparison| comparison.valid)
        .collect();

    let Some(max_delta) = valid.iter().map(|comparison| comparison.delta).reduce(f64::max) else {
        return (DOMINANCE_PRIORITY[0], false);
    };

    let candidates: Vec<&DimensionComparison> = valid
        .into_iter()
        .filter(|comparison| (max_delta - comparison.delta).abs() < DOMINANCE_EPSILON)
        .collect();
    let tied = candidates.len() > 1;

    let very_different: Vec<&DimensionComparison> = candidates
        .iter()
        .copied()
        .filter(|comparison| comparison.relation == Relation::VeryDifferent)
        .collect();
    let pool = if very_different.is_empty() {
        candidates
    } else {
        very_different
    };

    let dominant = DOMINANCE_PRIORITY
        .into_iter()
        .find(|key| pool.iter().any(|comparison| comparison.dimension == *key))
        .unwrap_or(DOMINANCE_PRIORITY[0]);

    (dominant, tied)
}
