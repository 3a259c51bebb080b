use super::comparator::DimensionComparison;
use super::domain::{DimensionKey, Relation};
use serde::Serialize;

/// Very-different count at which the risk label becomes `high`.
pub const HIGH_RISK_VERY_DIFFERENT_COUNT: usize = 3;
/// Very-different count at which the risk label becomes `moderate`.
pub const MODERATE_RISK_VERY_DIFFERENT_COUNT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityLabel {
    HighlySimilar,
    MostlySimilar,
    Mixed,
    LargelyDifferent,
}

impl SimilarityLabel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighlySimilar => "Highly similar",
            Self::MostlySimilar => "Mostly similar",
            Self::Mixed => "A mix of similar and different",
            Self::LargelyDifferent => "Largely different",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    Low,
    Moderate,
    High,
}

impl RiskLabel {
    pub const fn from_very_different_count(count: usize) -> Self {
        if count >= HIGH_RISK_VERY_DIFFERENT_COUNT {
            Self::High
        } else if count >= MODERATE_RISK_VERY_DIFFERENT_COUNT {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low friction risk",
            Self::Moderate => "Moderate friction risk",
            Self::High => "High friction risk",
        }
    }
}

/// Dimensions grouped by relation, each list in [`DimensionKey::ORDERED`] order.
///
/// Dimensions without two known scores land in `unscored` rather than being
/// counted as similar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InsightLists {
    pub similar: Vec<DimensionKey>,
    pub different: Vec<DimensionKey>,
    pub very_different: Vec<DimensionKey>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unscored: Vec<DimensionKey>,
}

impl InsightLists {
    /// The single derivation of relation lists; labels and narratives read from here.
    pub fn from_comparisons<'c, I>(comparisons: I) -> Self
    where
        I: IntoIterator<Item = &'c DimensionComparison>,
    {
        let mut ordered: Vec<&DimensionComparison> = comparisons.into_iter().collect();
        ordered.sort_by_key(|comparison| comparison.dimension.index());

        let mut lists = Self::default();
        for comparison in ordered {
            let bucket = match comparison.scored_relation() {
                Some(Relation::Similar) => &mut lists.similar,
                Some(Relation::Different) => &mut lists.different,
                Some(Relation::VeryDifferent) => &mut lists.very_different,
                None => &mut lists.unscored,
            };
            bucket.push(comparison.dimension);
        }
        lists
    }

    pub fn scored_count(&self) -> usize {
        self.similar.len() + self.different.len() + self.very_different.len()
    }

    pub fn similarity_label(&self) -> SimilarityLabel {
        let scored = self.scored_count();
        let similar = self.similar.len();
        let very_different = self.very_different.len();

        if scored == 0 {
            SimilarityLabel::Mixed
        } else if similar == scored {
            SimilarityLabel::HighlySimilar
        } else if very_different == 0 && similar + 1 >= scored {
            SimilarityLabel::MostlySimilar
        } else if similar == 0 && very_different >= 2 {
            SimilarityLabel::LargelyDifferent
        } else {
            SimilarityLabel::Mixed
        }
    }

    pub fn risk_label(&self) -> RiskLabel {
        RiskLabel::from_very_different_count(self.very_different.len())
    }
}
