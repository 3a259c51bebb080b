use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lowest score a profile dimension can carry.
pub const SCORE_MIN: f64 = 0.0;
/// Highest score a profile dimension can carry.
pub const SCORE_MAX: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionKey {
    Engagement,
    Expression,
    Reassurance,
    Repair,
}

/// Tie-break order for the dominant dimension. Deliberately not the enumeration order.
pub const DOMINANCE_PRIORITY: [DimensionKey; 4] = [
    DimensionKey::Reassurance,
    DimensionKey::Engagement,
    DimensionKey::Repair,
    DimensionKey::Expression,
];

/// Dimension carrying the global very-low-confidence safety templates.
pub const CONFIDENCE_ANCHOR: DimensionKey = DimensionKey::Engagement;

impl DimensionKey {
    /// Canonical enumeration order used for lists, maps, and per-dimension output.
    pub const ORDERED: [Self; 4] = [
        Self::Engagement,
        Self::Expression,
        Self::Reassurance,
        Self::Repair,
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::Engagement => 0,
            Self::Expression => 1,
            Self::Reassurance => 2,
            Self::Repair => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Engagement => "engagement",
            Self::Expression => "expression",
            Self::Reassurance => "reassurance",
            Self::Repair => "repair",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Engagement => "Conflict Engagement",
            Self::Expression => "Emotional Expression",
            Self::Reassurance => "Reassurance Need",
            Self::Repair => "Repair Pace",
        }
    }

    /// Accepts either the snake_case key or the display label, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ORDERED.into_iter().find(|key| {
            key.as_str() == normalized || key.label().to_ascii_lowercase() == normalized
        })
    }
}

/// A dimension score that is either known and in range, or explicitly unknown.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Score {
    Known(f64),
    #[default]
    Unknown,
}

impl Score {
    /// Non-finite or out-of-range raw values are treated as unknown.
    pub fn from_raw(value: f64) -> Self {
        if value.is_finite() && (SCORE_MIN..=SCORE_MAX).contains(&value) {
            Self::Known(value)
        } else {
            Self::Unknown
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<Option<f64>> for Score {
    fn from(value: Option<f64>) -> Self {
        value.map(Self::from_raw).unwrap_or(Self::Unknown)
    }
}

impl From<Score> for Option<f64> {
    fn from(score: Score) -> Self {
        score.value()
    }
}

/// Per-person map of dimension scores. Missing dimensions read as unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMap(BTreeMap<DimensionKey, Score>);

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from raw values given in [`DimensionKey::ORDERED`] order.
    pub fn from_ordered(values: [f64; 4]) -> Self {
        DimensionKey::ORDERED
            .into_iter()
            .zip(values)
            .map(|(key, value)| (key, Score::from_raw(value)))
            .collect()
    }

    pub fn with(mut self, key: DimensionKey, score: Score) -> Self {
        self.insert(key, score);
        self
    }

    pub fn insert(&mut self, key: DimensionKey, score: Score) -> Option<Score> {
        self.0.insert(key, score)
    }

    pub fn get(&self, key: DimensionKey) -> Score {
        self.0.get(&key).copied().unwrap_or(Score::Unknown)
    }

    pub fn contains(&self, key: DimensionKey) -> bool {
        self.0.contains_key(&key)
    }
}

impl FromIterator<(DimensionKey, Score)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (DimensionKey, Score)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One person's side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonProfile {
    pub name: String,
    #[serde(default)]
    pub scores: ScoreMap,
}

impl PersonProfile {
    pub fn new(name: impl Into<String>, scores: ScoreMap) -> Self {
        Self {
            name: name.into(),
            scores,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Similar,
    Different,
    VeryDifferent,
}

impl Relation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Similar => "Similar",
            Self::Different => "Different",
            Self::VeryDifferent => "Very different",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    AHigher,
    BHigher,
    #[serde(rename = "none")]
    Neither,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Shape of the spread between the two people, used to pick template variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variance {
    /// Both scores fall in the same level band.
    Aligned,
    /// Scores are close but straddle a level boundary.
    Split,
    /// Partial data; used by the low-confidence safety templates.
    Mixed,
    Incomplete,
    SeverelyIncomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    DominantDifference,
    MentalMap,
    KeyDifferences,
    Loop,
    FeltExperience,
    Triggers,
    Safety,
}

impl Section {
    pub const ORDERED: [Self; 7] = [
        Self::DominantDifference,
        Self::MentalMap,
        Self::KeyDifferences,
        Self::Loop,
        Self::FeltExperience,
        Self::Triggers,
        Self::Safety,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::DominantDifference => "Dominant Difference",
            Self::MentalMap => "Mental Map",
            Self::KeyDifferences => "Key Differences",
            Self::Loop => "The Loop",
            Self::FeltExperience => "How It Feels",
            Self::Triggers => "Triggers",
            Self::Safety => "Staying Safe",
        }
    }

    /// Only the loop corpus writes its subjects as bare `A` / `B` tokens.
    pub const fn uses_bare_subjects(self) -> bool {
        matches!(self, Self::Loop)
    }
}
