//! Pairwise profile comparison and narrative selection.
//!
//! Two score maps flow through the per-dimension comparator into an immutable
//! [`ComparisonState`]. Each narrative section then asks the
//! [`FallbackResolver`] for exactly one template, which the
//! [`NarrativeRenderer`] personalizes before [`NarrativeAggregator`] packages
//! everything into a [`NarrativeBundle`].

pub mod comparator;
pub mod domain;
pub mod insights;
pub mod narrative;
pub mod renderer;
pub mod resolver;
pub mod router;
pub mod selectors;
pub mod state;
pub mod templates;

#[cfg(test)]
mod tests;

pub use comparator::{compare_dimension, DimensionComparison};
pub use domain::{
    DimensionKey, Direction, Level, PersonProfile, Relation, Score, ScoreMap, Section, Variance,
    CONFIDENCE_ANCHOR, DOMINANCE_PRIORITY,
};
pub use insights::{InsightLists, RiskLabel, SimilarityLabel};
pub use narrative::{MentalMapEntry, NarrativeAggregator, NarrativeBundle, RenderedSection};
pub use renderer::NarrativeRenderer;
pub use resolver::{
    CorpusDefect, FallbackResolver, NoopObserver, Resolution, ResolutionTier, SelectionEvent,
    SelectionObserver, TracingObserver,
};
pub use router::{comparison_router, ComparisonRequest, ComparisonResponse};
pub use selectors::SafetyRegime;
pub use state::{ComparisonState, ComparisonStateBuilder, ParticipantNames};
pub use templates::{
    CorpusError, CorpusIssue, Template, TemplateFilter, TemplateKey, TemplateRepository,
};
