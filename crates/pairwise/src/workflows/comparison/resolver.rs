use super::domain::{Section, Variance};
use super::state::ComparisonState;
use super::templates::{Template, TemplateKey, TemplateRepository};
use serde::Serialize;
use tracing::{debug, warn};

/// Which step of the fallback chain produced a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionTier {
    Exact,
    LowConfidenceDimension,
    VeryLowConfidenceGlobal,
    DimensionSafety,
    GlobalSafety,
    SectionFirst,
    RepositoryFirst,
}

impl ResolutionTier {
    /// Tiers that a complete corpus never reaches.
    pub const fn is_defect(self) -> bool {
        matches!(
            self,
            Self::GlobalSafety | Self::SectionFirst | Self::RepositoryFirst
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Exact => "exact match",
            Self::LowConfidenceDimension => "low-confidence dimension fallback",
            Self::VeryLowConfidenceGlobal => "very-low-confidence global fallback",
            Self::DimensionSafety => "dimension safety fallback",
            Self::GlobalSafety => "global safety fallback",
            Self::SectionFirst => "first template in section",
            Self::RepositoryFirst => "first template in repository",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'r> {
    pub template: &'r Template,
    pub tier: ResolutionTier,
}

/// One selection decision, emitted for every resolved template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionEvent {
    pub desired: TemplateKey,
    pub tier: ResolutionTier,
    pub template_id: String,
}

/// Corpus authoring defect observed while resolving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorpusDefect {
    DuplicateExactMatch {
        key: TemplateKey,
        template_ids: Vec<String>,
    },
    FallbackTierReached {
        desired: TemplateKey,
        tier: ResolutionTier,
        template_id: String,
    },
    EmptySection {
        section: Section,
    },
}

/// Observability hook for selection decisions and corpus defects.
pub trait SelectionObserver: Send + Sync {
    fn on_selection(&self, event: &SelectionEvent);
    fn on_defect(&self, defect: &CorpusDefect);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SelectionObserver for NoopObserver {
    fn on_selection(&self, _event: &SelectionEvent) {}

    fn on_defect(&self, _defect: &CorpusDefect) {}
}

/// Forwards selections as `debug` events and defects as `warn` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SelectionObserver for TracingObserver {
    fn on_selection(&self, event: &SelectionEvent) {
        debug!(
            section = ?event.desired.section,
            dimension = ?event.desired.dimension,
            relation = ?event.desired.relation,
            direction = ?event.desired.direction,
            variance = ?event.desired.variance,
            tier = event.tier.label(),
            template_id = %event.template_id,
            "narrative template selected"
        );
    }

    fn on_defect(&self, defect: &CorpusDefect) {
        warn!(?defect, "template corpus defect");
    }
}

/// Total lookup from a desired metadata tuple to exactly one template.
pub struct FallbackResolver<'r> {
    repository: &'r TemplateRepository,
    observer: &'r dyn SelectionObserver,
}

impl<'r> FallbackResolver<'r> {
    pub fn new(repository: &'r TemplateRepository, observer: &'r dyn SelectionObserver) -> Self {
        Self {
            repository,
            observer,
        }
    }

    pub fn resolve(&self, desired: &TemplateKey, state: &ComparisonState) -> Resolution<'r> {
        let resolution = self.walk_chain(desired, state);

        if resolution.tier.is_defect() {
            self.observer.on_defect(&CorpusDefect::FallbackTierReached {
                desired: *desired,
                tier: resolution.tier,
                template_id: resolution.template.id.clone(),
            });
        }

        self.observer.on_selection(&SelectionEvent {
            desired: *desired,
            tier: resolution.tier,
            template_id: resolution.template.id.clone(),
        });

        resolution
    }

    fn walk_chain(&self, desired: &TemplateKey, state: &ComparisonState) -> Resolution<'r> {
        if let Some(template) = self.lookup(desired) {
            return Resolution {
                template,
                tier: ResolutionTier::Exact,
            };
        }

        if let Some(dimension) = desired.dimension {
            if state.low_confidence() && !state.very_low_confidence() {
                if let Some(template) = self.lookup(&TemplateKey::low_confidence_safety(dimension))
                {
                    return Resolution {
                        template,
                        tier: ResolutionTier::LowConfidenceDimension,
                    };
                }
            }
        }

        if state.very_low_confidence() {
            let global = self
                .lookup(&TemplateKey::very_low_confidence(Variance::SeverelyIncomplete))
                .or_else(|| self.lookup(&TemplateKey::very_low_confidence(Variance::Incomplete)));
            if let Some(template) = global {
                return Resolution {
                    template,
                    tier: ResolutionTier::VeryLowConfidenceGlobal,
                };
            }
        }

        if let Some(dimension) = desired.dimension {
            if let Some(template) = self.lookup(&TemplateKey::dimension_safety(dimension)) {
                return Resolution {
                    template,
                    tier: ResolutionTier::DimensionSafety,
                };
            }
        }

        if let Some(template) = self.lookup(&TemplateKey::GLOBAL_SAFETY) {
            return Resolution {
                template,
                tier: ResolutionTier::GlobalSafety,
            };
        }

        match self.repository.first_in_section(desired.section) {
            Some(template) => Resolution {
                template,
                tier: ResolutionTier::SectionFirst,
            },
            None => {
                self.observer.on_defect(&CorpusDefect::EmptySection {
                    section: desired.section,
                });
                Resolution {
                    template: self.repository.first(),
                    tier: ResolutionTier::RepositoryFirst,
                }
            }
        }
    }

    fn lookup(&self, key: &TemplateKey) -> Option<&'r Template> {
        let matches = self.repository.exact(key);
        if matches.len() > 1 {
            self.observer.on_defect(&CorpusDefect::DuplicateExactMatch {
                key: *key,
                template_ids: matches.iter().map(|template| template.id.clone()).collect(),
            });
        }
        matches.first().copied()
    }
}
