use super::domain::{DimensionKey, PersonProfile, Relation, Section};
use super::insights::{InsightLists, RiskLabel, SimilarityLabel};
use super::renderer::NarrativeRenderer;
use super::resolver::{FallbackResolver, NoopObserver, Resolution, ResolutionTier, SelectionObserver};
use super::selectors::{self, SafetyRegime};
use super::state::ComparisonState;
use super::templates::TemplateRepository;
use serde::Serialize;
use std::sync::Arc;

/// A selected template after name substitution.
///
/// `section` is the slot the text fills. A borrowed safety template keeps its
/// own section only in `template_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSection {
    pub section: Section,
    pub template_id: String,
    pub tier: ResolutionTier,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentalMapEntry {
    pub dimension: DimensionKey,
    pub dimension_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
    pub narrative: RenderedSection,
}

/// Everything a rendering surface needs, produced in one piece.
///
/// On-screen sections, the share text, and document export all read from
/// this bundle and never re-derive wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeBundle {
    a_name: String,
    b_name: String,
    dominant_dimension: DimensionKey,
    dominant_tied: bool,
    headline: String,
    similarity_label: SimilarityLabel,
    risk_label: RiskLabel,
    similarity_complement: String,
    insights: InsightLists,
    safety_regime: SafetyRegime,
    dominant_difference: RenderedSection,
    mental_map: Vec<MentalMapEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_differences: Option<RenderedSection>,
    #[serde(rename = "loop")]
    loop_narrative: RenderedSection,
    felt_experience: RenderedSection,
    triggers: RenderedSection,
    safety: RenderedSection,
}

impl NarrativeBundle {
    pub fn a_name(&self) -> &str {
        &self.a_name
    }

    pub fn b_name(&self) -> &str {
        &self.b_name
    }

    pub fn dominant_dimension(&self) -> DimensionKey {
        self.dominant_dimension
    }

    pub fn dominant_tied(&self) -> bool {
        self.dominant_tied
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn similarity_label(&self) -> SimilarityLabel {
        self.similarity_label
    }

    pub fn risk_label(&self) -> RiskLabel {
        self.risk_label
    }

    pub fn similarity_complement(&self) -> &str {
        &self.similarity_complement
    }

    pub fn insights(&self) -> &InsightLists {
        &self.insights
    }

    pub fn safety_regime(&self) -> SafetyRegime {
        self.safety_regime
    }

    pub fn dominant_difference(&self) -> &RenderedSection {
        &self.dominant_difference
    }

    pub fn mental_map(&self) -> &[MentalMapEntry] {
        &self.mental_map
    }

    /// `None` when the dominant dimension is very different; show the
    /// structured insight lists in place of a paragraph.
    pub fn key_differences(&self) -> Option<&RenderedSection> {
        self.key_differences.as_ref()
    }

    pub fn loop_narrative(&self) -> &RenderedSection {
        &self.loop_narrative
    }

    pub fn felt_experience(&self) -> &RenderedSection {
        &self.felt_experience
    }

    pub fn triggers(&self) -> &RenderedSection {
        &self.triggers
    }

    pub fn safety(&self) -> &RenderedSection {
        &self.safety
    }

    /// Every rendered section in display order, mental map entries included.
    pub fn sections(&self) -> Vec<&RenderedSection> {
        let mut sections = vec![&self.dominant_difference];
        sections.extend(self.mental_map.iter().map(|entry| &entry.narrative));
        sections.extend(self.key_differences.as_ref());
        sections.extend([
            &self.loop_narrative,
            &self.felt_experience,
            &self.triggers,
            &self.safety,
        ]);
        sections
    }

    /// Plain-text export for sharing.
    pub fn share_text(&self) -> String {
        let mut lines = vec![
            format!("{} & {}: {}", self.a_name, self.b_name, self.similarity_label.label()),
            self.headline.clone(),
            self.similarity_complement.clone(),
            String::new(),
            Section::DominantDifference.label().to_string(),
            self.dominant_difference.text.clone(),
            String::new(),
            Section::MentalMap.label().to_string(),
        ];

        for entry in &self.mental_map {
            let relation = entry.relation.map_or("Not enough data", Relation::label);
            lines.push(format!(
                "- {} ({}): {}",
                entry.dimension_label, relation, entry.narrative.text
            ));
        }

        lines.push(String::new());
        lines.push(Section::KeyDifferences.label().to_string());
        match &self.key_differences {
            Some(section) => lines.push(section.text.clone()),
            None => {
                lines.push(format!(
                    "Strongly different: {}",
                    join_labels(&self.insights.very_different)
                ));
                if !self.insights.different.is_empty() {
                    lines.push(format!("Different: {}", join_labels(&self.insights.different)));
                }
            }
        }

        for section in [
            &self.loop_narrative,
            &self.felt_experience,
            &self.triggers,
            &self.safety,
        ] {
            lines.push(String::new());
            lines.push(section.section.label().to_string());
            lines.push(section.text.clone());
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Runs every section selector for a comparison and assembles the bundle.
#[derive(Clone)]
pub struct NarrativeAggregator {
    repository: Arc<TemplateRepository>,
    observer: Arc<dyn SelectionObserver>,
}

impl NarrativeAggregator {
    pub fn new(repository: Arc<TemplateRepository>, observer: Arc<dyn SelectionObserver>) -> Self {
        Self {
            repository,
            observer,
        }
    }

    /// Built-in corpus, no observer.
    pub fn standard() -> Self {
        Self::new(TemplateRepository::standard(), Arc::new(NoopObserver))
    }

    pub fn repository(&self) -> &TemplateRepository {
        &self.repository
    }

    pub fn compare(&self, a: &PersonProfile, b: &PersonProfile) -> (ComparisonState, NarrativeBundle) {
        let state = ComparisonState::compare(a, b);
        let bundle = self.compose(&state);
        (state, bundle)
    }

    pub fn compose(&self, state: &ComparisonState) -> NarrativeBundle {
        let resolver = FallbackResolver::new(&self.repository, self.observer.as_ref());
        let names = state.names();
        let renderer = NarrativeRenderer::new(&names.a, &names.b);
        let render = |section: Section, resolution: Resolution<'_>| RenderedSection {
            section,
            template_id: resolution.template.id.clone(),
            tier: resolution.tier,
            text: renderer.render(resolution.template.key.section, &resolution.template.text),
        };

        let dominant_difference = render(
            Section::DominantDifference,
            selectors::select_dominant_difference(&resolver, state),
        );
        let mental_map = selectors::select_mental_map(&resolver, state)
            .into_iter()
            .map(|(dimension, resolution)| MentalMapEntry {
                dimension,
                dimension_label: dimension.label(),
                relation: state.dimension(dimension).scored_relation(),
                narrative: render(Section::MentalMap, resolution),
            })
            .collect();
        let key_differences = selectors::select_key_differences(&resolver, state)
            .map(|resolution| render(Section::KeyDifferences, resolution));
        let loop_narrative = render(Section::Loop, selectors::select_loop(&resolver, state));
        let felt_experience = render(
            Section::FeltExperience,
            selectors::select_felt_experience(&resolver, state),
        );
        let triggers = render(Section::Triggers, selectors::select_triggers(&resolver, state));
        let safety = render(Section::Safety, selectors::select_safety(&resolver, state));

        let insights = state.insights();
        let risk_label = insights.risk_label();

        NarrativeBundle {
            a_name: names.a.clone(),
            b_name: names.b.clone(),
            dominant_dimension: state.dominant_dimension(),
            dominant_tied: state.dominant_tied(),
            headline: headline(state),
            similarity_label: insights.similarity_label(),
            risk_label,
            similarity_complement: similarity_complement(state, risk_label, insights.very_different.len()),
            insights,
            safety_regime: SafetyRegime::for_state(state),
            dominant_difference,
            mental_map,
            key_differences,
            loop_narrative,
            felt_experience,
            triggers,
            safety,
        }
    }
}

fn headline(state: &ComparisonState) -> String {
    let names = state.names();
    let label = state.dominant_dimension().label();
    if state.dominant_tied() {
        format!(
            "Several dimensions stand out equally for {} and {}; {} is listed first.",
            names.a, names.b, label
        )
    } else {
        format!(
            "The clearest difference between {} and {} is {}.",
            names.a, names.b, label
        )
    }
}

fn similarity_complement(state: &ComparisonState, risk: RiskLabel, very_different: usize) -> String {
    let names = state.names();
    let total = DimensionKey::ORDERED.len();
    match risk {
        RiskLabel::High => format!(
            "{} and {} differ strongly on {} of {} dimensions, so misunderstandings are likely without deliberate check-ins.",
            names.a, names.b, very_different, total
        ),
        RiskLabel::Moderate => format!(
            "{} and {} share common ground, with {} dimension{} where their styles pull strongly apart.",
            names.a,
            names.b,
            very_different,
            if very_different == 1 { "" } else { "s" }
        ),
        RiskLabel::Low => format!(
            "No dimension shows a strong split between {} and {}.",
            names.a, names.b
        ),
    }
}

fn join_labels(keys: &[DimensionKey]) -> String {
    if keys.is_empty() {
        return "none".to_string();
    }
    keys.iter()
        .map(|key| key.label())
        .collect::<Vec<_>>()
        .join(", ")
}
