use crate::infra::{load_repository, selection_observer, InMemorySelectionLog};
use clap::Args;
use pairwise::config::AppConfig;
use pairwise::error::AppError;
use pairwise::workflows::comparison::{
    ComparisonResponse, ComparisonState, DimensionComparison, Direction, NarrativeAggregator,
    NarrativeBundle, PersonProfile, ScoreMap, SelectionObserver,
};
use pairwise::workflows::profiles::ProfileImporter;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// Display name for the first person
    #[arg(long, default_value = "A")]
    pub(crate) a_name: String,
    /// Display name for the second person
    #[arg(long, default_value = "B")]
    pub(crate) b_name: String,
    /// Scores for the first person, e.g. engagement=1.2,expression=3,reassurance=,repair=2.5
    #[arg(long, value_parser = crate::infra::parse_scores)]
    pub(crate) a: Option<ScoreMap>,
    /// Scores for the second person, same format as --a
    #[arg(long, value_parser = crate::infra::parse_scores)]
    pub(crate) b: Option<ScoreMap>,
    /// Score sheet with person,dimension,score rows for exactly two people
    #[arg(long, conflicts_with_all = ["a", "b"])]
    pub(crate) csv: Option<PathBuf>,
    /// Print the plain-text share version instead of the full report
    #[arg(long)]
    pub(crate) share: bool,
    /// Print the comparison state and bundle as JSON
    #[arg(long, conflicts_with = "share")]
    pub(crate) json: bool,
    /// List every template selection and corpus defect after the report
    #[arg(long)]
    pub(crate) trace: bool,
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let (a, b) = load_profiles(&args)?;

    let repository = load_repository(&config.narrative)?;
    let log = InMemorySelectionLog::default();
    let observer: Arc<dyn SelectionObserver> = if args.trace {
        Arc::new(log.clone())
    } else {
        selection_observer(&config.narrative)
    };
    let aggregator = NarrativeAggregator::new(repository, observer);
    let (state, bundle) = aggregator.compare(&a, &b);

    if args.json {
        let response = ComparisonResponse { state, bundle };
        let rendered =
            serde_json::to_string_pretty(&response).map_err(|err| AppError::Io(err.into()))?;
        println!("{rendered}");
    } else if args.share {
        println!("{}", bundle.share_text());
    } else {
        for line in report_lines(&state, &bundle) {
            println!("{line}");
        }
    }

    if args.trace {
        for line in trace_lines(&log) {
            println!("{line}");
        }
    }

    Ok(())
}

fn load_profiles(args: &CompareArgs) -> Result<(PersonProfile, PersonProfile), AppError> {
    if let Some(path) = &args.csv {
        let imported = ProfileImporter::from_path(path)?;
        return Ok((imported.a, imported.b));
    }

    for (flag, name) in [("--a-name", &args.a_name), ("--b-name", &args.b_name)] {
        if name.trim().is_empty() {
            return Err(AppError::Input(format!("{flag} must not be blank")));
        }
    }

    match (&args.a, &args.b) {
        (Some(a), Some(b)) => Ok((
            PersonProfile::new(args.a_name.trim(), a.clone()),
            PersonProfile::new(args.b_name.trim(), b.clone()),
        )),
        _ => Err(AppError::Input(
            "provide --csv or both --a and --b scores".to_string(),
        )),
    }
}

fn report_lines(state: &ComparisonState, bundle: &NarrativeBundle) -> Vec<String> {
    let mut lines = vec![
        format!("Comparison: {} & {}", bundle.a_name(), bundle.b_name()),
        format!(
            "Similarity: {} | Risk: {}",
            bundle.similarity_label().label(),
            bundle.risk_label().label()
        ),
        bundle.headline().to_string(),
        bundle.similarity_complement().to_string(),
        String::new(),
        "Dimensions".to_string(),
    ];

    for comparison in state.dimensions() {
        lines.push(dimension_line(comparison, bundle));
    }

    if state.very_low_confidence() {
        lines.push(format!(
            "Confidence: very low ({} of 4 dimensions scored by both)",
            state.valid_count()
        ));
    } else if state.low_confidence() {
        lines.push(format!(
            "Confidence: low ({} of 4 dimensions scored by both)",
            state.valid_count()
        ));
    }

    for section in bundle.sections() {
        lines.push(String::new());
        lines.push(format!("{} [{}]", section.section.label(), section.template_id));
        lines.push(section.text.clone());
    }

    lines
}

fn dimension_line(comparison: &DimensionComparison, bundle: &NarrativeBundle) -> String {
    let label = comparison.dimension.label();
    let scores = |score: Option<f64>| match score {
        Some(value) => format!("{value:.1}"),
        None => "?".to_string(),
    };
    let (a_score, b_score) = (
        scores(comparison.a_score.value()),
        scores(comparison.b_score.value()),
    );

    if !comparison.valid {
        return format!("- {label}: {a_score} vs {b_score} (not scored by both)");
    }

    let leader = match comparison.direction {
        Direction::AHigher => format!(", {} higher", bundle.a_name()),
        Direction::BHigher => format!(", {} higher", bundle.b_name()),
        Direction::Neither => String::new(),
    };
    format!(
        "- {label}: {a_score} vs {b_score} ({}, gap {:.1}{leader})",
        comparison.relation.label(),
        comparison.delta
    )
}

fn trace_lines(log: &InMemorySelectionLog) -> Vec<String> {
    let mut lines = vec![String::new(), "Template selection".to_string()];
    for event in log.events() {
        lines.push(format!(
            "- {:?} -> {} ({})",
            event.desired.section,
            event.template_id,
            event.tier.label()
        ));
    }

    let defects = log.defects();
    if defects.is_empty() {
        lines.push("Corpus defects: none".to_string());
    } else {
        lines.push("Corpus defects".to_string());
        for defect in defects {
            lines.push(format!("- {defect:?}"));
        }
    }

    lines
}
