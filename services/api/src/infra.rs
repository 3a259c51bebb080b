use metrics_exporter_prometheus::PrometheusHandle;
use pairwise::config::NarrativeConfig;
use pairwise::error::AppError;
use pairwise::workflows::comparison::{
    CorpusDefect, DimensionKey, NoopObserver, Score, ScoreMap, SelectionEvent, SelectionObserver,
    TemplateRepository, TracingObserver,
};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps selection decisions in memory so the CLI can print a trace.
#[derive(Default, Clone)]
pub(crate) struct InMemorySelectionLog {
    events: Arc<Mutex<Vec<SelectionEvent>>>,
    defects: Arc<Mutex<Vec<CorpusDefect>>>,
}

impl SelectionObserver for InMemorySelectionLog {
    fn on_selection(&self, event: &SelectionEvent) {
        let mut guard = self.events.lock().expect("selection mutex poisoned");
        guard.push(event.clone());
    }

    fn on_defect(&self, defect: &CorpusDefect) {
        warn!(?defect, "template corpus defect");
        let mut guard = self.defects.lock().expect("defect mutex poisoned");
        guard.push(defect.clone());
    }
}

impl InMemorySelectionLog {
    pub(crate) fn events(&self) -> Vec<SelectionEvent> {
        self.events.lock().expect("selection mutex poisoned").clone()
    }

    pub(crate) fn defects(&self) -> Vec<CorpusDefect> {
        self.defects.lock().expect("defect mutex poisoned").clone()
    }
}

/// The configured JSON corpus, or the built-in one.
pub(crate) fn load_repository(config: &NarrativeConfig) -> Result<Arc<TemplateRepository>, AppError> {
    match &config.template_corpus {
        Some(path) => {
            let repository = TemplateRepository::from_path(path)?;
            for issue in repository.audit() {
                warn!(?issue, corpus = %path.display(), "template corpus issue");
            }
            Ok(Arc::new(repository))
        }
        None => Ok(TemplateRepository::standard()),
    }
}

pub(crate) fn selection_observer(config: &NarrativeConfig) -> Arc<dyn SelectionObserver> {
    if config.trace_selection {
        Arc::new(TracingObserver)
    } else {
        Arc::new(NoopObserver)
    }
}

/// Parses `engagement=1.2,expression=3,reassurance=,repair=2.5`.
///
/// Empty values and `?` mark a dimension as unanswered; dimensions left out
/// entirely are unanswered too.
pub(crate) fn parse_scores(raw: &str) -> Result<ScoreMap, String> {
    let mut scores = ScoreMap::new();

    for pair in raw.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected dimension=score, got '{pair}'"))?;
        let dimension = DimensionKey::parse(name)
            .ok_or_else(|| format!("unknown dimension '{}'", name.trim()))?;

        let value = value.trim();
        let score = if value.is_empty() || value == "?" {
            Score::Unknown
        } else {
            let parsed = value
                .parse::<f64>()
                .map_err(|err| format!("failed to parse '{value}' as a score ({err})"))?;
            Score::from_raw(parsed)
        };

        if scores.insert(dimension, score).is_some() {
            return Err(format!("{} given more than once", dimension.as_str()));
        }
    }

    Ok(scores)
}
