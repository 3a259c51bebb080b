use crate::cli::ServeArgs;
use crate::infra::{load_repository, selection_observer, AppState};
use crate::routes::with_comparison_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pairwise::config::AppConfig;
use pairwise::error::AppError;
use pairwise::telemetry;
use pairwise::workflows::comparison::NarrativeAggregator;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = load_repository(&config.narrative)?;
    info!(
        templates = repository.len(),
        custom_corpus = config.narrative.template_corpus.is_some(),
        trace_selection = config.narrative.trace_selection,
        "template corpus loaded"
    );
    let aggregator = Arc::new(NarrativeAggregator::new(
        repository,
        selection_observer(&config.narrative),
    ));

    let app = with_comparison_routes(aggregator)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "comparison narrative service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
