use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::PersonProfile;
use super::narrative::{NarrativeAggregator, NarrativeBundle};
use super::state::ComparisonState;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComparisonRequest {
    pub a: PersonProfile,
    pub b: PersonProfile,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResponse {
    pub state: ComparisonState,
    pub bundle: NarrativeBundle,
}

/// Router builder exposing the narrative endpoint.
pub fn comparison_router(aggregator: Arc<NarrativeAggregator>) -> Router {
    Router::new()
        .route("/api/v1/comparisons/narrative", post(narrative_handler))
        .with_state(aggregator)
}

pub(crate) async fn narrative_handler(
    State(aggregator): State<Arc<NarrativeAggregator>>,
    axum::Json(request): axum::Json<ComparisonRequest>,
) -> Response {
    if let Some(field) = blank_name(&request) {
        let payload = json!({
            "error": format!("{field} must not be blank"),
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    let (state, bundle) = aggregator.compare(&request.a, &request.b);
    (StatusCode::OK, axum::Json(ComparisonResponse { state, bundle })).into_response()
}

fn blank_name(request: &ComparisonRequest) -> Option<&'static str> {
    if request.a.name.trim().is_empty() {
        Some("a.name")
    } else if request.b.name.trim().is_empty() {
        Some("b.name")
    } else {
        None
    }
}
