use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use checkmate::results::{ResultPresenter, ResultView, TracingNotifier};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct ViewRequest {
    /// Result page input as handed over by the analysis step; `null` or a
    /// malformed value renders the no-data page.
    #[serde(default)]
    pub(crate) input: Option<serde_json::Value>,
    /// Index of the requirement whose detail panel should be open.
    #[serde(default)]
    pub(crate) select: Option<usize>,
}

pub(crate) fn result_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/results/view", post(result_view_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn result_view_endpoint(Json(payload): Json<ViewRequest>) -> Json<ResultView> {
    let ViewRequest { input, select } = payload;

    let mut presenter = ResultPresenter::from_value(input, Arc::new(TracingNotifier));
    if let Some(index) = select {
        if !presenter.activate(index) {
            debug!(index, "requested selection is out of range");
        }
    }

    Json(presenter.view())
}
