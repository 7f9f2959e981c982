use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::app_state::AppState;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    /// False when no model credential is configured; the page still serves
    /// but every analysis reports an authentication error.
    pub llm_configured: bool,
}

#[derive(OpenApi)]
#[openapi(paths(get_live, get_ready))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness check",
    responses((status = 200, body = String))
)]
pub async fn get_live() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    responses((status = 200, body = ReadinessResponse))
)]
pub async fn get_ready(State(state): State<AppState>) -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        status: "ok".to_string(),
        llm_configured: state.service.llm_configured(),
    })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health/live", root_path), get(get_live))
        .route(&format!("{}/health/ready", root_path), get(get_ready))
}
