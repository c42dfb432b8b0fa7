//! Liveness endpoint.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Liveness report for the social backend.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Fixed `"ok"` whenever the server can answer at all.
    pub status: String,
    /// Name of the serving binary.
    pub service: String,
    /// Version of the running build.
    pub version: String,
}

/// GET /health
///
/// Touches neither the database nor the upstream platform; the probe
/// answers as long as the HTTP layer is alive.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Returns the liveness router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
