use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resumescan-api"
    }))
}

/// GET /api/v1/cache/health
/// Round-trips a probe key through Redis. Reports "disabled" when no cache is configured.
pub async fn cache_health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let Some(cache) = &state.cache else {
        return Ok(Json(json!({ "status": "disabled" })));
    };

    let status = if cache.probe().await? { "ok" } else { "degraded" };
    Ok(Json(json!({ "status": status })))
}
