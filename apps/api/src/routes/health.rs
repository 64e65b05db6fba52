use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness banner kept for clients that ping the root path.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "status": "SUBCONIC API running" }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "subconic"
    }))
}
