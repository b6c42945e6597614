//! Liveness probe.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

/// Routes mounted at the server root (outside `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health
///
/// Always returns 200; the `database` field reports whether the pool can
/// reach PostgreSQL.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let database = match jobhunter_db::health_check(&state.pool).await {
        Ok(()) => "up",
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            "down"
        }
    };

    Json(serde_json::json!({
        "status": "ok",
        "database": database,
    }))
}
