//! Route definitions for the `/resumes` resource.

use axum::routing::put;
use axum::Router;

use crate::handlers::resume;
use crate::state::AppState;

/// Routes mounted at `/resumes`.
///
/// ```text
/// PUT /status -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/status", put(resume::update_status))
}
