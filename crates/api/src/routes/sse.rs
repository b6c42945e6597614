//! Route definitions for the live subscription endpoint.
//!
//! The mount point keeps the `/resume-sse` path the frontend already
//! targets; transport is a WebSocket carrying the same named events.

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Routes mounted at `/resume-sse`.
///
/// ```text
/// GET /subscribe -> WebSocket upgrade
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/subscribe", get(ws::subscribe_handler))
}
