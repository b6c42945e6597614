pub mod health;
pub mod notification;
pub mod resume;
pub mod sse;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /resumes/status               PUT     transition a resume
///
/// /resume-sse/subscribe         GET     live status events (WebSocket)
///
/// /notifications                GET     list, DELETE all
/// /notifications/unread-count   GET     unread counter
/// /notifications/read-all       POST    mark everything read
/// /notifications/{id}/read      POST    mark one read
/// /notifications/{id}           DELETE  delete one
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/resumes", resume::router())
        .nest("/resume-sse", sse::router())
        .nest("/notifications", notification::router())
}
