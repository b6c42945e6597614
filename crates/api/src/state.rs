use std::sync::Arc;

use crate::config::ServerConfig;
use crate::resumes::ResumeStateMachine;
use crate::ws::LiveHub;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: jobhunter_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Per-user registry of open live push channels.
    pub live_hub: Arc<LiveHub>,
    /// Resume status transitions and their fan-out.
    pub state_machine: Arc<ResumeStateMachine>,
}
