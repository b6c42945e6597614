//! Notification entity models.

use jobhunter_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notifications` table.
///
/// Immutable once created except for `is_read`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    /// Plain-text body; one line per detail.
    pub content: String,
    /// Localized status label the change was recorded under.
    pub category: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}
