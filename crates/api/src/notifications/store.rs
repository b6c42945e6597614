//! Durable notification store seam.

use async_trait::async_trait;
use jobhunter_core::types::DbId;
use jobhunter_db::repositories::NotificationRepo;
use jobhunter_db::DbPool;

/// Append-only store for notification records.
///
/// The fan-out only ever creates; listing and read-state changes go
/// through the notification handlers directly.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Persist one notification, returning its id.
    async fn create(
        &self,
        user_id: DbId,
        title: &str,
        content: &str,
        category: &str,
    ) -> Result<DbId, Box<dyn std::error::Error + Send + Sync>>;
}

/// PostgreSQL-backed store.
pub struct PgNotificationStore {
    pool: DbPool,
}

impl PgNotificationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationStore for PgNotificationStore {
    async fn create(
        &self,
        user_id: DbId,
        title: &str,
        content: &str,
        category: &str,
    ) -> Result<DbId, Box<dyn std::error::Error + Send + Sync>> {
        let id = NotificationRepo::create(&self.pool, user_id, title, content, category).await?;
        Ok(id)
    }
}
