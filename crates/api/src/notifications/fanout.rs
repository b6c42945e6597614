//! Three-channel fan-out for resume status changes.
//!
//! Each channel has its own failure domain: the durable record, the live
//! push, and the candidate email are attempted independently, and no
//! failure reaches the transition caller. There is no cross-channel
//! ordering or atomicity; the status write has already committed by the
//! time `dispatch` runs, and a missed channel stays missed (no retries).

use std::sync::Arc;

use jobhunter_core::resume::{self, ResumeStatus, StatusChange, StatusFields};
use jobhunter_db::models::resume::ResumeDetail;
use jobhunter_events::templates::TEMPLATE_RESUME_STATUS;
use jobhunter_events::Mailer;

use crate::notifications::store::NotificationStore;
use crate::ws::{LiveEvent, LiveHub};

/// Delivers one status change to the three notification channels.
pub struct NotificationFanout {
    store: Arc<dyn NotificationStore>,
    hub: Arc<LiveHub>,
    mailer: Mailer,
}

impl NotificationFanout {
    pub fn new(store: Arc<dyn NotificationStore>, hub: Arc<LiveHub>, mailer: Mailer) -> Self {
        Self { store, hub, mailer }
    }

    /// Fan one status change out to all channels.
    ///
    /// Called only when the status actually changed; `fields` is the
    /// freshly persisted optional-column bundle.
    pub async fn dispatch(&self, detail: &ResumeDetail, fields: &StatusFields, status: ResumeStatus) {
        let change = StatusChange::new(
            detail.id,
            status,
            detail.job_name.clone(),
            detail.company_name.clone(),
            fields,
            chrono::Utc::now(),
        );

        // 1) Durable notification record.
        let content =
            resume::notification_content(&detail.job_name, &detail.company_name, status, fields);
        if let Err(e) = self
            .store
            .create(
                detail.user_id,
                resume::NOTIFICATION_TITLE,
                &content,
                status.label_vi(),
            )
            .await
        {
            tracing::warn!(error = %e, resume_id = detail.id, "Failed to persist status notification");
        }

        // 2) Best-effort live push.
        match serde_json::to_value(&change) {
            Ok(payload) => {
                let delivered = self
                    .hub
                    .send_to_user(detail.user_id, LiveEvent::resume_status(payload).to_message())
                    .await;
                tracing::debug!(resume_id = detail.id, delivered, "Pushed status event");
            }
            Err(e) => {
                tracing::warn!(error = %e, resume_id = detail.id, "Failed to encode status event");
            }
        }

        // 3) Candidate email, only for terminal decisions.
        if let Some(subject) = resume::email_subject(status, &detail.job_name) {
            let model = resume::email_model(&detail.candidate_name, &change);
            self.mailer
                .send_templated(detail.email.clone(), subject, TEMPLATE_RESUME_STATUS, model);
        }
    }
}
