//! Status transitions for resume records.
//!
//! [`ResumeStateMachine::transition`] is the only mutation path for a
//! resume's review status and its destination-dependent fields. Any status
//! may move to any other status; a same-status update persists field edits
//! but fans out nothing.

use serde::Deserialize;

use jobhunter_core::error::CoreError;
use jobhunter_core::resume::{self, ResumeStatus, StatusFieldInput};
use jobhunter_core::roles::ROLE_HR;
use jobhunter_core::types::DbId;
use jobhunter_db::models::resume::{ResumeDetail, ResumeUpdateMeta};
use jobhunter_db::repositories::ResumeRepo;
use jobhunter_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::notifications::NotificationFanout;

/// Request body for `PUT /resumes/status`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResumeStatus {
    pub id: DbId,
    /// Target status name, e.g. `"APPROVED"`.
    pub status: String,
    /// Interview time as an RFC 3339 string; an unparseable value is
    /// tolerated and simply left unset.
    pub interview_at: Option<String>,
    pub interview_location: Option<String>,
    pub interview_note: Option<String>,
    pub reject_reason: Option<String>,
}

/// Validates and applies status transitions, then triggers the fan-out.
pub struct ResumeStateMachine {
    pool: DbPool,
    fanout: NotificationFanout,
}

impl ResumeStateMachine {
    pub fn new(pool: DbPool, fanout: NotificationFanout) -> Self {
        Self { pool, fanout }
    }

    /// Apply a status transition on behalf of `actor`.
    ///
    /// Field edits always persist, even when the status value does not
    /// change; the fan-out fires only on a real change, and its failures
    /// never surface here. Only a missing record, a failed authorization,
    /// an unknown target status, or the status write itself can fail the
    /// call.
    pub async fn transition(
        &self,
        actor: &AuthUser,
        req: &UpdateResumeStatus,
    ) -> AppResult<ResumeUpdateMeta> {
        let new_status = ResumeStatus::parse(&req.status).map_err(AppError::Core)?;

        let detail = ResumeRepo::find_detail(&self.pool, req.id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Resume",
                id: req.id,
            }))?;

        authorize(actor, &detail)?;

        let old_status = ResumeStatus::parse(&detail.status).map_err(|_| {
            AppError::InternalError(format!(
                "Resume {} has invalid stored status '{}'",
                detail.id, detail.status
            ))
        })?;

        let input = StatusFieldInput {
            interview_at: req.interview_at.clone(),
            interview_location: req.interview_location.clone(),
            interview_note: req.interview_note.clone(),
            reject_reason: req.reject_reason.clone(),
        };
        let fields = resume::resolve_status_fields(new_status, &input);

        let meta = ResumeRepo::update_status(
            &self.pool,
            detail.id,
            new_status.as_str(),
            &fields,
            &actor.email,
        )
        .await?;

        if old_status != new_status {
            tracing::info!(
                resume_id = detail.id,
                from = old_status.as_str(),
                to = new_status.as_str(),
                "Resume status changed"
            );
            self.fanout.dispatch(&detail, &fields, new_status).await;
        }

        Ok(meta)
    }
}

/// A restricted actor may only touch resumes of their own company.
fn authorize(actor: &AuthUser, detail: &ResumeDetail) -> AppResult<()> {
    if actor.role == ROLE_HR && actor.company_id != Some(detail.company_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not allowed to update resumes of another company".into(),
        )));
    }
    Ok(())
}
