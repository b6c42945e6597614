//! Resume entity models.

use jobhunter_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A resume joined with its candidate, job, and owning company.
///
/// This is the working set of a status transition: everything the
/// authorization check and the fan-out payload need in one query.
#[derive(Debug, Clone, FromRow)]
pub struct ResumeDetail {
    pub id: DbId,
    pub email: String,
    pub status: String,
    pub interview_at: Option<Timestamp>,
    pub interview_location: Option<String>,
    pub interview_note: Option<String>,
    pub reject_reason: Option<String>,
    pub user_id: DbId,
    pub candidate_name: String,
    pub job_id: DbId,
    pub job_name: String,
    pub company_id: DbId,
    pub company_name: String,
}

/// Audit metadata returned after a status update.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUpdateMeta {
    pub updated_at: Option<Timestamp>,
    pub updated_by: Option<String>,
}
