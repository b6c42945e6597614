//! Repository for the `resumes` table.

use jobhunter_core::resume::StatusFields;
use jobhunter_core::types::DbId;
use sqlx::PgPool;

use crate::models::resume::{ResumeDetail, ResumeUpdateMeta};

/// Column list for joined resume queries.
const DETAIL_COLUMNS: &str = "r.id, r.email, r.status, r.interview_at, r.interview_location, \
     r.interview_note, r.reject_reason, r.user_id, u.name AS candidate_name, \
     r.job_id, j.name AS job_name, c.id AS company_id, c.name AS company_name";

/// Queries for resume records and their status transitions.
pub struct ResumeRepo;

impl ResumeRepo {
    /// Fetch a resume joined with its candidate, job, and owning company.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<ResumeDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM resumes r \
             JOIN users u ON u.id = r.user_id \
             JOIN jobs j ON j.id = r.job_id \
             JOIN companies c ON c.id = j.company_id \
             WHERE r.id = $1"
        );
        sqlx::query_as::<_, ResumeDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Persist a status transition: the new status, the resolved optional
    /// columns, and the audit trail. All four optional columns are written
    /// unconditionally so stale values from a previous decision never
    /// survive.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
        fields: &StatusFields,
        updated_by: &str,
    ) -> Result<ResumeUpdateMeta, sqlx::Error> {
        sqlx::query_as::<_, ResumeUpdateMeta>(
            "UPDATE resumes \
             SET status = $2, interview_at = $3, interview_location = $4, \
                 interview_note = $5, reject_reason = $6, \
                 updated_at = NOW(), updated_by = $7 \
             WHERE id = $1 \
             RETURNING updated_at, updated_by",
        )
        .bind(id)
        .bind(status)
        .bind(fields.interview_at)
        .bind(&fields.interview_location)
        .bind(&fields.interview_note)
        .bind(&fields.reject_reason)
        .bind(updated_by)
        .fetch_one(pool)
        .await
    }
}
