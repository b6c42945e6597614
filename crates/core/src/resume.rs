//! Resume review domain: the four review states, their localized labels,
//! the destination-state field policy, and the rendering helpers shared by
//! the notification fan-out channels.
//!
//! Everything here is pure so the state machine and the fan-out can be
//! exercised without a database.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// ResumeStatus
// ---------------------------------------------------------------------------

/// Review status of a resume.
///
/// Any status may move to any other status; the platform deliberately
/// allows corrective transitions such as un-rejecting a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResumeStatus {
    Pending,
    Reviewing,
    Approved,
    Rejected,
}

impl ResumeStatus {
    /// Database / wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ResumeStatus::Pending => "PENDING",
            ResumeStatus::Reviewing => "REVIEWING",
            ResumeStatus::Approved => "APPROVED",
            ResumeStatus::Rejected => "REJECTED",
        }
    }

    /// Parse the database / wire representation.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "PENDING" => Ok(ResumeStatus::Pending),
            "REVIEWING" => Ok(ResumeStatus::Reviewing),
            "APPROVED" => Ok(ResumeStatus::Approved),
            "REJECTED" => Ok(ResumeStatus::Rejected),
            other => Err(CoreError::Validation(format!(
                "Unknown resume status '{other}'. Must be one of: PENDING, REVIEWING, APPROVED, REJECTED"
            ))),
        }
    }

    /// Candidate-facing Vietnamese label. "CHỜ DUYỆT" is also the fallback
    /// for anything that is not a terminal decision or under review.
    pub fn label_vi(self) -> &'static str {
        match self {
            ResumeStatus::Approved => "ĐÃ PHÊ DUYỆT",
            ResumeStatus::Rejected => "BỊ TỪ CHỐI",
            ResumeStatus::Reviewing => "ĐANG XEM XÉT",
            ResumeStatus::Pending => "CHỜ DUYỆT",
        }
    }
}

// ---------------------------------------------------------------------------
// Field policy
// ---------------------------------------------------------------------------

/// Raw optional fields as submitted with a status update request.
#[derive(Debug, Clone, Default)]
pub struct StatusFieldInput {
    /// Interview time as an RFC 3339 string.
    pub interview_at: Option<String>,
    pub interview_location: Option<String>,
    pub interview_note: Option<String>,
    pub reject_reason: Option<String>,
}

/// The resolved optional columns for a destination status.
///
/// Invariant: the interview group and `reject_reason` are never both
/// populated; both are empty for PENDING/REVIEWING.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusFields {
    pub interview_at: Option<Timestamp>,
    pub interview_location: Option<String>,
    pub interview_note: Option<String>,
    pub reject_reason: Option<String>,
}

/// Resolve the optional columns for a transition to `status`.
///
/// APPROVED keeps the interview fields and clears the reject reason;
/// REJECTED keeps the reason and clears the interview fields; PENDING and
/// REVIEWING clear everything. An unparseable or blank `interview_at` is
/// left unset rather than failing the transition.
pub fn resolve_status_fields(status: ResumeStatus, input: &StatusFieldInput) -> StatusFields {
    match status {
        ResumeStatus::Approved => StatusFields {
            interview_at: input.interview_at.as_deref().and_then(parse_interview_at),
            interview_location: non_blank(&input.interview_location),
            interview_note: non_blank(&input.interview_note),
            reject_reason: None,
        },
        ResumeStatus::Rejected => StatusFields {
            reject_reason: non_blank(&input.reject_reason),
            ..StatusFields::default()
        },
        ResumeStatus::Pending | ResumeStatus::Reviewing => StatusFields::default(),
    }
}

fn parse_interview_at(raw: &str) -> Option<Timestamp> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Vietnam offset (UTC+7, no DST).
const VN_OFFSET_SECS: i32 = 7 * 3600;

/// Format a timestamp for candidate-facing text, in Vietnam local time.
pub fn format_vn(ts: Timestamp) -> String {
    let offset = FixedOffset::east_opt(VN_OFFSET_SECS).expect("static offset is in range");
    ts.with_timezone(&offset).format("%d/%m/%Y %H:%M").to_string()
}

/// Title used for every status-change notification record.
pub const NOTIFICATION_TITLE: &str = "Trạng thái hồ sơ";

/// Plain-text body of the durable notification record.
///
/// One line each for position, company, and status, plus the conditional
/// interview or rejection lines for terminal decisions.
pub fn notification_content(
    job: &str,
    company: &str,
    status: ResumeStatus,
    fields: &StatusFields,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("Vị trí: {job}\n"));
    out.push_str(&format!("Công ty: {company}\n"));
    out.push_str(&format!("Trạng thái: {}\n", status.label_vi()));

    match status {
        ResumeStatus::Approved => {
            if let Some(at) = fields.interview_at {
                out.push_str(&format!("Thời gian phỏng vấn: {}\n", format_vn(at)));
            }
            if let Some(location) = &fields.interview_location {
                out.push_str(&format!("Địa điểm/Link: {location}\n"));
            }
            if let Some(note) = &fields.interview_note {
                out.push_str(&format!("Ghi chú: {note}\n"));
            }
        }
        ResumeStatus::Rejected => {
            if let Some(reason) = &fields.reject_reason {
                out.push_str(&format!("Lý do: {reason}\n"));
            }
        }
        ResumeStatus::Pending | ResumeStatus::Reviewing => {}
    }

    out
}

// ---------------------------------------------------------------------------
// StatusChange payload
// ---------------------------------------------------------------------------

/// Channel-neutral payload describing one status change.
///
/// Serialized as the `resumeStatus` live event data; also feeds the email
/// model. Optional fields are omitted from JSON when empty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub resume_id: DbId,
    pub status: ResumeStatus,
    pub status_text: &'static str,
    pub job: String,
    pub company: String,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
}

impl StatusChange {
    /// Assemble the payload from the freshly persisted field bundle.
    pub fn new(
        resume_id: DbId,
        status: ResumeStatus,
        job: String,
        company: String,
        fields: &StatusFields,
        created_at: Timestamp,
    ) -> Self {
        Self {
            resume_id,
            status,
            status_text: status.label_vi(),
            job,
            company,
            created_at,
            interview_at: fields.interview_at,
            interview_location: fields.interview_location.clone(),
            interview_note: fields.interview_note.clone(),
            reject_reason: fields.reject_reason.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Email
// ---------------------------------------------------------------------------

/// Candidate-facing subject line; `None` for statuses that send no email.
pub fn email_subject(status: ResumeStatus, job: &str) -> Option<String> {
    match status {
        ResumeStatus::Approved => Some(format!("[JobHunter] Chấp nhận hồ sơ - {job}")),
        ResumeStatus::Rejected => Some(format!("[JobHunter] Kết quả hồ sơ - {job}")),
        ResumeStatus::Pending | ResumeStatus::Reviewing => None,
    }
}

/// Model map consumed by the `resume-status` email template.
pub fn email_model(candidate_name: &str, change: &StatusChange) -> serde_json::Value {
    serde_json::json!({
        "name": candidate_name,
        "status": change.status.as_str(),
        "jobName": change.job,
        "companyName": change.company,
        "interviewAt": change.interview_at.map(format_vn),
        "interviewLocation": change.interview_location,
        "interviewNote": change.interview_note,
        "rejectReason": change.reject_reason,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
