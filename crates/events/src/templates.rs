//! Candidate-facing email templates.
//!
//! Templates are selected by name and rendered from a JSON model, keeping
//! the call sites decoupled from the markup.

/// Template for the resume decision email.
pub const TEMPLATE_RESUME_STATUS: &str = "resume-status";

/// Rendering failure.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Unknown email template: {0}")]
    UnknownTemplate(String),
}

/// Render the named template with the given model.
pub fn render(name: &str, model: &serde_json::Value) -> Result<String, RenderError> {
    match name {
        TEMPLATE_RESUME_STATUS => Ok(resume_status(model)),
        other => Err(RenderError::UnknownTemplate(other.to_string())),
    }
}

/// Non-blank string value from the model, by key.
fn text(model: &serde_json::Value, key: &str) -> Option<String> {
    model
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// HTML body for the resume decision email.
///
/// Expects the model keys `name`, `status`, `jobName`, `companyName` and,
/// depending on the decision, `interviewAt`/`interviewLocation`/
/// `interviewNote` or `rejectReason`. Missing keys simply omit their row.
fn resume_status(model: &serde_json::Value) -> String {
    let name = text(model, "name").unwrap_or_else(|| "bạn".to_string());
    let job = text(model, "jobName").unwrap_or_default();
    let company = text(model, "companyName").unwrap_or_default();
    let approved = text(model, "status").as_deref() == Some("APPROVED");

    let mut body = String::new();
    body.push_str("<html><body>");
    body.push_str(&format!("<p>Xin chào <b>{name}</b>,</p>"));
    body.push_str(&format!(
        "<p>Vị trí: <b>{job}</b><br/>Công ty: <b>{company}</b></p>"
    ));

    if approved {
        body.push_str("<p>Chúc mừng! Hồ sơ của bạn đã được <b>phê duyệt</b>.</p>");
        let mut rows = String::new();
        if let Some(at) = text(model, "interviewAt") {
            rows.push_str(&format!("<li>Thời gian phỏng vấn: {at}</li>"));
        }
        if let Some(location) = text(model, "interviewLocation") {
            rows.push_str(&format!("<li>Địa điểm/Link: {location}</li>"));
        }
        if let Some(note) = text(model, "interviewNote") {
            rows.push_str(&format!("<li>Ghi chú: {note}</li>"));
        }
        if !rows.is_empty() {
            body.push_str(&format!("<ul>{rows}</ul>"));
        }
    } else {
        body.push_str("<p>Rất tiếc, hồ sơ của bạn <b>chưa phù hợp</b> với vị trí này.</p>");
        if let Some(reason) = text(model, "rejectReason") {
            body.push_str(&format!("<p>Lý do: {reason}</p>"));
        }
    }

    body.push_str("<p>Trân trọng,<br/>JobHunter</p>");
    body.push_str("</body></html>");
    body
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approved_template_lists_interview_rows() {
        let model = serde_json::json!({
            "name": "Nguyễn Văn A",
            "status": "APPROVED",
            "jobName": "Backend Engineer",
            "companyName": "FPT Software",
            "interviewAt": "01/05/2025 17:00",
            "interviewLocation": "Room 1",
        });
        let html = render(TEMPLATE_RESUME_STATUS, &model).unwrap();

        assert!(html.contains("Nguyễn Văn A"));
        assert!(html.contains("phê duyệt"));
        assert!(html.contains("Thời gian phỏng vấn: 01/05/2025 17:00"));
        assert!(html.contains("Địa điểm/Link: Room 1"));
        assert!(!html.contains("Ghi chú"));
        assert!(!html.contains("Lý do"));
    }

    #[test]
    fn rejected_template_shows_reason() {
        let model = serde_json::json!({
            "name": "Nguyễn Văn A",
            "status": "REJECTED",
            "jobName": "Tester",
            "companyName": "VNG",
            "rejectReason": "Thiếu kinh nghiệm",
        });
        let html = render(TEMPLATE_RESUME_STATUS, &model).unwrap();

        assert!(html.contains("chưa phù hợp"));
        assert!(html.contains("Lý do: Thiếu kinh nghiệm"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn null_fields_omit_their_rows() {
        let model = serde_json::json!({
            "name": "A",
            "status": "APPROVED",
            "jobName": "Tester",
            "companyName": "VNG",
            "interviewAt": null,
            "interviewLocation": null,
            "interviewNote": null,
        });
        let html = render(TEMPLATE_RESUME_STATUS, &model).unwrap();
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let err = render("weekly-digest", &serde_json::json!({})).unwrap_err();
        assert!(err.to_string().contains("weekly-digest"));
    }
}
