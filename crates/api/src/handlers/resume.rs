//! Handlers for the `/resumes` resource.

use axum::extract::State;
use axum::Json;
use jobhunter_db::models::resume::ResumeUpdateMeta;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::resumes::UpdateResumeStatus;
use crate::state::AppState;

/// PUT /api/v1/resumes/status
///
/// Move a resume to a new review status. Destination-dependent fields are
/// resolved server-side; the response carries the audit metadata of the
/// persisted update. A successful status change returns 200 even when the
/// downstream notification channels fail.
pub async fn update_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateResumeStatus>,
) -> AppResult<Json<DataResponse<ResumeUpdateMeta>>> {
    let meta = state.state_machine.transition(&auth, &input).await?;
    Ok(Json(DataResponse { data: meta }))
}
