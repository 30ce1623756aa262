use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ParsedResume;
use crate::session::extract::Visitor;
use crate::session::Session;
use crate::state::AppState;

/// GET /api/session
pub async fn handle_get_session(visitor: Visitor) -> Json<Session> {
    Json(visitor.session)
}

/// PUT /api/session/resume
pub async fn handle_put_resume(
    State(state): State<AppState>,
    visitor: Visitor,
    Json(resume): Json<ParsedResume>,
) -> Result<Json<Session>, AppError> {
    let session = state
        .sessions
        .update(&visitor.id.0, |session| {
            session.resume_data = Some(resume);
            session.clone()
        })
        .await;
    info!("Replaced resume data for session");
    Ok(Json(session))
}
