use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{info, warn};

use crate::backend_client::BackendError;
use crate::errors::AppError;
use crate::pages::{layout, Notice};
use crate::session::extract::SignedIn;
use crate::session::Session;
use crate::state::AppState;
use crate::upload::{validate, Candidate, IntakeError, ACCEPTED_TYPES};

fn upload_page(session: &Session, notice: Option<&Notice>) -> Html<String> {
    let resume_link = if session.resume().is_some() {
        r#"<p class="muted">A resume is already loaded. <a href="/templates">Continue with it</a> or upload a new one.</p>"#
    } else {
        ""
    };
    let body = format!(
        r#"<h1>Upload your resume</h1><p class="muted">PDF or DOCX. We will extract your details and turn them into a portfolio.</p>{resume_link}<form class="card" method="post" action="/upload" enctype="multipart/form-data"><label for="file">Resume file</label><input id="file" type="file" name="file" accept=".pdf,.docx,{accept}"><p><button class="button button-primary" type="submit">Upload and continue</button></p></form>"#,
        accept = ACCEPTED_TYPES.join(","),
    );
    layout("Upload", true, notice, &body)
}

/// GET /upload
pub async fn handle_upload_page(user: SignedIn) -> Html<String> {
    upload_page(&user.session, None)
}

/// POST /upload
pub async fn handle_upload(
    State(state): State<AppState>,
    user: SignedIn,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let limit = state.config.max_upload_bytes;
    let file = match read_candidate(multipart, limit)
        .await
        .and_then(|candidate| validate(candidate, limit))
    {
        Ok(file) => file,
        Err(e) => {
            info!("Upload rejected: {e}");
            return Ok(upload_page(&user.session, Some(&Notice::error(e.to_string()))).into_response());
        }
    };

    info!("Sending {} ({} bytes) for parsing", file.file_name, file.bytes.len());
    match state.backend.upload_resume(&user.token, file).await {
        Ok(resume) => {
            state
                .sessions
                .update(&user.id.0, |session| {
                    session.resume_data = Some(resume);
                    session.forget_saved();
                })
                .await;
            Ok(Redirect::to("/templates").into_response())
        }
        Err(BackendError::Unauthorized) => Err(AppError::Unauthorized),
        Err(e) => {
            warn!("Resume parsing failed: {e}");
            Ok(upload_page(&user.session, Some(&Notice::error(e.to_string()))).into_response())
        }
    }
}

/// Pulls the `file` field out of the form, if there is one.
async fn read_candidate(mut multipart: Multipart, limit: usize) -> Result<Option<Candidate>, IntakeError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(e) => return Err(intake_error(e, limit)),
        };
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| intake_error(e, limit))?;
        return Ok(Some(Candidate {
            file_name,
            content_type,
            bytes,
        }));
    }
}

fn intake_error(e: MultipartError, limit: usize) -> IntakeError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        IntakeError::TooLarge { limit }
    } else {
        warn!("Unreadable upload form: {}", e.body_text());
        IntakeError::Missing
    }
}
