use axum::{
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::backend_client::{save_portfolio, BackendError};
use crate::errors::AppError;
use crate::pages::{layout, post_button, Notice};
use crate::preview::{payload, DEFAULT_NAME, SAVED};
use crate::render::export::{file_name, render_standalone};
use crate::render::html::escape;
use crate::render::{render_portfolio, RenderInput, Tab, TemplateId};
use crate::session::extract::SignedIn;
use crate::session::Session;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    pub tab: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub name: String,
}

fn preview_page(session: &Session, template: TemplateId, tab: Tab, notice: Option<&Notice>) -> Html<String> {
    let input = RenderInput::new(
        session.resume(),
        &session.selected_color,
        session.selected_mode.background_hex(),
    )
    .with_tab_base("/preview");
    let input = match &session.custom_sections {
        Some(sections) => input.with_sections(sections),
        None => input,
    };
    let portfolio = render_portfolio(template, &input, tab);

    let editing = match &session.current_portfolio_id {
        Some(_) => r#"<span class="muted">Editing a saved portfolio</span>"#,
        None => "",
    };
    let body = format!(
        r#"<div class="card" style="display:flex;flex-wrap:wrap;gap:12px;align-items:center;margin-bottom:20px;"><strong>{template_name}</strong>{editing}<a class="button" href="/templates">Change template</a><a class="button" href="/customize">Customize</a><form class="inline" method="post" action="/preview/save"><input type="text" name="name" value="{default_name}" aria-label="Portfolio name" style="width:200px;"> <button class="button button-primary" type="submit">Save</button></form><a class="button" href="/preview/download">Download HTML</a>{start_over}</div><div style="background:{bg};border-radius:12px;overflow:hidden;">{portfolio}</div>"#,
        template_name = escape(template.display_name()),
        default_name = escape(session.portfolio_name.as_deref().unwrap_or(DEFAULT_NAME)),
        start_over = post_button("/preview/start-over", "Start over", "button-danger"),
        bg = session.selected_mode.background_hex(),
    );
    layout("Preview", true, notice, &body)
}

/// GET /preview
pub async fn handle_preview(user: SignedIn, Query(query): Query<PreviewQuery>) -> Response {
    let Some(template) = user.session.selected_template else {
        return Redirect::to("/templates").into_response();
    };
    let tab = Tab::from_query(query.tab.as_deref());
    preview_page(&user.session, template, tab, None).into_response()
}

/// POST /preview/save
pub async fn handle_save(
    State(state): State<AppState>,
    user: SignedIn,
    Form(form): Form<SaveForm>,
) -> Result<Response, AppError> {
    let Some(template) = user.session.selected_template else {
        return Ok(Redirect::to("/templates").into_response());
    };
    let body = payload(&user.session, template, &form.name);
    let saved = save_portfolio(
        state.backend.as_ref(),
        &user.token,
        user.session.current_portfolio_id.as_deref(),
        &body,
    )
    .await;

    match saved {
        Ok(portfolio) => {
            info!("Saved portfolio {} ({})", portfolio.id, portfolio.name);
            let session = state
                .sessions
                .update(&user.id.0, |session| {
                    session.current_portfolio_id = Some(portfolio.id.clone());
                    session.portfolio_name = Some(portfolio.name.clone());
                    session.clone()
                })
                .await;
            Ok(preview_page(&session, template, Tab::Overview, Some(&Notice::success(SAVED))).into_response())
        }
        Err(BackendError::Unauthorized) => Err(AppError::Unauthorized),
        Err(e) => {
            warn!("Saving portfolio failed: {e}");
            let notice = Notice::error(format!("Could not save the portfolio: {e}"));
            Ok(preview_page(&user.session, template, Tab::Overview, Some(&notice)).into_response())
        }
    }
}

/// GET /preview/download
pub async fn handle_download(user: SignedIn) -> Response {
    let Some(resume) = user.session.resume() else {
        warn!("Download requested without resume data");
        let notice = Notice::error("There is no resume data to download yet.");
        return match user.session.selected_template {
            Some(template) => preview_page(&user.session, template, Tab::Overview, Some(&notice)).into_response(),
            None => Redirect::to("/upload").into_response(),
        };
    };
    let document = render_standalone(resume, &user.session.selected_color, user.session.selected_mode);
    let disposition = format!("attachment; filename=\"{}\"", file_name(resume));
    info!("Exported {} bytes as {}", document.len(), file_name(resume));
    (
        [
            (CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        document,
    )
        .into_response()
}

/// POST /preview/start-over
pub async fn handle_start_over(State(state): State<AppState>, user: SignedIn) -> Redirect {
    state.sessions.update(&user.id.0, Session::start_over).await;
    Redirect::to("/upload")
}
