use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{info, warn};

use crate::backend_client::BackendError;
use crate::dashboard::{open_into, portfolio_card};
use crate::errors::AppError;
use crate::pages::{layout, Notice};
use crate::session::extract::SignedIn;
use crate::state::AppState;

fn dashboard_page(cards: &str, notice: Option<&Notice>) -> Html<String> {
    let body = format!(
        r#"<div style="display:flex;justify-content:space-between;align-items:center;"><h1>Your portfolios</h1><a class="button button-primary" href="/upload">New portfolio</a></div>{cards}"#
    );
    layout("Dashboard", true, notice, &body)
}

/// Lists the user's portfolios, rendering backend failures inline.
async fn render_dashboard(state: &AppState, user: &SignedIn, notice: Option<Notice>) -> Result<Response, AppError> {
    let (cards, notice) = match state.backend.list_portfolios(&user.token).await {
        Ok(portfolios) if portfolios.is_empty() => (
            r#"<div class="card"><p>No portfolios yet.</p><a href="/upload">Upload a resume to create your first one.</a></div>"#.to_string(),
            notice,
        ),
        Ok(portfolios) => {
            let cards: String = portfolios.iter().map(portfolio_card).collect();
            (format!(r#"<div class="grid">{cards}</div>"#), notice)
        }
        Err(BackendError::Unauthorized) => return Err(AppError::Unauthorized),
        Err(e) => {
            warn!("Listing portfolios failed: {e}");
            (String::new(), Some(Notice::error(e.to_string())))
        }
    };
    Ok(dashboard_page(&cards, notice.as_ref()).into_response())
}

/// GET /dashboard
pub async fn handle_dashboard(State(state): State<AppState>, user: SignedIn) -> Result<Response, AppError> {
    render_dashboard(&state, &user, None).await
}

/// POST /portfolios/:id/open
pub async fn handle_open(
    State(state): State<AppState>,
    user: SignedIn,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let portfolio = match state.backend.get_portfolio(&user.token, &id).await {
        Ok(portfolio) => portfolio,
        Err(BackendError::Unauthorized) => return Err(AppError::Unauthorized),
        Err(e) => {
            warn!("Opening portfolio {id} failed: {e}");
            return render_dashboard(&state, &user, Some(Notice::error(e.to_string()))).await;
        }
    };
    let known_template = state
        .sessions
        .update(&user.id.0, |session| open_into(session, portfolio))
        .await;
    info!("Opened portfolio {id}");
    let next = if known_template { "/preview" } else { "/templates" };
    Ok(Redirect::to(next).into_response())
}

/// POST /portfolios/:id/delete
pub async fn handle_delete(
    State(state): State<AppState>,
    user: SignedIn,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.backend.delete_portfolio(&user.token, &id).await {
        Ok(()) => {
            state
                .sessions
                .update(&user.id.0, |session| {
                    if session.current_portfolio_id.as_deref() == Some(id.as_str()) {
                        session.forget_saved();
                    }
                })
                .await;
            info!("Deleted portfolio {id}");
            Ok(Redirect::to("/dashboard").into_response())
        }
        Err(BackendError::Unauthorized) => Err(AppError::Unauthorized),
        Err(e) => {
            warn!("Deleting portfolio {id} failed: {e}");
            render_dashboard(&state, &user, Some(Notice::error(e.to_string()))).await
        }
    }
}

/// POST /portfolios/:id/publish
pub async fn handle_toggle_publish(
    State(state): State<AppState>,
    user: SignedIn,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.backend.toggle_publish(&user.token, &id).await {
        Ok(publish) => {
            info!("Portfolio {id} published: {}", publish.is_published);
            Ok(Redirect::to("/dashboard").into_response())
        }
        Err(BackendError::Unauthorized) => Err(AppError::Unauthorized),
        Err(e) => {
            warn!("Toggling publication of {id} failed: {e}");
            render_dashboard(&state, &user, Some(Notice::error(e.to_string()))).await
        }
    }
}
