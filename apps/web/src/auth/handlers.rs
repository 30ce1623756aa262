use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::info;

use crate::pages::{layout, Notice};
use crate::session::extract::{SessionId, Visitor};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInForm {
    #[serde(default)]
    pub access_token: String,
}

fn signin_page(notice: Option<&Notice>) -> Html<String> {
    let body = r#"<h1>Sign in</h1><form class="card" method="post" action="/signin" style="max-width:480px;"><label for="access_token">Access token</label><input id="access_token" type="password" name="access_token" autocomplete="off"><p class="muted">Paste the token issued by your identity provider.</p><button class="button button-primary" type="submit">Sign in</button></form>"#;
    layout("Sign in", false, notice, body)
}

/// GET /
pub async fn handle_home(visitor: Visitor) -> Redirect {
    if visitor.session.access_token.is_some() {
        Redirect::to("/dashboard")
    } else {
        Redirect::to("/signin")
    }
}

/// GET /signin
pub async fn handle_signin_page() -> Html<String> {
    signin_page(None)
}

/// POST /signin
pub async fn handle_signin(
    State(state): State<AppState>,
    id: SessionId,
    Form(form): Form<SignInForm>,
) -> Response {
    let token = form.access_token.trim().to_string();
    if token.is_empty() {
        return signin_page(Some(&Notice::error("Please enter your access token."))).into_response();
    }
    state
        .sessions
        .update(&id.0, |session| session.access_token = Some(token))
        .await;
    info!("Visitor signed in");
    Redirect::to("/dashboard").into_response()
}

/// POST /signout
pub async fn handle_signout(State(state): State<AppState>, id: SessionId) -> Redirect {
    state.sessions.remove(&id.0).await;
    info!("Visitor signed out");
    Redirect::to("/signin")
}
