//! Session cookie assignment and the extractors handlers use to reach
//! their session.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{
        header::{COOKIE, SET_COOKIE},
        request::Parts,
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::Session;
use crate::state::AppState;

pub const COOKIE_NAME: &str = "portfolio_session";

/// Opaque id of the visitor's session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

/// Middleware: makes sure every request carries a `SessionId`, issuing a
/// cookie on the first visit.
pub async fn assign_session(mut request: Request, next: Next) -> Response {
    let (id, fresh) = match session_cookie(request.headers()) {
        Some(id) => (id, false),
        None => (Uuid::new_v4().to_string(), true),
    };
    request.extensions_mut().insert(SessionId(id.clone()));

    let mut response = next.run(request).await;
    if fresh {
        let cookie = format!("{COOKIE_NAME}={id}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }
    response
}

/// The session id from the `Cookie` header, when it is one we could have issued.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .and_then(|(_, value)| Uuid::parse_str(value).ok())
        .map(|id| id.to_string())
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for SessionId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionId>()
            .cloned()
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("session middleware is not installed")))
    }
}

/// Any visitor's session, signed in or not.
pub struct Visitor {
    pub id: SessionId,
    pub session: Session,
}

#[async_trait]
impl FromRequestParts<AppState> for Visitor {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let id = SessionId::from_request_parts(parts, state).await?;
        let session = state.sessions.load(&id.0).await;
        Ok(Visitor { id, session })
    }
}

/// A signed-in visitor. Rejects with a redirect to `/signin` otherwise.
pub struct SignedIn {
    pub id: SessionId,
    pub session: Session,
    pub token: String,
}

#[async_trait]
impl FromRequestParts<AppState> for SignedIn {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Visitor { id, session } = Visitor::from_request_parts(parts, state).await?;
        let token = session.access_token.clone().ok_or(AppError::Unauthorized)?;
        Ok(SignedIn { id, session, token })
    }
}
