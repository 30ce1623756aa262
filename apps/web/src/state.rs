use std::sync::Arc;

use crate::backend_client::PortfolioBackend;
use crate::config::Config;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `BackendClient` in production, an in-memory fake in tests.
    pub backend: Arc<dyn PortfolioBackend>,
    pub sessions: SessionStore,
}
