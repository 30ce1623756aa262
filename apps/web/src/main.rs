mod auth;
mod backend_client;
mod config;
mod customize;
mod dashboard;
mod errors;
mod models;
mod pages;
mod preview;
mod profile;
mod render;
mod routes;
mod session;
mod state;
mod templates;
mod upload;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend_client::BackendClient;
use crate::config::Config;
use crate::routes::build_router;
use crate::session::store::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Foliage web v{}", env!("CARGO_PKG_VERSION"));

    let backend = BackendClient::new(&config.backend_url, config.backend_timeout)?;
    info!(
        "Backend client initialized ({}, timeout {:?})",
        config.backend_url, config.backend_timeout
    );

    let state = AppState {
        config: config.clone(),
        backend: Arc::new(backend),
        sessions: SessionStore::new(config.session_ttl),
    };

    // Sweep sessions nobody came back for
    let sessions = state.sessions.clone();
    let sweep_every = config.session_ttl.min(Duration::from_secs(300));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_every);
        loop {
            ticker.tick().await;
            let removed = sessions.purge_idle().await;
            if removed > 0 {
                info!("Expired {removed} idle sessions");
            }
            debug!("{} sessions active", sessions.active_count().await);
        }
    });

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
