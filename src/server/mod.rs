//! HTTP server: router, shared state, and the [`serve`] entry point.
//!
//! The matcher is built once at startup and shared read-only. Each request
//! that touches the transcript opens its own connection via [`db::connect`]
//! and drops it before responding.

pub mod error;
pub mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ChatboxConfig;
use crate::db;
use crate::intent::{IntentMatcher, IntentSet};

#[derive(Clone)]
pub struct AppState {
    pub db_path: Arc<PathBuf>,
    pub matcher: Arc<IntentMatcher>,
}

impl AppState {
    pub fn new(db_path: impl Into<PathBuf>, matcher: IntentMatcher) -> Self {
        Self {
            db_path: Arc::new(db_path.into()),
            matcher: Arc::new(matcher),
        }
    }
}

/// Build the router with all routes and request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/static/app.js", get(handlers::app_js))
        .route("/api/message", post(handlers::post_message))
        .route("/api/history", get(handlers::get_history))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open the database, load the configured intents, and serve HTTP until ctrl-c.
pub async fn serve(config: ChatboxConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    // Bootstrap: create the file, schema and migrations before taking traffic.
    drop(db::open_database(&db_path)?);
    tracing::info!(db = %db_path.display(), "database ready");

    let intents_path = config.resolved_intents_path();
    let intents = IntentSet::load(&intents_path).context("failed to load intents")?;
    let matcher = IntentMatcher::new(intents);

    let router = build_router(AppState::new(db_path, matcher));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "chatbox listening at http://{bind_addr}/");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down HTTP server");
}
