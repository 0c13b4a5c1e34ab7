//! Route handlers for the chat page and the JSON API.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::AppError;
use super::AppState;
use crate::db;
use crate::transcript::{self, normalize_user_id, HistoryEntry};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const APP_JS: &str = include_str!("../../static/app.js");

/// Body of `POST /api/message`. Both fields are optional on the wire.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub ok: bool,
    pub reply: String,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub ok: bool,
    pub history: Vec<HistoryEntry>,
}

/// GET / - The chat page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/app.js - Client script for the chat page.
pub async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        APP_JS,
    )
}

/// POST /api/message - Match a message, record the exchange, return the reply.
///
/// The body is parsed as JSON whatever its content type.
pub async fn post_message(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, AppError> {
    let request: MessageRequest = serde_json::from_slice(&body)
        .map_err(|_| AppError::Validation("Invalid JSON body".into()))?;

    let message = request.message.as_deref().unwrap_or("").trim().to_string();
    let user_id = normalize_user_id(request.user_id.as_deref());

    if message.is_empty() {
        return Err(AppError::Validation("Empty message".into()));
    }

    let request_id = Uuid::now_v7();
    let outcome = state.matcher.respond(&message);
    tracing::info!(
        %request_id,
        user_id = %user_id,
        message_len = message.len(),
        source = %outcome.source,
        "message answered"
    );

    let db_path = Arc::clone(&state.db_path);
    let reply = outcome.text.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = db::connect(db_path.as_path())?;
        transcript::record_exchange(&mut conn, &user_id, &message, &reply)
    })
    .await
    .map_err(|e| AppError::Internal(format!("storage task failed: {e}")))??;

    Ok(Json(MessageResponse {
        ok: true,
        reply: outcome.text,
    }))
}

/// GET /api/history?user_id= - The user's transcript, oldest first.
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let user_id = normalize_user_id(query.user_id.as_deref());

    let db_path = Arc::clone(&state.db_path);
    let history = tokio::task::spawn_blocking(move || {
        let conn = db::connect(db_path.as_path())?;
        transcript::history(&conn, &user_id)
    })
    .await
    .map_err(|e| AppError::Internal(format!("storage task failed: {e}")))??;

    Ok(Json(HistoryResponse { ok: true, history }))
}
