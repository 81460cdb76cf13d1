//! Request handlers for the chatlens endpoints.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::analytics::{AnalyticsResult, analyze, participant_name_tokens};
use crate::cache::ResponseCache;
use crate::clean::clean;
use crate::error::ChatlensError;
use crate::parser::parse;
use crate::window::{last_n, render};

use super::{ApiError, AppState};

/// Request body for `POST /summarize`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub chat_text: String,
    /// Model alias (`"fast"` / `"accurate"`) or raw model id.
    #[serde(default)]
    pub model: String,
    /// Window size; `0` means "all messages".
    #[serde(default)]
    pub last_n: i64,
}

/// Response body for `POST /summarize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// Request body for `POST /ask`.
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub chat_text: String,
    /// Previously generated summary, given to the model as context.
    #[serde(default)]
    pub summary: String,
    pub question: String,
    #[serde(default)]
    pub model: String,
}

/// Response body for `POST /ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Request body for `POST /analytics`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsRequest {
    pub chat_text: String,
    /// Window size; `0` means "all messages".
    #[serde(default)]
    pub last_n: i64,
}

/// Cleans, parses and windows the raw chat text into prompt-ready form.
fn windowed_chat(chat_text: &str, n: i64) -> Result<String, ChatlensError> {
    let cleaned = clean(chat_text);
    if cleaned.is_empty() {
        return Err(ChatlensError::EmptyChat);
    }
    let messages = parse(&cleaned);
    Ok(render(last_n(&messages, n)))
}

/// `POST /summarize`: summarize the trailing window of a chat.
pub async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let chat = windowed_chat(&req.chat_text, req.last_n)?;
    let model = state.config.resolve_model(&req.model).to_string();

    let key = ResponseCache::key(&["summarize", &model, &req.last_n.to_string(), &chat]);
    if let Some(summary) = state.cache.get(&key) {
        tracing::debug!("summary served from cache");
        return Ok(Json(SummarizeResponse { summary }));
    }

    tracing::info!(model = %model, chars = chat.len(), "summarizing chat");
    let summary = state
        .client
        .summarize(&model, &chat, &state.config.options)
        .await?;
    state.cache.insert(key, summary.clone());

    Ok(Json(SummarizeResponse { summary }))
}

/// `POST /ask`: answer a free-text question about a chat.
pub async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    if req.question.trim().is_empty() {
        return Err(ChatlensError::EmptyQuestion.into());
    }
    let chat = windowed_chat(&req.chat_text, 0)?;
    let model = state.config.resolve_model(&req.model).to_string();

    let key = ResponseCache::key(&["ask", &model, &req.question, &chat]);
    if let Some(answer) = state.cache.get(&key) {
        tracing::debug!("answer served from cache");
        return Ok(Json(AskResponse { answer }));
    }

    tracing::info!(model = %model, "answering question");
    let answer = state
        .client
        .answer(&model, &chat, &req.summary, &req.question, &state.config.options)
        .await?;
    state.cache.insert(key, answer.clone());

    Ok(Json(AskResponse { answer }))
}

/// `POST /analytics`: frequency analytics over the trailing window.
///
/// Never errors: empty or malformed chat text yields the zeroed result
/// shape with HTTP 200.
pub async fn analytics(Json(req): Json<AnalyticsRequest>) -> Json<AnalyticsResult> {
    let cleaned = clean(&req.chat_text);
    let messages = parse(&cleaned);
    let window = last_n(&messages, req.last_n);
    let excluded = participant_name_tokens(window.iter().map(|m| m.sender.as_str()));

    tracing::info!(total = window.len(), "computing analytics");
    Json(analyze(window, &excluded))
}
