//! Axum route handlers for the Interview API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::interview::catalog;
use crate::interview::progression::Progress;
use crate::models::session::{Session, TranscriptEntry};
use crate::state::AppState;

pub const DEFAULT_USER_ID: &str = "default_user";

pub const COMPLETE_MESSAGE: &str = "Interview complete. Request feedback with /api/v1/feedback";

pub(crate) fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

/// Rejects ids that are blank once trimmed; returns the trimmed id.
pub(crate) fn normalize_user_id(user_id: &str) -> Result<&str, AppError> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("user_id cannot be empty".to_string()));
    }
    Ok(trimmed)
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StartResponse {
    pub user_id: String,
    pub role: String,
    pub question: Option<String>,
    pub step: usize,
    pub total_questions: usize,
    pub complete: bool,
}

#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    #[serde(flatten)]
    pub progress: Progress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub user_id: String,
    pub role: String,
    pub step: usize,
    pub total_questions: usize,
    pub current_question: Option<String>,
    pub complete: bool,
    pub follow_ups_at_step: u32,
    pub started_at: DateTime<Utc>,
    pub transcript: Vec<TranscriptEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: catalog::roles(),
    })
}

/// POST /api/v1/start
///
/// Opens (or restarts) the session for `user_id`. An unknown role is not an
/// error: the response carries no question and `complete: true`.
pub async fn handle_start(
    State(state): State<AppState>,
    Json(request): Json<StartRequest>,
) -> Result<Json<StartResponse>, AppError> {
    let user_id = normalize_user_id(&request.user_id)?;
    let role = request
        .role
        .unwrap_or_else(|| state.config.default_role.clone());

    let (session, question) = state.engine.start(&role);
    let step = session.step;
    state.sessions.put(user_id, session).await?;

    if question.is_none() {
        info!(user_id, role = %role, "session started for unknown role; nothing to ask");
    } else {
        info!(user_id, role = %role, "session started");
    }

    Ok(Json(StartResponse {
        user_id: user_id.to_string(),
        total_questions: catalog::question_count(&role),
        complete: question.is_none(),
        question: question.map(str::to_string),
        role,
        step,
    }))
}

/// POST /api/v1/reply
///
/// Records the answer and returns either a follow-up, the next question, or
/// the completion marker. The session is updated in place under the store's
/// lock, so concurrent replies for one user are applied one after another.
pub async fn handle_reply(
    State(state): State<AppState>,
    Json(request): Json<ReplyRequest>,
) -> Result<Json<ReplyResponse>, AppError> {
    let user_id = normalize_user_id(&request.user_id)?;
    let engine = state.engine;
    let answer = request.answer.as_str();
    let mut outcome = None;
    state
        .sessions
        .update(
            user_id,
            Box::new(|session: &mut Session| {
                outcome = Some(engine.submit_answer(session, answer));
            }),
        )
        .await?;
    let progress = outcome.ok_or_else(|| AppError::SessionNotFound(user_id.to_string()))?;

    let message = match &progress {
        Progress::FollowUp { step, .. } => {
            info!(user_id, step, "follow-up requested");
            None
        }
        Progress::Advance { step, .. } => {
            info!(user_id, step, "advanced to next question");
            None
        }
        Progress::Complete { step } => {
            info!(user_id, step, "interview complete");
            Some(COMPLETE_MESSAGE.to_string())
        }
    };

    Ok(Json(ReplyResponse { progress, message }))
}

/// GET /api/v1/sessions/:user_id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<SessionView>, AppError> {
    let user_id = normalize_user_id(&user_id)?;
    let session = state
        .sessions
        .get(user_id)
        .await?
        .ok_or_else(|| AppError::SessionNotFound(user_id.to_string()))?;

    let current_question = state.engine.current_question(&session);
    Ok(Json(SessionView {
        user_id: user_id.to_string(),
        total_questions: catalog::question_count(&session.role),
        current_question: current_question.map(str::to_string),
        complete: state.engine.is_complete(&session),
        step: session.step,
        follow_ups_at_step: session.follow_ups_at_step,
        started_at: session.started_at,
        role: session.role,
        transcript: session.transcript,
    }))
}

/// DELETE /api/v1/sessions/:user_id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let user_id = normalize_user_id(&user_id)?;
    if !state.sessions.delete(user_id).await? {
        return Err(AppError::SessionNotFound(user_id.to_string()));
    }
    info!(user_id, "session deleted");
    Ok(StatusCode::NO_CONTENT)
}
