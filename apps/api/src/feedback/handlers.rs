//! Axum route handlers for the Feedback API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::feedback::report::{generate_feedback, FeedbackReport};
use crate::interview::handlers::{default_user_id, normalize_user_id};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: FeedbackReport,
}

/// POST /api/v1/feedback
///
/// Scores whatever the transcript holds so far. The interview does not need
/// to be complete, and an empty transcript reports 0%.
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let user_id = normalize_user_id(&request.user_id)?;
    let session = state
        .sessions
        .get(user_id)
        .await?
        .ok_or_else(|| AppError::SessionNotFound(user_id.to_string()))?;

    let feedback = generate_feedback(&session.transcript);
    info!(
        user_id,
        answers = feedback.items.len(),
        percent = feedback.percent_estimate,
        level = ?feedback.level,
        "feedback generated"
    );

    Ok(Json(FeedbackResponse { feedback }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::feedback::report::FeedbackLevel;
    use crate::interview::handlers::{handle_reply, handle_start, ReplyRequest, StartRequest};

    async fn feedback_for(state: &AppState, user_id: &str) -> Result<FeedbackReport, AppError> {
        handle_feedback(
            State(state.clone()),
            Json(FeedbackRequest {
                user_id: user_id.to_string(),
            }),
        )
        .await
        .map(|json| json.0.feedback)
    }

    async fn start(state: &AppState, user_id: &str) {
        let _started = handle_start(
            State(state.clone()),
            Json(StartRequest {
                user_id: user_id.to_string(),
                role: None,
            }),
        )
        .await
        .unwrap();
    }

    async fn reply(state: &AppState, user_id: &str, answer: &str) {
        let _replied = handle_reply(
            State(state.clone()),
            Json(ReplyRequest {
                user_id: user_id.to_string(),
                answer: answer.to_string(),
            }),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_feedback_without_session_is_not_found() {
        let state = AppState::new(Config::default());
        let result = feedback_for(&state, "ghost").await;
        assert!(matches!(result, Err(AppError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn test_feedback_before_any_answer_is_zero() {
        let state = AppState::new(Config::default());
        start(&state, "alice").await;

        let report = feedback_for(&state, "alice").await.unwrap();
        assert_eq!(report.percent_estimate, 0);
        assert_eq!(report.level, FeedbackLevel::NeedsImprovement);
        assert!(report.items.is_empty());
    }

    #[tokio::test]
    async fn test_feedback_covers_follow_up_answers() {
        let state = AppState::new(Config::default());
        start(&state, "alice").await;
        reply(&state, "alice", "ok").await;
        reply(
            &state,
            "alice",
            "I led the redesign of our checkout flow and improved conversion by double digits",
        )
        .await;

        let report = feedback_for(&state, "alice").await.unwrap();
        assert_eq!(report.items.len(), 2);
        assert_eq!(report.items[0].question, report.items[1].question);
        // 0 + 3 of 6
        assert_eq!(report.overall_score, 3);
        assert_eq!(report.percent_estimate, 50);
        assert_eq!(report.level, FeedbackLevel::Good);
    }
}
