//! Interview progression: one state machine per session.
//!
//! A session waits for an answer at `step` until `step` reaches the role's
//! question count, at which point it is complete. Every answer to an
//! in-progress session is appended to the transcript exactly once, whether it
//! triggers a follow-up or advances the step.

use serde::Serialize;
use tracing::debug;

use crate::interview::catalog;
use crate::interview::follow_up::decide_follow_up;
use crate::models::session::{Session, TranscriptEntry};

/// Outcome of submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Progress {
    /// Clarification requested. The step did not move.
    FollowUp { follow_up: String, step: usize },
    /// The step moved on and another question is waiting.
    Advance { next_question: String, step: usize },
    /// No question remains at `step`.
    Complete { step: usize },
}

/// Drives sessions through a role's questions.
///
/// `max_follow_ups` caps how many follow-ups a single question can produce.
/// `None` keeps asking for as long as the heuristic fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterviewEngine {
    pub max_follow_ups: Option<u32>,
}

impl InterviewEngine {
    pub fn new(max_follow_ups: Option<u32>) -> Self {
        Self { max_follow_ups }
    }

    /// Opens a session at step 0 and returns it with its first question.
    /// An unknown role yields `None`: the session is complete from the start.
    pub fn start(&self, role: &str) -> (Session, Option<&'static str>) {
        let session = Session::new(role);
        let first = catalog::question_at(role, 0);
        (session, first)
    }

    /// The question the session is currently waiting on.
    pub fn current_question(&self, session: &Session) -> Option<&'static str> {
        catalog::question_at(&session.role, session.step)
    }

    pub fn is_complete(&self, session: &Session) -> bool {
        self.current_question(session).is_none()
    }

    /// Records `answer` against the current question and decides what comes next.
    ///
    /// A session that is already complete is left untouched.
    pub fn submit_answer(&self, session: &mut Session, answer: &str) -> Progress {
        let Some(question) = self.current_question(session) else {
            return Progress::Complete { step: session.step };
        };

        session.transcript.push(TranscriptEntry {
            question: question.to_string(),
            answer: answer.to_string(),
        });

        if let Some(prompt) = self.follow_up_for(session, answer) {
            session.follow_ups_at_step += 1;
            debug!(
                step = session.step,
                follow_ups = session.follow_ups_at_step,
                "follow-up issued"
            );
            return Progress::FollowUp {
                follow_up: prompt.to_string(),
                step: session.step,
            };
        }

        session.step += 1;
        session.follow_ups_at_step = 0;
        match self.current_question(session) {
            Some(next) => Progress::Advance {
                next_question: next.to_string(),
                step: session.step,
            },
            None => Progress::Complete { step: session.step },
        }
    }

    fn follow_up_for(&self, session: &Session, answer: &str) -> Option<&'static str> {
        if let Some(cap) = self.max_follow_ups {
            if session.follow_ups_at_step >= cap {
                return None;
            }
        }
        decide_follow_up(answer)
    }
}
