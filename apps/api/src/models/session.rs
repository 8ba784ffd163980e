use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded answer and the question that was current when it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub question: String,
    pub answer: String,
}

/// Snapshot of a single candidate's interview, as held by a `SessionStore`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub role: String,
    pub step: usize,
    pub transcript: Vec<TranscriptEntry>,
    /// Follow-ups already issued for the question at `step`. Reset on advance.
    pub follow_ups_at_step: u32,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            step: 0,
            transcript: Vec::new(),
            follow_ups_at_step: 0,
            started_at: Utc::now(),
        }
    }
}
