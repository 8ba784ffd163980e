//! Lexical follow-up triggers.
//!
//! Rules are checked in order and the first match wins. Length is checked
//! before keywords, so a short answer mentioning "team" gets the expand prompt.

pub const EMPTY_ANSWER_PROMPT: &str =
    "I didn't quite catch that — can you try answering again with a bit more detail?";
pub const EXPAND_PROMPT: &str = "Could you expand on that a bit more — maybe give an example?";
pub const TEAM_CONTRIBUTION_PROMPT: &str =
    "Nice — what was your specific contribution in the team?";
pub const ROOT_CAUSE_PROMPT: &str =
    "How did you identify the root cause and which tools or methods did you use?";

/// Answers shorter than this (after trimming, in chars) get the expand prompt.
pub const MIN_ANSWER_CHARS: usize = 25;

const TROUBLESHOOTING_KEYWORDS: &[&str] = &["problem", "issue", "bug"];

/// Returns the follow-up prompt an answer warrants, if any.
pub fn decide_follow_up(answer: &str) -> Option<&'static str> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return Some(EMPTY_ANSWER_PROMPT);
    }
    if trimmed.chars().count() < MIN_ANSWER_CHARS {
        return Some(EXPAND_PROMPT);
    }

    let folded = answer.to_lowercase();
    if folded.contains("team") {
        return Some(TEAM_CONTRIBUTION_PROMPT);
    }
    if TROUBLESHOOTING_KEYWORDS.iter().any(|kw| folded.contains(kw)) {
        return Some(ROOT_CAUSE_PROMPT);
    }
    None
}
