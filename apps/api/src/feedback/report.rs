use serde::{Deserialize, Serialize};

use crate::feedback::scoring::{score_answer, MAX_ANSWER_SCORE};
use crate::models::session::TranscriptEntry;

pub const NEEDS_DETAIL_NOTE: &str =
    "Provide more detail and examples. Keep structure: Situation -> Task -> Action -> Result (STAR).";
pub const GOOD_ANSWER_NOTE: &str = "Good answer — include specific metrics if possible.";

/// Answers scoring below this get the STAR note.
const GOOD_ANSWER_THRESHOLD: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackLevel {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl FeedbackLevel {
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            p if p >= 75 => FeedbackLevel::Excellent,
            p if p >= 45 => FeedbackLevel::Good,
            _ => FeedbackLevel::NeedsImprovement,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub question: String,
    pub score: u32,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub overall_score: u32,
    pub max_score: u32,
    pub percent_estimate: u32,
    pub level: FeedbackLevel,
    pub items: Vec<FeedbackItem>,
}

/// Scores every transcript entry and rolls the scores up into a report.
///
/// Items keep transcript order, so a question answered twice (after a
/// follow-up) appears twice. An empty transcript yields 0%.
pub fn generate_feedback(transcript: &[TranscriptEntry]) -> FeedbackReport {
    let items: Vec<FeedbackItem> = transcript
        .iter()
        .map(|entry| {
            let score = score_answer(&entry.answer);
            FeedbackItem {
                question: entry.question.clone(),
                score,
                note: note_for(score).to_string(),
            }
        })
        .collect();

    let overall_score: u32 = items.iter().map(|item| item.score).sum();
    let max_score = MAX_ANSWER_SCORE * items.len() as u32;
    let percent_estimate = if max_score > 0 {
        overall_score * 100 / max_score
    } else {
        0
    };

    FeedbackReport {
        overall_score,
        max_score,
        percent_estimate,
        level: FeedbackLevel::from_percent(percent_estimate),
        items,
    }
}

fn note_for(score: u32) -> &'static str {
    if score < GOOD_ANSWER_THRESHOLD {
        NEEDS_DETAIL_NOTE
    } else {
        GOOD_ANSWER_NOTE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(question: &str, answer: &str) -> TranscriptEntry {
        TranscriptEntry {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn test_empty_transcript_is_zero_percent() {
        let report = generate_feedback(&[]);
        assert_eq!(report.overall_score, 0);
        assert_eq!(report.max_score, 0);
        assert_eq!(report.percent_estimate, 0);
        assert_eq!(report.level, FeedbackLevel::NeedsImprovement);
        assert!(report.items.is_empty());
    }

    #[test]
    fn test_strong_answers_are_excellent() {
        let answer = "I led the redesign of our checkout flow and improved conversion by double digits";
        let transcript = vec![entry("Q1", answer), entry("Q2", answer)];
        let report = generate_feedback(&transcript);
        assert_eq!(report.overall_score, 6);
        assert_eq!(report.max_score, 6);
        assert_eq!(report.percent_estimate, 100);
        assert_eq!(report.level, FeedbackLevel::Excellent);
        assert!(report.items.iter().all(|i| i.note == GOOD_ANSWER_NOTE));
    }

    #[test]
    fn test_percent_is_floored() {
        // scores 3 + 0 + 0 = 3 of 9 -> 33.3% -> 33
        let strong = "I led the redesign of our checkout flow and improved conversion by double digits";
        let transcript = vec![entry("Q1", strong), entry("Q2", ""), entry("Q3", "yes")];
        let report = generate_feedback(&transcript);
        assert_eq!(report.overall_score, 3);
        assert_eq!(report.percent_estimate, 33);
        assert_eq!(report.level, FeedbackLevel::NeedsImprovement);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(FeedbackLevel::from_percent(100), FeedbackLevel::Excellent);
        assert_eq!(FeedbackLevel::from_percent(75), FeedbackLevel::Excellent);
        assert_eq!(FeedbackLevel::from_percent(74), FeedbackLevel::Good);
        assert_eq!(FeedbackLevel::from_percent(45), FeedbackLevel::Good);
        assert_eq!(FeedbackLevel::from_percent(44), FeedbackLevel::NeedsImprovement);
        assert_eq!(FeedbackLevel::from_percent(0), FeedbackLevel::NeedsImprovement);
    }

    #[test]
    fn test_good_level_from_mixed_answers() {
        // 3 + 1 = 4 of 6 -> 66%
        let strong = "I led the redesign of our checkout flow and improved conversion by double digits";
        let transcript = vec![entry("Q1", strong), entry("Q2", "hi")];
        let report = generate_feedback(&transcript);
        assert_eq!(report.percent_estimate, 66);
        assert_eq!(report.level, FeedbackLevel::Good);
    }

    #[test]
    fn test_items_follow_transcript_order_with_notes() {
        let transcript = vec![
            entry("Q1", "ok"),
            entry("Q1", "I designed the retry logic for our payment service"),
        ];
        let report = generate_feedback(&transcript);
        assert_eq!(report.items.len(), 2);
        assert_eq!(report.items[0].question, "Q1");
        assert_eq!(report.items[0].note, NEEDS_DETAIL_NOTE);
        assert_eq!(report.items[1].note, GOOD_ANSWER_NOTE);
    }

    #[test]
    fn test_note_wording_is_fixed() {
        let transcript = vec![
            entry("Q1", ""),
            entry("Q2", "I designed the retry logic for our payment service"),
        ];
        let report = generate_feedback(&transcript);
        assert_eq!(
            report.items[0].note,
            "Provide more detail and examples. Keep structure: Situation -> Task -> Action -> Result (STAR)."
        );
        assert_eq!(
            report.items[1].note,
            "Good answer — include specific metrics if possible."
        );
    }

    #[test]
    fn test_level_serializes_with_display_names() {
        let json = serde_json::to_value(FeedbackLevel::NeedsImprovement).unwrap();
        assert_eq!(json, "Needs Improvement");
        let json = serde_json::to_value(FeedbackLevel::Excellent).unwrap();
        assert_eq!(json, "Excellent");
    }
}
