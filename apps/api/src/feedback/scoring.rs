//! Per-answer heuristic score in `0..=3`.
//!
//! Length contributes up to 2 points and any ownership/impact keyword adds 1.
//! Keywords are plain substring checks on the case-folded answer, so "i"
//! matches inside any word containing that letter.

pub const MAX_ANSWER_SCORE: u32 = 3;

const LONG_ANSWER_CHARS: usize = 40;
const MEDIUM_ANSWER_CHARS: usize = 15;

const IMPACT_KEYWORDS: &[&str] = &[
    "team",
    "i",
    "we",
    "led",
    "implemented",
    "improved",
    "reduced",
    "designed",
];

pub fn score_answer(answer: &str) -> u32 {
    let folded = answer.trim().to_lowercase();
    let len = folded.chars().count();

    let length_bonus = if len > LONG_ANSWER_CHARS {
        2
    } else if len > MEDIUM_ANSWER_CHARS {
        1
    } else {
        0
    };

    let keyword_bonus = u32::from(IMPACT_KEYWORDS.iter().any(|kw| folded.contains(kw)));

    length_bonus + keyword_bonus
}
