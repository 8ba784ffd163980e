//! Static question catalog, keyed by role name.
//!
//! Role lookups are case-insensitive. An unknown role behaves as a role with
//! zero questions, so every lookup against it returns `None`.

const CATALOG: &[(&str, &[&str])] = &[
    (
        "software engineer",
        &[
            "Tell me briefly about yourself and why you applied for this Software Engineer role.",
            "Explain the difference between a process and a thread.",
            "What is a REST API and when would you use it?",
            "Describe a technical problem you solved and how you approached it.",
        ],
    ),
    (
        "sales associate",
        &[
            "Tell me about your background and why you want this sales role.",
            "How would you handle a hesitant customer?",
            "Describe a time you exceeded a sales target.",
            "How do you handle rejection?",
        ],
    ),
    (
        "retail associate",
        &[
            "Tell me about your background and why you applied for retail.",
            "How do you handle difficult customers?",
            "Describe a time you worked under pressure.",
            "Why do you want to work in retail?",
        ],
    ),
];

/// Known role names in definition order.
pub fn roles() -> Vec<&'static str> {
    CATALOG.iter().map(|(role, _)| *role).collect()
}

/// All questions for a role, or an empty slice when the role is unknown.
pub fn questions_for(role: &str) -> &'static [&'static str] {
    let role = role.to_lowercase();
    CATALOG
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, questions)| *questions)
        .unwrap_or(&[])
}

pub fn question_count(role: &str) -> usize {
    questions_for(role).len()
}

/// The question at `step` for `role`. Past-the-end steps return `None`.
pub fn question_at(role: &str, step: usize) -> Option<&'static str> {
    questions_for(role).get(step).copied()
}

pub fn is_known_role(role: &str) -> bool {
    !questions_for(role).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_in_definition_order() {
        assert_eq!(
            roles(),
            vec!["software engineer", "sales associate", "retail associate"]
        );
    }

    #[test]
    fn test_known_role_walks_full_question_list() {
        for role in roles() {
            let expected = questions_for(role);
            assert!(!expected.is_empty());
            for (step, question) in expected.iter().enumerate() {
                assert_eq!(question_at(role, step), Some(*question));
            }
            assert_eq!(question_at(role, expected.len()), None);
        }
    }

    #[test]
    fn test_role_lookup_is_case_insensitive() {
        assert_eq!(
            question_at("Software Engineer", 0),
            question_at("software engineer", 0)
        );
        assert_eq!(question_count("SALES ASSOCIATE"), 4);
    }

    #[test]
    fn test_unknown_role_has_no_questions() {
        assert!(!roles().contains(&"astronaut"));
        assert_eq!(question_at("astronaut", 0), None);
        assert_eq!(question_at("astronaut", 3), None);
        assert_eq!(question_count("astronaut"), 0);
        assert!(!is_known_role("astronaut"));
    }

    #[test]
    fn test_out_of_range_step_is_none() {
        assert_eq!(question_at("software engineer", 4), None);
        assert_eq!(question_at("software engineer", usize::MAX), None);
    }

    #[test]
    fn test_lookup_is_repeatable() {
        let first = question_at("retail associate", 2);
        let second = question_at("retail associate", 2);
        assert_eq!(first, second);
        assert_eq!(first, Some("Describe a time you worked under pressure."));
    }
}
