//! Text heuristics shared by the scorer, the ranker and the bullet analyzer
//!
//! Every function here is total: empty input gives zero/false, never an
//! error.

use crate::model::resume::Skills;
use crate::scoring::rules::{ACTION_VERBS, METRIC_PATTERN};
use aho_corasick::AhoCorasick;
use regex::Regex;
use std::sync::LazyLock;

static METRIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(METRIC_PATTERN).expect("Invalid metric regex"));

static VERB_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(ACTION_VERBS)
        .expect("Failed to build action verb matcher")
});

const BULLET_MARKERS: &[char] = &['\n', '-', '•', '*'];

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// True if the text contains a quantitative token such as `50%`, `3x`,
/// `50K+`, `10` or `#1`.
pub fn has_metric(text: &str) -> bool {
    METRIC_REGEX.is_match(text)
}

/// Case-insensitive containment of any action verb. Matches inside longer
/// words as well (`"skilled"` contains `"led"`).
pub fn has_action_verb(text: &str) -> bool {
    VERB_MATCHER.is_match(text)
}

/// Exact vocabulary membership for a single lowercase word.
pub fn is_action_verb(word: &str) -> bool {
    ACTION_VERBS.contains(&word)
}

/// True if the text has a line break or a bullet marker anywhere in it.
pub fn has_bullet_formatting(text: &str) -> bool {
    text.contains(BULLET_MARKERS)
}

/// Number of skills in either skills shape.
pub fn count_skills(skills: &Skills) -> usize {
    match skills {
        Skills::Text(text) => text.split(',').filter(|s| !s.trim().is_empty()).count(),
        Skills::Categorized(categories) => {
            categories.technical.len() + categories.soft.len() + categories.tools.len()
        }
        Skills::Other(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resume::SkillCategories;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("  Built  a\ttool\n"), 3);
    }

    #[test]
    fn test_has_metric() {
        for text in ["Grew revenue 50%", "3x faster", "50K+ users", "about 10 teams", "Ranked #1", "5 k rows"] {
            assert!(has_metric(text), "{text}");
        }
        for text in ["", "Helped with stuff", "1 project", "#a"] {
            assert!(!has_metric(text), "{text}");
        }
    }

    #[test]
    fn test_non_ascii_digits_are_not_metrics() {
        assert!(!has_metric("grew ٣٤ accounts"));
        assert!(!has_metric("ranked #٣"));
        assert!(has_metric("grew ٣٤ accounts to 40"));
    }

    #[test]
    fn test_two_digit_year_counts_as_metric() {
        assert!(has_metric("Graduated in '19"));
    }

    #[test]
    fn test_has_action_verb() {
        assert!(has_action_verb("LED a team of engineers"));
        assert!(has_action_verb("I have Shipped products"));
        assert!(!has_action_verb("Helped with stuff"));
        assert!(!has_action_verb(""));
    }

    #[test]
    fn test_is_action_verb() {
        assert!(is_action_verb("built"));
        assert!(!is_action_verb("Built"));
        assert!(!is_action_verb("helped"));
    }

    #[test]
    fn test_has_bullet_formatting() {
        assert!(has_bullet_formatting("line one\nline two"));
        assert!(has_bullet_formatting("- did things"));
        assert!(has_bullet_formatting("• did things"));
        assert!(has_bullet_formatting("did * things"));
        assert!(has_bullet_formatting("full-stack work"));
        assert!(!has_bullet_formatting("one plain sentence"));
        assert!(!has_bullet_formatting(""));
    }

    #[test]
    fn test_count_skills() {
        assert_eq!(count_skills(&Skills::Text("React, Node, Go".to_string())), 3);
        assert_eq!(count_skills(&Skills::Text(" , ,".to_string())), 0);
        assert_eq!(count_skills(&Skills::Text(String::new())), 0);

        let categorized = Skills::Categorized(SkillCategories {
            technical: vec!["a".to_string(), "b".to_string()],
            soft: vec![],
            tools: vec!["c".to_string()],
        });
        assert_eq!(count_skills(&categorized), 3);

        assert_eq!(count_skills(&Skills::Other(serde_json::json!([1, 2]))), 0);
    }
}
