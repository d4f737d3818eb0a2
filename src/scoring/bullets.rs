//! Bullet discipline guidance for experience and project descriptions
//!
//! Guidance only: an empty description produces no feedback, and nothing
//! here blocks saving or export.

use crate::scoring::heuristics::{has_metric, is_action_verb};
use serde::{Deserialize, Serialize};

pub const ACTION_VERB_HINT: &str = "Start with a strong action verb.";
pub const METRIC_HINT: &str = "Add measurable impact (numbers).";

/// Feedback for one non-empty line of a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletFeedback {
    pub line: String,
    pub suggestions: Vec<String>,
}

impl BulletFeedback {
    pub fn has_issues(&self) -> bool {
        !self.suggestions.is_empty()
    }
}

/// One entry per non-empty line, in input order.
pub type BulletAnalysis = Vec<BulletFeedback>;

/// Annotate each non-empty line with improvement hints.
///
/// Checks run in a fixed order: the leading word must be an action verb,
/// then the line must carry a metric. A clean line is still returned, with
/// no suggestions.
pub fn analyze_bullets(text: &str) -> BulletAnalysis {
    if text.trim().is_empty() {
        return Vec::new();
    }

    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut suggestions = Vec::new();

            if !is_action_verb(&leading_word(line)) {
                suggestions.push(ACTION_VERB_HINT.to_string());
            }
            if !has_metric(line) {
                suggestions.push(METRIC_HINT.to_string());
            }

            BulletFeedback {
                line: line.to_string(),
                suggestions,
            }
        })
        .collect()
}

/// True if any line of the text has at least one suggestion.
pub fn has_bullet_issues(text: &str) -> bool {
    analyze_bullets(text).iter().any(BulletFeedback::has_issues)
}

/// First word of a line, lowercased and reduced to ASCII letters. Tokens
/// that are only a bullet marker (`-`, `•`, `*`) are skipped.
fn leading_word(line: &str) -> String {
    line.split_whitespace()
        .find(|token| !token.chars().all(|c| matches!(c, '-' | '•' | '*')))
        .map(|token| {
            token
                .to_lowercase()
                .chars()
                .filter(char::is_ascii_lowercase)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_feedback() {
        assert!(analyze_bullets("").is_empty());
        assert!(analyze_bullets("  \n \n\t").is_empty());
        assert!(!has_bullet_issues(""));
    }

    #[test]
    fn test_clean_and_weak_lines() {
        let analysis = analyze_bullets("Built a tool that processed 50k records\nHelped with stuff");

        assert_eq!(analysis.len(), 2);
        assert_eq!(analysis[0].line, "Built a tool that processed 50k records");
        assert!(analysis[0].suggestions.is_empty());
        assert_eq!(analysis[1].line, "Helped with stuff");
        assert_eq!(analysis[1].suggestions, vec![ACTION_VERB_HINT, METRIC_HINT]);
    }

    #[test]
    fn test_blank_lines_dropped_and_lines_trimmed() {
        let analysis = analyze_bullets("\n  Led 3x growth  \n\n\r\nwrote docs\n");
        assert_eq!(analysis.len(), 2);
        assert_eq!(analysis[0].line, "Led 3x growth");
        assert_eq!(analysis[1].line, "wrote docs");
        assert_eq!(analysis[1].suggestions, vec![METRIC_HINT]);
    }

    #[test]
    fn test_only_metric_missing() {
        let analysis = analyze_bullets("Deployed the new billing service");
        assert_eq!(analysis[0].suggestions, vec![METRIC_HINT]);
    }

    #[test]
    fn test_only_verb_missing() {
        let analysis = analyze_bullets("Responsible for 40% of releases");
        assert_eq!(analysis[0].suggestions, vec![ACTION_VERB_HINT]);
    }

    #[test]
    fn test_punctuation_and_markers_ignored_for_verb() {
        let analysis = analyze_bullets("- Built, tested and shipped 12 services\n• \"Led\" 14 hires\n*Scaled to 10k rps");
        assert!(analysis.iter().all(|b| b.suggestions.is_empty()), "{analysis:?}");
    }

    #[test]
    fn test_marker_is_skipped_before_the_leading_word() {
        let analysis = analyze_bullets("- Helped with stuff\n- Built 10 things\n--");
        assert_eq!(analysis[0].suggestions, vec![ACTION_VERB_HINT, METRIC_HINT]);
        assert!(analysis[1].suggestions.is_empty());
        assert_eq!(analysis[2].suggestions, vec![ACTION_VERB_HINT, METRIC_HINT]);
    }

    #[test]
    fn test_line_starting_with_number_needs_verb() {
        let analysis = analyze_bullets("50% faster builds");
        assert_eq!(analysis[0].suggestions, vec![ACTION_VERB_HINT]);
    }

    #[test]
    fn test_has_bullet_issues() {
        assert!(!has_bullet_issues("Reduced costs by 30%\nMentored 15 engineers"));
        assert!(has_bullet_issues("Reduced costs by 30%\nWorked on things"));
    }
}
