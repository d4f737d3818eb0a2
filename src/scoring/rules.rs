//! Scoring rule tables
//!
//! Point values, thresholds and the action-verb vocabulary live here as
//! named constants so the engine, the ranker and the tests all read the
//! same table. The point values are part of the output contract: front
//! ends render breakdown labels and suggestions verbatim.

use serde::{Deserialize, Serialize};

/// Identifies which check a criterion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    Name,
    Email,
    SummaryLength,
    ExperienceBullets,
    Education,
    Skills,
    Project,
    Phone,
    LinkedIn,
    GitHub,
    SummaryActionVerb,
}

/// One scoring rule: all-or-nothing points plus the remediation shown when
/// it is not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    pub kind: CriterionKind,
    pub label: &'static str,
    pub points: u32,
    pub suggestion: &'static str,
}

impl Criterion {
    /// Suggestion text with the points it would earn, e.g.
    /// `"Add your full name (+10 pts)"`.
    pub fn improvement(&self) -> String {
        format!("{} (+{} pts)", self.suggestion, self.points)
    }
}

/// Minimum summary length, exclusive, in characters.
pub const SUMMARY_MIN_CHARS: usize = 50;

/// Minimum number of skills for the skills criterion.
pub const MIN_SKILLS: usize = 5;

/// Upper bound applied to the final score.
pub const MAX_SCORE: u32 = 100;

/// Number of improvement suggestions returned.
pub const MAX_IMPROVEMENTS: usize = 3;

/// Canonical criterion set, in evaluation and display order.
pub const CRITERIA: [Criterion; 11] = [
    Criterion {
        kind: CriterionKind::Name,
        label: "Name provided",
        points: 10,
        suggestion: "Add your full name",
    },
    Criterion {
        kind: CriterionKind::Email,
        label: "Email provided",
        points: 10,
        suggestion: "Add a professional email address",
    },
    Criterion {
        kind: CriterionKind::SummaryLength,
        label: "Summary longer than 50 characters",
        points: 10,
        suggestion: "Write a summary of more than 50 characters",
    },
    Criterion {
        kind: CriterionKind::ExperienceBullets,
        label: "Experience uses bullet points",
        points: 15,
        suggestion: "Break experience descriptions into bullet points",
    },
    Criterion {
        kind: CriterionKind::Education,
        label: "Education entry present",
        points: 10,
        suggestion: "Add at least one education entry",
    },
    Criterion {
        kind: CriterionKind::Skills,
        label: "At least 5 skills listed",
        points: 10,
        suggestion: "List at least 5 skills",
    },
    Criterion {
        kind: CriterionKind::Project,
        label: "Project present",
        points: 10,
        suggestion: "Add at least one project",
    },
    Criterion {
        kind: CriterionKind::Phone,
        label: "Phone provided",
        points: 5,
        suggestion: "Add a phone number",
    },
    Criterion {
        kind: CriterionKind::LinkedIn,
        label: "LinkedIn provided",
        points: 5,
        suggestion: "Add your LinkedIn profile",
    },
    Criterion {
        kind: CriterionKind::GitHub,
        label: "GitHub provided",
        points: 5,
        suggestion: "Add your GitHub profile",
    },
    Criterion {
        kind: CriterionKind::SummaryActionVerb,
        label: "Summary uses an action verb",
        points: 10,
        suggestion: "Use action verbs in your summary (built, led, delivered)",
    },
];

/// Quantitative token: digits followed by `%`, `x`, `k` or `+` (one space
/// allowed), any run of two or more digits, or `#` and a digit. Two-digit
/// years match too; that imprecision is accepted. Digits are ASCII only.
pub const METRIC_PATTERN: &str = r"[0-9]+\s?[%xXkK+]|[0-9]{2,}|#[0-9]";

/// Action-verb vocabulary, lowercase.
pub const ACTION_VERBS: &[&str] = &[
    "built",
    "led",
    "designed",
    "developed",
    "managed",
    "implemented",
    "created",
    "optimized",
    "increased",
    "reduced",
    "collaborated",
    "delivered",
    "spearheaded",
    "launched",
    "deployed",
    "integrated",
    "architected",
    "refactored",
    "engineered",
    "maintained",
    "migrated",
    "analyzed",
    "configured",
    "established",
    "scaled",
    "resolved",
    "coordinated",
    "executed",
    "mentored",
    "pioneered",
    "wrote",
    "tested",
    "debugged",
    "shipped",
    "contributed",
    "streamlined",
    "automated",
];

/// Total points available from a rule set.
pub fn max_possible(rules: &[Criterion]) -> u32 {
    rules.iter().map(|c| c.points).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_total_is_100() {
        assert_eq!(max_possible(&CRITERIA), 100);
        assert_eq!(CRITERIA.len(), 11);
    }

    #[test]
    fn test_criteria_are_unique() {
        let kinds: HashSet<_> = CRITERIA.iter().map(|c| c.kind).collect();
        assert_eq!(kinds.len(), CRITERIA.len());
    }

    #[test]
    fn test_improvement_includes_points() {
        assert_eq!(CRITERIA[0].improvement(), "Add your full name (+10 pts)");
        assert_eq!(
            CRITERIA[3].improvement(),
            "Break experience descriptions into bullet points (+15 pts)"
        );
    }

    #[test]
    fn test_verbs_are_lowercase_words() {
        for verb in ACTION_VERBS {
            assert!(verb.chars().all(|c| c.is_ascii_lowercase()), "{verb}");
        }
    }
}
