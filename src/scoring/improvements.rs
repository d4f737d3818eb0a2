//! Top improvement suggestions
//!
//! Suggestions come out in criterion table order, not by point value, and
//! are capped at [`MAX_IMPROVEMENTS`].

use crate::model::resume::ResumeRecord;
use crate::scoring::engine::criterion_met;
use crate::scoring::rules::{Criterion, CRITERIA, MAX_IMPROVEMENTS};

/// Up to three remediation strings for criteria the resume misses.
pub fn generate_improvements(resume: &ResumeRecord) -> Vec<String> {
    generate_improvements_with(resume, &CRITERIA, MAX_IMPROVEMENTS)
}

/// Remediation strings for the first `limit` unmet criteria of `rules`.
pub fn generate_improvements_with(
    resume: &ResumeRecord,
    rules: &[Criterion],
    limit: usize,
) -> Vec<String> {
    rules
        .iter()
        .filter(|criterion| !criterion_met(criterion.kind, resume))
        .take(limit)
        .map(Criterion::improvement)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resume::ExperienceEntry;

    #[test]
    fn test_empty_resume_gets_first_three_in_table_order() {
        let improvements = generate_improvements(&ResumeRecord::default());
        assert_eq!(
            improvements,
            vec![
                CRITERIA[0].improvement(),
                CRITERIA[1].improvement(),
                CRITERIA[2].improvement(),
            ]
        );
        assert_eq!(improvements[0], "Add your full name (+10 pts)");
    }

    #[test]
    fn test_not_sorted_by_points() {
        let mut resume = ResumeRecord::sample();
        resume.links.github = None;
        resume.experience = vec![ExperienceEntry {
            description: Some("One paragraph".to_string()),
            ..Default::default()
        }];
        resume.personal.phone = None;

        let improvements = generate_improvements(&resume);
        assert_eq!(
            improvements,
            vec![
                "Break experience descriptions into bullet points (+15 pts)",
                "Add a phone number (+5 pts)",
                "Add your GitHub profile (+5 pts)",
            ]
        );
    }

    #[test]
    fn test_fewer_failures_are_not_padded() {
        let mut resume = ResumeRecord::sample();
        resume.links.linkedin = Some(" ".to_string());
        assert_eq!(generate_improvements(&resume), vec!["Add your LinkedIn profile (+5 pts)"]);
    }

    #[test]
    fn test_complete_resume_has_no_improvements() {
        assert!(generate_improvements(&ResumeRecord::sample()).is_empty());
    }

    #[test]
    fn test_custom_limit() {
        let all = generate_improvements_with(&ResumeRecord::default(), &CRITERIA, usize::MAX);
        assert_eq!(all.len(), CRITERIA.len());
    }
}
