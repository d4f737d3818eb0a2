//! Deterministic resume score (0-100)
//!
//! Each criterion is all-or-nothing. The breakdown lists every criterion in
//! table order whether it scored or not, so front ends can render it
//! directly.

use crate::model::resume::{is_filled, ResumeRecord};
use crate::scoring::heuristics::{count_skills, has_action_verb, has_bullet_formatting};
use crate::scoring::rules::{
    max_possible, Criterion, CriterionKind, CRITERIA, MAX_SCORE, MIN_SKILLS, SUMMARY_MIN_CHARS,
};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: u32,
    pub breakdown: Vec<BreakdownItem>,
    pub max_possible: u32,
}

/// One criterion's contribution to the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub label: String,
    pub earned: u32,
    pub max: u32,
}

impl BreakdownItem {
    pub fn is_met(&self) -> bool {
        self.earned == self.max
    }
}

/// Score a resume against the canonical criterion set.
pub fn compute_ats_score(resume: &ResumeRecord) -> ScoreResult {
    compute_ats_score_with(resume, &CRITERIA)
}

/// Score a resume against an explicit rule set.
pub fn compute_ats_score_with(resume: &ResumeRecord, rules: &[Criterion]) -> ScoreResult {
    let breakdown: Vec<BreakdownItem> = rules
        .iter()
        .map(|criterion| {
            let met = criterion_met(criterion.kind, resume);
            BreakdownItem {
                label: criterion.label.to_string(),
                earned: if met { criterion.points } else { 0 },
                max: criterion.points,
            }
        })
        .collect();

    let earned: u32 = breakdown.iter().map(|item| item.earned).sum();
    let score = earned.min(MAX_SCORE);
    debug!(
        "Scored resume: {}/{} ({} of {} criteria met)",
        score,
        max_possible(rules),
        breakdown.iter().filter(|item| item.earned > 0).count(),
        breakdown.len()
    );

    ScoreResult {
        score,
        breakdown,
        max_possible: max_possible(rules),
    }
}

/// Whether the resume satisfies one criterion.
pub fn criterion_met(kind: CriterionKind, resume: &ResumeRecord) -> bool {
    let summary = resume.summary.as_deref().unwrap_or_default();

    match kind {
        CriterionKind::Name => is_filled(resume.personal.name.as_deref()),
        CriterionKind::Email => is_filled(resume.personal.email.as_deref()),
        CriterionKind::SummaryLength => summary.chars().count() > SUMMARY_MIN_CHARS,
        CriterionKind::ExperienceBullets => resume
            .experience
            .iter()
            .filter_map(|entry| entry.description.as_deref())
            .any(has_bullet_formatting),
        CriterionKind::Education => !resume.education.is_empty(),
        CriterionKind::Skills => count_skills(&resume.skills) >= MIN_SKILLS,
        CriterionKind::Project => !resume.projects.is_empty(),
        CriterionKind::Phone => is_filled(resume.personal.phone.as_deref()),
        CriterionKind::LinkedIn => is_filled(resume.links.linkedin.as_deref()),
        CriterionKind::GitHub => is_filled(resume.links.github.as_deref()),
        CriterionKind::SummaryActionVerb => has_action_verb(summary),
    }
}
