//! Quality report combining score, suggestions and bullet guidance

use crate::model::resume::ResumeRecord;
use crate::output::warnings::get_export_warnings;
use crate::scoring::{
    analyze_bullets, compute_ats_score, generate_improvements, BulletAnalysis, ScoreResult,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything a front end needs to render one resume's feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub score: ScoreResult,

    /// Top suggestions, at most three
    pub improvements: Vec<String>,

    /// Entries whose descriptions have at least one flagged line
    pub bullet_feedback: Vec<EntryFeedback>,

    pub export_warnings: Vec<String>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryFeedback {
    pub section: ResumeSection,
    pub title: String,
    /// Only the flagged lines
    pub bullets: BulletAnalysis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeSection {
    Experience,
    Project,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Strong,
    Fair,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => ScoreBand::Excellent,
            75..=89 => ScoreBand::Strong,
            50..=74 => ScoreBand::Fair,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "EXCELLENT",
            ScoreBand::Strong => "STRONG",
            ScoreBand::Fair => "FAIR",
            ScoreBand::NeedsWork => "NEEDS WORK",
        }
    }
}

impl fmt::Display for ResumeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResumeSection::Experience => write!(f, "Experience"),
            ResumeSection::Project => write!(f, "Project"),
        }
    }
}

impl QualityReport {
    pub fn build(resume: &ResumeRecord, source: impl Into<String>) -> Self {
        Self {
            score: compute_ats_score(resume),
            improvements: generate_improvements(resume),
            bullet_feedback: collect_bullet_feedback(resume),
            export_warnings: get_export_warnings(resume),
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                source: source.into(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score.score)
    }
}

fn collect_bullet_feedback(resume: &ResumeRecord) -> Vec<EntryFeedback> {
    let experience = resume.experience.iter().enumerate().map(|(i, entry)| {
        let title = [entry.role.as_deref(), entry.company.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" — ");
        (
            ResumeSection::Experience,
            fallback_title(title, "Experience", i),
            entry.description.as_deref(),
        )
    });

    let projects = resume.projects.iter().enumerate().map(|(i, entry)| {
        (
            ResumeSection::Project,
            fallback_title(entry.name.clone().unwrap_or_default(), "Project", i),
            entry.description.as_deref(),
        )
    });

    experience
        .chain(projects)
        .filter_map(|(section, title, description)| {
            let bullets: BulletAnalysis = analyze_bullets(description.unwrap_or_default())
                .into_iter()
                .filter(|b| b.has_issues())
                .collect();
            (!bullets.is_empty()).then_some(EntryFeedback {
                section,
                title,
                bullets,
            })
        })
        .collect()
}

fn fallback_title(title: String, kind: &str, index: usize) -> String {
    if title.trim().is_empty() {
        format!("{} #{}", kind, index + 1)
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resume::{ExperienceEntry, ProjectEntry};
    use crate::scoring::bullets::{ACTION_VERB_HINT, METRIC_HINT};

    #[test]
    fn test_sample_report_is_clean() {
        let report = QualityReport::build(&ResumeRecord::sample(), "sample");
        assert_eq!(report.score.score, 100);
        assert_eq!(report.band(), ScoreBand::Excellent);
        assert!(report.improvements.is_empty());
        assert!(report.export_warnings.is_empty());
        assert_eq!(report.metadata.source, "sample");
    }

    #[test]
    fn test_flags_only_weak_lines() {
        let mut resume = ResumeRecord::sample();
        resume.experience.push(ExperienceEntry {
            role: Some("Support".to_string()),
            description: Some("Answered tickets\nResolved 200+ escalations".to_string()),
            ..Default::default()
        });
        resume.projects.push(ProjectEntry {
            description: Some("A small side project".to_string()),
            ..Default::default()
        });

        let report = QualityReport::build(&resume, "test");
        assert_eq!(report.bullet_feedback.len(), 2);

        let support = &report.bullet_feedback[0];
        assert_eq!(support.section, ResumeSection::Experience);
        assert_eq!(support.title, "Support");
        assert_eq!(support.bullets.len(), 1);
        assert_eq!(support.bullets[0].line, "Answered tickets");
        assert_eq!(support.bullets[0].suggestions, vec![ACTION_VERB_HINT, METRIC_HINT]);

        let project = &report.bullet_feedback[1];
        assert_eq!(project.section, ResumeSection::Project);
        assert_eq!(project.title, "Project #2");
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(90), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(75), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(50), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(49), ScoreBand::NeedsWork);
    }
}
