//! Pre-export completeness warnings

use crate::model::resume::{is_filled, ResumeRecord};

pub const MISSING_NAME: &str = "Name is missing.";
pub const MISSING_ENTRIES: &str = "No projects or experience entries added.";

/// Warnings shown before export. Empty when the resume is exportable as is.
pub fn get_export_warnings(resume: &ResumeRecord) -> Vec<String> {
    let mut warnings = Vec::new();

    if !is_filled(resume.personal.name.as_deref()) {
        warnings.push(MISSING_NAME.to_string());
    }

    if resume.projects.is_empty() && resume.experience.is_empty() {
        warnings.push(MISSING_ENTRIES.to_string());
    }

    warnings
}
