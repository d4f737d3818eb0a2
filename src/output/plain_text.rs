//! Plain-text resume export

use crate::model::resume::ResumeRecord;

const RULE_WIDTH: usize = 40;

/// Render the resume as plain text, omitting empty sections.
pub fn generate_plain_text(resume: &ResumeRecord) -> String {
    let mut lines: Vec<String> = Vec::new();
    let personal = &resume.personal;

    if let Some(name) = filled(&personal.name) {
        lines.push(name.to_string());
    }

    let contact = join_filled(&[&personal.email, &personal.phone, &personal.location], " | ");
    if !contact.is_empty() {
        lines.push(contact);
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }

    if let Some(summary) = filled(&resume.summary) {
        push_heading(&mut lines, "SUMMARY");
        lines.push(summary.to_string());
        lines.push(String::new());
    }

    if !resume.education.is_empty() {
        push_heading(&mut lines, "EDUCATION");
        for entry in &resume.education {
            let dates = join_filled(&[&entry.start_date, &entry.end_date], " — ");
            lines.push(with_dates(
                filled(&entry.institution).unwrap_or("Institution"),
                &dates,
            ));
            if let Some(degree) = filled(&entry.degree) {
                lines.push(degree.to_string());
            }
            if let Some(description) = filled(&entry.description) {
                lines.push(description.to_string());
            }
            lines.push(String::new());
        }
    }

    if !resume.experience.is_empty() {
        push_heading(&mut lines, "EXPERIENCE");
        for entry in &resume.experience {
            let title = join_filled(&[&entry.role, &entry.company], " — ");
            let dates = join_filled(&[&entry.start_date, &entry.end_date], " — ");
            let title = if title.is_empty() { "Role" } else { title.as_str() };
            lines.push(with_dates(title, &dates));
            if let Some(description) = filled(&entry.description) {
                lines.push(description.to_string());
            }
            lines.push(String::new());
        }
    }

    if !resume.projects.is_empty() {
        push_heading(&mut lines, "PROJECTS");
        for entry in &resume.projects {
            let name = filled(&entry.name).unwrap_or("Project");
            let tech = entry.technologies().join(", ");
            if tech.is_empty() {
                lines.push(name.to_string());
            } else {
                lines.push(format!("{}  |  {}", name, tech));
            }
            if let Some(description) = filled(&entry.description) {
                lines.push(description.to_string());
            }
            lines.push(String::new());
        }
    }

    let skills = resume.skills.to_list();
    if !skills.is_empty() {
        push_heading(&mut lines, "SKILLS");
        lines.push(skills.join(", "));
        lines.push(String::new());
    }

    let github = filled(&resume.links.github);
    let linkedin = filled(&resume.links.linkedin);
    if github.is_some() || linkedin.is_some() {
        push_heading(&mut lines, "LINKS");
        if let Some(github) = github {
            lines.push(format!("GitHub: {}", github));
        }
        if let Some(linkedin) = linkedin {
            lines.push(format!("LinkedIn: {}", linkedin));
        }
        lines.push(String::new());
    }

    lines.join("\n").trim().to_string()
}

fn push_heading(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push("-".repeat(RULE_WIDTH));
}

fn with_dates(title: &str, dates: &str) -> String {
    if dates.is_empty() {
        title.to_string()
    } else {
        format!("{}  |  {}", title, dates)
    }
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn join_filled(values: &[&Option<String>], separator: &str) -> String {
    values
        .iter()
        .filter_map(|v| filled(v))
        .collect::<Vec<_>>()
        .join(separator)
}
