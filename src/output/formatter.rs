//! Output formatters for quality reports

use crate::config::OutputFormat;
use crate::error::{Result, ResumeScoreError};
use crate::output::report::{QualityReport, ScoreBand};
use colored::{Color, Colorize};
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

/// Longest bullet line shown before truncation, in graphemes.
const MAX_LINE_GRAPHEMES: usize = 50;

/// Trait for formatting quality reports
pub trait OutputFormatter {
    fn format_report(&self, report: &QualityReport) -> Result<String>;
}

/// Console formatter with colors and check marks
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and front ends
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".blue().bold(), title.blue().bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn format_score_badge(&self, band: ScoreBand) -> String {
        let color = match band {
            ScoreBand::Excellent => Color::Green,
            ScoreBand::Strong => Color::BrightGreen,
            ScoreBand::Fair => Color::Yellow,
            ScoreBand::NeedsWork => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", band.label().color(color).bold())
        } else {
            format!("[{}]", band.label())
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &QualityReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME SCORE"));
        output.push_str(&format!(
            "Score: {}/{} {}\n",
            report.score.score,
            report.score.max_possible,
            self.format_score_badge(report.band())
        ));

        output.push_str(&self.format_header("Breakdown"));
        for item in &report.score.breakdown {
            let mark = if item.is_met() {
                self.colorize("✓", Color::Green)
            } else {
                self.colorize("✗", Color::Red)
            };
            output.push_str(&format!("  {} {:<36} {:>2}/{}\n", mark, item.label, item.earned, item.max));
        }

        if !report.improvements.is_empty() {
            output.push_str(&self.format_header("Top Improvements"));
            for (i, improvement) in report.improvements.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, improvement));
            }
        }

        if self.detailed && !report.bullet_feedback.is_empty() {
            output.push_str(&self.format_header("Bullet Guidance"));
            for entry in &report.bullet_feedback {
                output.push_str(&format!("  {} ({})\n", entry.title, entry.section));
                for bullet in &entry.bullets {
                    output.push_str(&format!("    \"{}\"\n", truncate_line(&bullet.line, MAX_LINE_GRAPHEMES)));
                    for suggestion in &bullet.suggestions {
                        output.push_str(&format!("      → {}\n", self.colorize(suggestion, Color::Yellow)));
                    }
                }
            }
        }

        if !report.export_warnings.is_empty() {
            output.push_str(&self.format_header("Export Warnings"));
            for warning in &report.export_warnings {
                output.push_str(&format!("  ⚠ {}\n", self.colorize(warning, Color::Yellow)));
            }
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &QualityReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &QualityReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume Score Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Source:** `{}` | **Version:** {}\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.source,
                report.metadata.version
            ));
        }

        output.push_str(&format!(
            "**Score:** {}/{} ({})\n\n",
            report.score.score,
            report.score.max_possible,
            report.band().label()
        ));

        output.push_str("## Breakdown\n\n");
        output.push_str("| Criterion | Earned | Max |\n");
        output.push_str("|-----------|--------|-----|\n");
        for item in &report.score.breakdown {
            output.push_str(&format!("| {} | {} | {} |\n", item.label, item.earned, item.max));
        }
        output.push('\n');

        if !report.improvements.is_empty() {
            output.push_str("## Top Improvements\n\n");
            for (i, improvement) in report.improvements.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, improvement));
            }
            output.push('\n');
        }

        if !report.bullet_feedback.is_empty() {
            output.push_str("## Bullet Guidance\n\n");
            for entry in &report.bullet_feedback {
                output.push_str(&format!("### {} ({})\n\n", entry.title, entry.section));
                for bullet in &entry.bullets {
                    output.push_str(&format!("- \"{}\"\n", bullet.line));
                    for suggestion in &bullet.suggestions {
                        output.push_str(&format!("  - {}\n", suggestion));
                    }
                }
                output.push('\n');
            }
        }

        if !report.export_warnings.is_empty() {
            output.push_str("## Export Warnings\n\n");
            for warning in &report.export_warnings {
                output.push_str(&format!("- {}\n", warning));
            }
            output.push('\n');
        }

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn generate(&self, report: &QualityReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }

    pub fn save_report(&self, content: &str, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            ResumeScoreError::OutputFormatting(format!(
                "Failed to write report to {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Shorten a line to `max` graphemes, appending an ellipsis when cut.
pub fn truncate_line(line: &str, max: usize) -> String {
    let graphemes: Vec<&str> = line.graphemes(true).collect();
    if graphemes.len() <= max {
        line.to_string()
    } else {
        format!("{}…", graphemes[..max].concat())
    }
}
