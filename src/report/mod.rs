//! Report generation for roster listings
//!
//! Architecture: Anti-Corruption Layer - formatters turn domain objects into text
//! - Human output is the plain line format printed by the CLI
//! - JSON output carries the same data for programmatic consumers

use crate::domain::errors::{RosterError, RosterResult};
use crate::domain::{Group, Student};
use serde_json::Value as JsonValue;
use std::io::Write;

/// Supported output formats for roster reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per fact, as printed on a terminal
    Human,
    /// JSON document
    Json,
}

impl OutputFormat {
    /// Parse format from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get all available format names
    pub fn all_formats() -> &'static [&'static str] {
        &["human", "json"]
    }
}

/// Options for customizing report output
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Highlight group headings (human format only)
    pub use_colors: bool,
}

/// Formats lookup results and group listings
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    options: ReportOptions,
}

impl ReportFormatter {
    /// Create a new report formatter with options
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Format the lookup result followed by every group's students
    pub fn format_roster(
        &self,
        found: Option<&Student>,
        groups: &[Group],
        format: OutputFormat,
    ) -> RosterResult<String> {
        match format {
            OutputFormat::Human => Ok(self.format_human(found, groups)),
            OutputFormat::Json => self.format_json(found, groups),
        }
    }

    /// Format only the lookup line; empty when nothing was found
    pub fn format_found(&self, found: Option<&Student>) -> String {
        match found {
            Some(student) => format!("Found student: {}\n", student.full_name()),
            None => String::new(),
        }
    }

    /// Write a formatted report to a writer
    pub fn write_roster<W: Write>(
        &self,
        found: Option<&Student>,
        groups: &[Group],
        format: OutputFormat,
        mut writer: W,
    ) -> RosterResult<()> {
        let formatted = self.format_roster(found, groups, format)?;
        writer.write_all(formatted.as_bytes())?;
        Ok(())
    }

    fn format_human(&self, found: Option<&Student>, groups: &[Group]) -> String {
        let mut output = self.format_found(found);

        for group in groups {
            output.push_str(&self.heading(group));
            output.push('\n');
            for student in group.students() {
                output.push_str(&student.full_name());
                output.push('\n');
            }
        }

        output
    }

    fn format_json(&self, found: Option<&Student>, groups: &[Group]) -> RosterResult<String> {
        let json_groups: Vec<JsonValue> = groups
            .iter()
            .map(|group| {
                serde_json::json!({
                    "name": group.name(),
                    "students": group.students().iter().map(student_json).collect::<Vec<_>>(),
                })
            })
            .collect();

        let document = serde_json::json!({
            "found": found.map(student_json),
            "groups": json_groups,
        });

        serde_json::to_string_pretty(&document)
            .map_err(|e| RosterError::config(format!("Failed to serialize report: {e}")))
    }

    fn heading(&self, group: &Group) -> String {
        let text = format!("Students in {}:", group.name());
        if self.options.use_colors && cfg!(feature = "colors") {
            highlight(&text)
        } else {
            text
        }
    }
}

#[cfg(feature = "colors")]
fn highlight(text: &str) -> String {
    use colored::Colorize;
    text.bold().to_string()
}

#[cfg(not(feature = "colors"))]
fn highlight(text: &str) -> String {
    text.to_string()
}

/// Render an error the way the CLI prints it
pub fn format_error(error: &RosterError) -> String {
    format!("Error: {error}")
}

fn student_json(student: &Student) -> JsonValue {
    serde_json::json!({
        "first_name": student.first_name(),
        "last_name": student.last_name(),
        "birth_date": student.birth_date().format("%Y-%m-%d").to_string(),
        "student_id": student.student_id(),
    })
}
