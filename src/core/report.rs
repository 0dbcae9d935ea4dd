//! Report rendering: the padded console table, CSV, JSON, and the error log.

use crate::domain::model::{ErrorEntry, StudentSummary};
use crate::utils::error::{GpaError, Result};
use serde::Serialize;

pub const DEFAULT_NAME_MARGIN: usize = 4;
const GPA_COLUMN_WIDTH: usize = 8;
const NAME_HEADER: &str = "NAME";

pub fn render_table(students: &[StudentSummary], name_margin: usize) -> String {
    let longest_name = students
        .iter()
        .map(|s| s.display_name().chars().count())
        .fold(NAME_HEADER.len(), usize::max);
    let name_width = longest_name + name_margin;

    let row = |name: &str, gpa: &str, credits: &str| {
        format!("{:<name_width$}{:<GPA_COLUMN_WIDTH$}{}\n", name, gpa, credits)
    };

    let mut out = row(NAME_HEADER, "GPA", "CREDITS");
    for student in students {
        out.push_str(&row(
            &student.display_name(),
            &student.gpa_display(),
            &student.credits.to_string(),
        ));
    }
    out
}

/// Blank line, `Errors:` header, then one line per message. Empty when there
/// is nothing to report.
pub fn render_error_log(errors: &[ErrorEntry]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut out = String::from("\nErrors:\n");
    for entry in errors {
        for message in &entry.messages {
            out.push_str(&format!(
                "Error with line {}: {}\n",
                entry.line_number, message
            ));
        }
    }
    out
}

pub fn render_csv(students: &[StudentSummary]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for student in students {
        writer.serialize(student)?;
    }
    let data = writer.into_inner().map_err(|e| GpaError::ProcessingError {
        message: format!("Failed to flush CSV output: {}", e),
    })?;
    Ok(String::from_utf8(data)?)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    students: &'a [StudentSummary],
    errors: &'a [ErrorEntry],
}

pub fn render_json(students: &[StudentSummary], errors: &[ErrorEntry]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&JsonReport { students, errors })?;
    json.push('\n');
    Ok(json)
}
