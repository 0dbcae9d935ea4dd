use clap::ValueEnum;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use thiserror::Error;

/// A roster line that passed every field check.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRecord {
    pub department: String,
    pub course_number: i32,
    pub section: String,
    pub credit_hours: u64,
    pub first_name: String,
    pub last_name: String,
    pub grade_value: f64,
}

/// Why a single roster line was rejected. The messages are the ones printed
/// in the error log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("Invalid number of items on the line!")]
    FieldCount,

    #[error("Invalid department ID!")]
    Department,

    #[error("Invalid course number! Course number must be 3 digits!")]
    CourseNumberLength,

    #[error("Invalid course number! Must be integer!")]
    CourseNumberNotInteger,

    #[error("Invalid class section!")]
    Section,

    #[error("Number of credits must be non-negative!")]
    NegativeCredits,

    #[error("Invalid entry for number of credits!")]
    CreditsNotInteger,

    #[error("Invalid last name!")]
    LastName,

    #[error("Invalid first name!")]
    FirstName,

    #[error("Invalid grade letter!")]
    GradeLetter,
}

impl Serialize for LineError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Empty,
    Valid(CourseRecord),
    Invalid(Vec<LineError>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEntry {
    #[serde(rename = "line")]
    pub line_number: usize,
    pub messages: Vec<LineError>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Course {
    pub credit_hours: u64,
    pub grade_value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub courses: Vec<Course>,
}

/// (first name, last name)
pub type StudentKey = (String, String);

pub type StudentTable = HashMap<StudentKey, Student>;

/// One ranked row of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub first_name: String,
    pub last_name: String,
    #[serde(serialize_with = "serialize_gpa")]
    pub gpa: f64,
    pub credits: u64,
}

impl StudentSummary {
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.first_name, self.last_name)
    }

    pub fn gpa_display(&self) -> String {
        format!("{:.2}", self.gpa)
    }
}

fn serialize_gpa<S: Serializer>(gpa: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{:.2}", gpa))
}

/// How the ranked students are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub lines_read: usize,
    pub accepted_records: usize,
    pub students: Vec<StudentSummary>,
    pub errors: Vec<ErrorEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedReport {
    /// Written to stdout.
    pub body: String,
    /// Written to stderr; empty when the body already carries the errors.
    pub error_log: String,
}
