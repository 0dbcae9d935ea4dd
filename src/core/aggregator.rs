//! Groups accepted course records by student and ranks students by GPA.

use crate::domain::model::{Course, CourseRecord, Student, StudentSummary, StudentTable};
use std::cmp::Ordering;

pub fn aggregate<I>(records: I) -> StudentTable
where
    I: IntoIterator<Item = CourseRecord>,
{
    let mut table = StudentTable::new();

    for record in records {
        let course = Course {
            credit_hours: record.credit_hours,
            grade_value: record.grade_value,
        };
        table
            .entry((record.first_name.clone(), record.last_name.clone()))
            .or_insert_with(|| Student {
                first_name: record.first_name,
                last_name: record.last_name,
                courses: Vec::new(),
            })
            .courses
            .push(course);
    }

    table
}

impl Student {
    pub fn total_credits(&self) -> u64 {
        self.courses
            .iter()
            .fold(0u64, |total, c| total.saturating_add(c.credit_hours))
    }

    /// Credit-weighted GPA, or the plain mean of grade values when every
    /// course is worth zero credits.
    pub fn gpa(&self) -> f64 {
        let total_credits = self.total_credits();
        let raw = if total_credits > 0 {
            let points: f64 = self
                .courses
                .iter()
                .map(|c| c.credit_hours as f64 * c.grade_value)
                .sum();
            points / total_credits as f64
        } else {
            let sum: f64 = self.courses.iter().map(|c| c.grade_value).sum();
            sum / self.courses.len().max(1) as f64
        };
        round_half_even(raw, 2)
    }

    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gpa: self.gpa(),
            credits: self.total_credits(),
        }
    }
}

/// Rounds the exact binary value of `value`, sending exact ties to the even
/// digit. `3.675` is stored just below the tie and rounds to `3.67`.
pub fn round_half_even(value: f64, places: usize) -> f64 {
    // std float formatting rounds the exact value with ties-to-even.
    format!("{:.*}", places, value)
        .parse()
        .unwrap_or(value)
}

/// Highest GPA first, then last name, then first name.
pub fn rank(table: &StudentTable) -> Vec<StudentSummary> {
    let mut students: Vec<StudentSummary> = table.values().map(Student::summary).collect();
    students.sort_by(compare_rank);
    students
}

fn compare_rank(a: &StudentSummary, b: &StudentSummary) -> Ordering {
    b.gpa
        .total_cmp(&a.gpa)
        .then_with(|| a.last_name.cmp(&b.last_name))
        .then_with(|| a.first_name.cmp(&b.first_name))
}
