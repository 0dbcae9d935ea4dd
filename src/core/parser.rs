//! Roster line parsing and validation.
//!
//! A line is `DEPT COURSENUM SECTION CREDITS FIRSTNAME LASTNAME GRADE`,
//! separated by single spaces. Once the field count is right every field
//! check runs, so a line reports all of its problems at once.

use crate::domain::model::{CourseRecord, ErrorEntry, LineError, ParsedLine};

const FIELD_COUNT: usize = 7;

const GRADE_TABLE: [(&str, f64); 13] = [
    ("A+", 4.00),
    ("A", 4.00),
    ("A-", 3.67),
    ("B+", 3.33),
    ("B", 3.00),
    ("B-", 2.67),
    ("C+", 2.33),
    ("C", 2.00),
    ("C-", 1.67),
    ("D+", 1.33),
    ("D", 1.00),
    ("D-", 0.67),
    ("F", 0.00),
];

/// Grade points for a letter grade. Exact, case-sensitive match.
pub fn grade_value(token: &str) -> Option<f64> {
    GRADE_TABLE
        .iter()
        .find(|(letter, _)| *letter == token)
        .map(|(_, value)| *value)
}

pub fn parse_line(line: &str) -> ParsedLine {
    if line.is_empty() {
        return ParsedLine::Empty;
    }

    let fields: Vec<&str> = line.split(' ').collect();
    let [department, course_number, section, credits, first_name, last_name, grade] =
        match <[&str; FIELD_COUNT]>::try_from(fields) {
            Ok(fields) => fields,
            Err(_) => return ParsedLine::Invalid(vec![LineError::FieldCount]),
        };

    let mut errors = Vec::new();

    if !department
        .chars()
        .all(|c| c.is_alphabetic() && c.is_uppercase())
    {
        errors.push(LineError::Department);
    }

    if course_number.chars().count() != 3 {
        errors.push(LineError::CourseNumberLength);
    }
    let parsed_course_number = course_number.parse::<i32>().ok();
    if parsed_course_number.is_none() {
        errors.push(LineError::CourseNumberNotInteger);
    }

    if !is_section(section) {
        errors.push(LineError::Section);
    }

    let parsed_credits = match parse_credits(credits) {
        Ok(hours) => Some(hours),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    if !last_name.chars().all(char::is_alphabetic) {
        errors.push(LineError::LastName);
    }
    if !first_name.chars().all(char::is_alphabetic) {
        errors.push(LineError::FirstName);
    }

    let parsed_grade = grade_value(grade);
    if parsed_grade.is_none() {
        errors.push(LineError::GradeLetter);
    }

    match (parsed_course_number, parsed_credits, parsed_grade) {
        (Some(course_number), Some(credit_hours), Some(grade_value)) if errors.is_empty() => {
            ParsedLine::Valid(CourseRecord {
                department: department.to_string(),
                course_number,
                section: section.to_string(),
                credit_hours,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                grade_value,
            })
        }
        _ => ParsedLine::Invalid(errors),
    }
}

/// Parses every line, numbering from 1. Empty lines still take a number.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> (Vec<CourseRecord>, Vec<ErrorEntry>) {
    let mut records = Vec::new();
    let mut errors = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        match parse_line(line.as_ref()) {
            ParsedLine::Empty => {}
            ParsedLine::Valid(record) => records.push(record),
            ParsedLine::Invalid(messages) => {
                tracing::debug!("Rejected line {}: {:?}", line_number, messages);
                errors.push(ErrorEntry {
                    line_number,
                    messages,
                });
            }
        }
    }

    (records, errors)
}

/// Any signed run of ASCII digits is an integer, whatever its size. A minus
/// sign in front of a non-zero value is negative; a positive value wider than
/// `u64` cannot be stored and counts as an invalid entry.
fn parse_credits(token: &str) -> Result<u64, LineError> {
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LineError::CreditsNotInteger);
    }
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(LineError::NegativeCredits);
    }

    digits
        .parse::<u64>()
        .map_err(|_| LineError::CreditsNotInteger)
}

fn is_section(section: &str) -> bool {
    let mut chars = section.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_alphabetic() && c.is_uppercase(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_for(line: &str) -> Vec<LineError> {
        match parse_line(line) {
            ParsedLine::Invalid(errors) => errors,
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_line_keeps_fields() {
        let record = match parse_line("CS 101 A 3 John Smith A-") {
            ParsedLine::Valid(record) => record,
            other => panic!("expected Valid, got {:?}", other),
        };
        assert_eq!(record.department, "CS");
        assert_eq!(record.course_number, 101);
        assert_eq!(record.section, "A");
        assert_eq!(record.credit_hours, 3);
        assert_eq!(record.first_name, "John");
        assert_eq!(record.last_name, "Smith");
        assert_eq!(record.grade_value, 3.67);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(parse_line(""), ParsedLine::Empty);
    }

    #[test]
    fn test_whitespace_only_line_is_not_empty() {
        assert_eq!(errors_for(" "), vec![LineError::FieldCount]);
    }

    #[test]
    fn test_wrong_field_count_stops_checks() {
        assert_eq!(errors_for("cs 1 a 3 John"), vec![LineError::FieldCount]);
        assert_eq!(
            errors_for("CS 101 A 3 John Smith A- extra"),
            vec![LineError::FieldCount]
        );
    }

    #[test]
    fn test_double_space_changes_field_count() {
        assert_eq!(
            errors_for("CS  101 A 3 John Smith A-"),
            vec![LineError::FieldCount]
        );
    }

    #[test]
    fn test_department() {
        assert_eq!(errors_for("Cs 101 A 3 John Smith A"), vec![LineError::Department]);
        assert_eq!(errors_for("C5 101 A 3 John Smith A"), vec![LineError::Department]);
    }

    #[test]
    fn test_course_number_short_but_numeric() {
        assert_eq!(
            errors_for("CS 1 A 3 John Smith A-"),
            vec![LineError::CourseNumberLength]
        );
    }

    #[test]
    fn test_course_number_short_and_not_numeric() {
        assert_eq!(
            errors_for("CS 1X A 3 John Smith A-"),
            vec![
                LineError::CourseNumberLength,
                LineError::CourseNumberNotInteger
            ]
        );
    }

    #[test]
    fn test_course_number_right_length_not_numeric() {
        assert_eq!(
            errors_for("CS 10X A 3 John Smith A-"),
            vec![LineError::CourseNumberNotInteger]
        );
    }

    #[test]
    fn test_section() {
        for section in ["a", "AB", "1", "-"] {
            let line = format!("CS 101 {} 3 John Smith A", section);
            assert_eq!(errors_for(&line), vec![LineError::Section], "{}", section);
        }
    }

    #[test]
    fn test_credits() {
        assert_eq!(
            errors_for("CS 101 A -3 John Smith A"),
            vec![LineError::NegativeCredits]
        );
        assert_eq!(
            errors_for("CS 101 A three John Smith A"),
            vec![LineError::CreditsNotInteger]
        );
        assert_eq!(
            errors_for("CS 101 A 3.5 John Smith A"),
            vec![LineError::CreditsNotInteger]
        );
    }

    #[test]
    fn test_negative_credits_beyond_any_width() {
        assert_eq!(
            errors_for("CS 101 A -99999999999999999999 John Smith A"),
            vec![LineError::NegativeCredits]
        );
    }

    #[test]
    fn test_credits_wider_than_u32() {
        match parse_line("CS 101 A 99999999999 John Smith A") {
            ParsedLine::Valid(record) => assert_eq!(record.credit_hours, 99_999_999_999),
            other => panic!("expected Valid, got {:?}", other),
        }
    }

    #[test]
    fn test_credits_wider_than_u64() {
        assert_eq!(
            errors_for("CS 101 A 99999999999999999999 John Smith A"),
            vec![LineError::CreditsNotInteger]
        );
    }

    #[test]
    fn test_credit_signs() {
        assert!(matches!(
            parse_line("CS 101 A +3 John Smith A"),
            ParsedLine::Valid(CourseRecord { credit_hours: 3, .. })
        ));
        assert!(matches!(
            parse_line("CS 101 A -0 John Smith A"),
            ParsedLine::Valid(CourseRecord { credit_hours: 0, .. })
        ));
        assert_eq!(errors_for("CS 101 A - John Smith A"), vec![LineError::CreditsNotInteger]);
        assert_eq!(errors_for("CS 101 A 3- John Smith A"), vec![LineError::CreditsNotInteger]);
    }

    #[test]
    fn test_zero_credits_is_valid() {
        assert!(matches!(
            parse_line("CS 101 A 0 John Smith A"),
            ParsedLine::Valid(CourseRecord { credit_hours: 0, .. })
        ));
    }

    #[test]
    fn test_names() {
        assert_eq!(errors_for("CS 101 A 3 John Sm1th A"), vec![LineError::LastName]);
        assert_eq!(errors_for("CS 101 A 3 J0hn Smith A"), vec![LineError::FirstName]);
        assert_eq!(
            errors_for("CS 101 A 3 J0hn Sm1th A"),
            vec![LineError::LastName, LineError::FirstName]
        );
    }

    #[test]
    fn test_lowercase_names_are_valid() {
        assert!(matches!(
            parse_line("CS 101 A 3 john smith A"),
            ParsedLine::Valid(_)
        ));
    }

    #[test]
    fn test_empty_name_field_has_no_bad_character() {
        match parse_line("CS 101 A 3 John  A") {
            ParsedLine::Valid(record) => {
                assert_eq!(record.first_name, "John");
                assert_eq!(record.last_name, "");
            }
            other => panic!("expected Valid, got {:?}", other),
        }
    }

    #[test]
    fn test_grade_letter() {
        assert_eq!(errors_for("CS 101 A 3 John Smith a"), vec![LineError::GradeLetter]);
        assert_eq!(errors_for("CS 101 A 3 John Smith E"), vec![LineError::GradeLetter]);
        assert_eq!(errors_for("CS 101 A 3 John Smith F+"), vec![LineError::GradeLetter]);
    }

    #[test]
    fn test_all_field_errors_reported_together() {
        assert_eq!(
            errors_for("cs 1X ab -2 J0hn Sm1th Z"),
            vec![
                LineError::Department,
                LineError::CourseNumberLength,
                LineError::CourseNumberNotInteger,
                LineError::Section,
                LineError::NegativeCredits,
                LineError::LastName,
                LineError::FirstName,
                LineError::GradeLetter,
            ]
        );
    }

    #[test]
    fn test_parse_lines_numbers_blank_lines() {
        let lines = [
            "CS 101 A 3 John Smith A-",
            "",
            "CS 1X A 3 John Smith A-",
            "MATH 200 B 4 Jane Doe B+",
            "",
        ];
        let (records, errors) = parse_lines(&lines);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].last_name, "Doe");
        assert_eq!(
            errors,
            vec![ErrorEntry {
                line_number: 3,
                messages: vec![
                    LineError::CourseNumberLength,
                    LineError::CourseNumberNotInteger
                ],
            }]
        );
    }

    #[test]
    fn test_grade_table() {
        assert_eq!(grade_value("A+"), Some(4.0));
        assert_eq!(grade_value("A"), Some(4.0));
        assert_eq!(grade_value("B-"), Some(2.67));
        assert_eq!(grade_value("D-"), Some(0.67));
        assert_eq!(grade_value("F"), Some(0.0));
        assert_eq!(grade_value("F-"), None);
        assert_eq!(grade_value(""), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LineError::CourseNumberLength.to_string(),
            "Invalid course number! Course number must be 3 digits!"
        );
        assert_eq!(
            LineError::CreditsNotInteger.to_string(),
            "Invalid entry for number of credits!"
        );
    }
}
