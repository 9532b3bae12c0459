//! Student entity
//!
//! Architecture: Always-Valid Entity - fields are private and only set by a validating constructor

use crate::domain::errors::RosterResult;
use crate::validation;
use chrono::NaiveDate;
use serde::Serialize;

/// A student whose four fields passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
    student_id: String,
}

impl Student {
    /// Create a new student, checking first name, last name, birth date and id in that order
    ///
    /// The first failing rule aborts construction and its error is returned.
    /// `today` is the upper bound for the birth date.
    pub fn new(
        first_name: &str,
        last_name: &str,
        birth_date: &str,
        student_id: &str,
        today: NaiveDate,
    ) -> RosterResult<Self> {
        let first_name = validation::validate_name(first_name, "First name")?;
        let last_name = validation::validate_name(last_name, "Last name")?;
        let birth_date = validation::validate_date(birth_date, today)?;
        let student_id = validation::validate_student_id(student_id)?;

        tracing::debug!(%student_id, "created student {} {}", first_name, last_name);

        Ok(Self { first_name, last_name, birth_date, student_id })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// "First Last", as printed in listings
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RosterError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_student_creation() {
        let student = Student::new("John", "Doe", "2000-05-15", "123456", today()).unwrap();

        assert_eq!(student.first_name(), "John");
        assert_eq!(student.last_name(), "Doe");
        assert_eq!(student.birth_date(), NaiveDate::from_ymd_opt(2000, 5, 15).unwrap());
        assert_eq!(student.student_id(), "123456");
        assert_eq!(student.full_name(), "John Doe");
    }

    #[test]
    fn test_lowercase_first_name_rejected() {
        let err = Student::new("john", "Doe", "2000-05-15", "123456", today()).unwrap_err();
        assert!(matches!(err, RosterError::InvalidFormat { .. }));
        assert_eq!(err.to_string(), "First name is invalid");
    }

    #[test]
    fn test_first_failure_wins() {
        // Every field is bad; the first name is checked first
        let err = Student::new("x", "y", "nope", "1", today()).unwrap_err();
        assert_eq!(err.to_string(), "First name is invalid");

        let err = Student::new("Xavier", "y", "nope", "1", today()).unwrap_err();
        assert_eq!(err.to_string(), "Last name is invalid");

        let err = Student::new("Xavier", "Young", "nope", "1", today()).unwrap_err();
        assert_eq!(err.to_string(), "invalid date");

        let err = Student::new("Xavier", "Young", "1850-01-01", "1", today()).unwrap_err();
        assert!(matches!(err, RosterError::OutOfRange { .. }));

        let err = Student::new("Xavier", "Young", "1990-01-01", "1", today()).unwrap_err();
        assert_eq!(err.to_string(), "Student ID is invalid");
    }
}
