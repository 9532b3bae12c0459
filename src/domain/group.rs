//! Group entity: a validated name and an ordered list of students

use crate::domain::errors::RosterResult;
use crate::domain::student::Student;
use crate::validation;
use serde::Serialize;

/// A class of students, kept in insertion order until sorted
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    name: String,
    students: Vec<Student>,
}

impl Group {
    /// Create an empty group after validating its name
    pub fn new(name: &str) -> RosterResult<Self> {
        let name = validation::validate_group_name(name)?;
        Ok(Self { name, students: Vec::new() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Students in their current order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Append a student; duplicates are allowed
    pub fn add_student(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Sort students by (first name, last name), byte-wise and stable
    pub fn sort_students(&mut self) {
        self.students.sort_by(|a, b| {
            a.first_name()
                .cmp(b.first_name())
                .then_with(|| a.last_name().cmp(b.last_name()))
        });
        tracing::debug!(group = %self.name, count = self.students.len(), "sorted students");
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
