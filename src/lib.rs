//! Student Roster - validated students grouped into classes
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Pure domain entities and validation rules
//! - Roster definitions loaded from YAML and rendered by report formatters
//! - Lookup and sorting operate on owned, ordered collections

pub mod config;
pub mod domain;
pub mod report;
pub mod validation;

// Re-export main types for convenient access
pub use domain::{Group, RosterError, RosterResult, Student};

pub use config::{GroupSpec, RosterConfig, StudentSpec};

pub use report::{format_error, OutputFormat, ReportFormatter, ReportOptions};

use chrono::NaiveDate;

/// Groups built from a roster definition, in definition order
#[derive(Debug, Clone, Default)]
pub struct Roster {
    groups: Vec<Group>,
}

impl Roster {
    /// Create a roster from already-built groups
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Build every group and student in the definition
    ///
    /// Uses the definition's reference date, or today's local date when none is set.
    pub fn from_config(config: &RosterConfig) -> RosterResult<Self> {
        let today = config.reference_date.unwrap_or_else(validation::local_today);
        Self::from_config_at(config, today)
    }

    /// Build the roster with an explicit upper bound for birth dates
    ///
    /// Every student record is checked first, in definition order, then every group
    /// name. Stops at the first invalid value; no roster is returned in that case.
    pub fn from_config_at(config: &RosterConfig, today: NaiveDate) -> RosterResult<Self> {
        let mut students = Vec::with_capacity(config.groups.len());
        for spec in &config.groups {
            let built = spec
                .students
                .iter()
                .map(|record| {
                    Student::new(
                        &record.first_name,
                        &record.last_name,
                        &record.birth_date,
                        &record.student_id,
                        today,
                    )
                    .map_err(|e| {
                        tracing::warn!(student_id = %record.student_id, "rejected student: {}", e);
                        e
                    })
                })
                .collect::<RosterResult<Vec<_>>>()?;
            students.push(built);
        }

        let mut groups = config
            .groups
            .iter()
            .map(|spec| {
                Group::new(&spec.name).map_err(|e| {
                    tracing::warn!(group = %spec.name, "rejected group: {}", e);
                    e
                })
            })
            .collect::<RosterResult<Vec<_>>>()?;

        for (group, members) in groups.iter_mut().zip(students) {
            for student in members {
                group.add_student(student);
            }
        }

        tracing::debug!(groups = groups.len(), %today, "built roster");
        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Add a group after the existing ones
    pub fn add_group(&mut self, group: Group) {
        self.groups.push(group);
    }

    /// First student with this id, scanning groups in order
    pub fn find_student_by_id(&self, student_id: &str) -> Option<&Student> {
        find_student_by_id(&self.groups, student_id)
    }

    /// Sort the students of every group
    pub fn sort_all(&mut self) {
        for group in &mut self.groups {
            group.sort_students();
        }
    }
}

/// Linear scan over groups and their students for an exact id match
pub fn find_student_by_id<'a>(groups: &'a [Group], student_id: &str) -> Option<&'a Student> {
    let found = groups
        .iter()
        .flat_map(|group| group.students())
        .find(|student| student.student_id() == student_id);

    tracing::debug!(%student_id, found = found.is_some(), "student lookup");
    found
}
