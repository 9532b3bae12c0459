//! Roster definition loading
//!
//! Architecture: Anti-Corruption Layer - raw YAML records stay as plain strings here
//! - Field rules are applied only when the roster is built from the definition
//! - The built-in definition is the sample roster of two groups

use crate::domain::errors::{RosterError, RosterResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Supported definition format versions
const SUPPORTED_VERSIONS: &[&str] = &["1.0"];

/// Roster definition: groups of raw student records plus lookup settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterConfig {
    /// Definition format version
    pub version: String,
    /// Student id looked up when the roster is shown
    #[serde(default = "default_search_id")]
    pub search_id: String,
    /// Upper bound for birth dates; the local calendar date when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
    /// Groups in display order
    #[serde(default)]
    pub groups: Vec<GroupSpec>,
}

/// Raw group record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupSpec {
    pub name: String,
    #[serde(default)]
    pub students: Vec<StudentSpec>,
}

/// Raw student record, validated when the roster is built
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentSpec {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub student_id: String,
}

impl StudentSpec {
    pub fn new(first_name: &str, last_name: &str, birth_date: &str, student_id: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birth_date: birth_date.to_string(),
            student_id: student_id.to_string(),
        }
    }
}

impl RosterConfig {
    /// Load a roster definition from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            RosterError::config(format!(
                "Failed to read roster file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            RosterError::config(format!(
                "Failed to parse roster file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), groups = config.groups.len(), "loaded roster definition");
        Ok(config)
    }

    /// Load a roster definition from string content
    pub fn load_from_str(content: &str) -> RosterResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| RosterError::config(format!("Failed to parse roster: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// The sample roster: groups "402" and "422"
    pub fn with_defaults() -> Self {
        Self {
            version: "1.0".to_string(),
            search_id: default_search_id(),
            reference_date: None,
            groups: vec![
                GroupSpec {
                    name: "402".to_string(),
                    students: vec![
                        StudentSpec::new("John", "Doe", "2000-05-15", "123456"),
                        StudentSpec::new("Jane", "Smith", "1999-11-20", "654321"),
                        StudentSpec::new("Alice", "Johnson", "2001-02-10", "234567"),
                    ],
                },
                GroupSpec {
                    name: "422".to_string(),
                    students: vec![
                        StudentSpec::new("Bob", "Brown", "1998-07-30", "345678"),
                        StudentSpec::new("Charlie", "Davis", "2000-08-25", "456789"),
                    ],
                },
            ],
        }
    }

    /// Check the definition format; field values are checked when the roster is built
    pub fn validate(&self) -> RosterResult<()> {
        if !SUPPORTED_VERSIONS.contains(&self.version.as_str()) {
            return Err(RosterError::config(format!(
                "Unsupported roster version: {}. Supported versions: {}",
                self.version,
                SUPPORTED_VERSIONS.join(", ")
            )));
        }
        Ok(())
    }

    /// Serialize the definition back to YAML
    pub fn to_yaml(&self) -> RosterResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| RosterError::config(format!("Failed to serialize roster: {e}")))
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn default_search_id() -> String {
    "345678".to_string()
}
