//! Domain layer for the student roster
//!
//! Architecture: Domain Model - entities that cannot exist in an invalid state
//! - Student and Group validate their fields on construction
//! - A single error type carries every failure to the caller

pub mod errors;
pub mod group;
pub mod student;

// Re-export main domain types for convenience
pub use errors::{RosterError, RosterResult};
pub use group::Group;
pub use student::Student;
