//! Core student record type for roster.
//!
//! This module defines the value record held by a [`Roster`](crate::Roster).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single student's academic record.
///
/// Construction performs no validation; range checks happen when the record
/// is handed to [`Roster::add`](crate::Roster::add).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Identifier, unique within a roster.
    pub id: i64,

    /// Full name.
    pub name: String,

    /// Age in years.
    pub age: u32,

    /// Field of study.
    pub program: String,

    /// Whether the student is currently enrolled.
    #[serde(default = "default_active")]
    pub active: bool,

    /// Grade point average.
    pub gpa: f64,
}

fn default_active() -> bool {
    true
}

impl Student {
    /// Create a new, active student.
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        age: u32,
        program: impl Into<String>,
        gpa: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            program: program.into(),
            active: default_active(),
            gpa,
        }
    }

    /// Set the initial enrollment status.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}, {}) gpa {} [{}]",
            self.id,
            self.name,
            self.age,
            self.program,
            self.gpa,
            if self.active { "active" } else { "inactive" }
        )
    }
}
