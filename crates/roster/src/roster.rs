//! In-memory roster of student records.
//!
//! This module provides the [`Roster`] collection: insertion with validation,
//! lookup by id, in-place updates, filtering, and aggregation. Everything is a
//! linear scan over an insertion-ordered `Vec`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::RosterError;
use crate::outcome::Outcome;
use crate::student::Student;

/// Inclusive ranges a record must fall within to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Youngest accepted age.
    pub min_age: u32,
    /// Oldest accepted age.
    pub max_age: u32,
    /// Lowest accepted gpa.
    pub min_gpa: f64,
    /// Highest accepted gpa.
    pub max_gpa: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_age: 15,
            max_age: 80,
            min_gpa: 0.0,
            max_gpa: 10.0,
        }
    }
}

impl Limits {
    /// Check whether `age` is within the accepted range.
    #[must_use]
    pub fn accepts_age(&self, age: u32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }

    /// Check whether `gpa` is within the accepted range. NaN never is.
    #[must_use]
    pub fn accepts_gpa(&self, gpa: f64) -> bool {
        (self.min_gpa..=self.max_gpa).contains(&gpa)
    }
}

/// The owning collection of student records.
///
/// Students keep their insertion order. The roster is the only way to
/// mutate them once added, and it never removes a record.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Stored students, in insertion order.
    students: Vec<Student>,
    /// Validation ranges.
    limits: Limits,
}

impl Roster {
    /// Create an empty roster with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty roster that validates against `limits`.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            students: Vec::new(),
            limits,
        }
    }

    /// The limits this roster validates against.
    #[must_use]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Add a student.
    ///
    /// Checks run in a fixed order and the first failure wins: duplicate id,
    /// then age, then gpa. A rejected student is dropped and the roster is
    /// left untouched.
    pub fn add(&mut self, student: Student) -> Outcome<&Student> {
        if self.position(student.id).is_some() {
            warn!("Rejected student {}: id already exists", student.id);
            return Outcome::failure(RosterError::DuplicateId);
        }

        if !self.limits.accepts_age(student.age) {
            warn!("Rejected student {}: age {} out of range", student.id, student.age);
            return Outcome::failure(RosterError::InvalidAge);
        }

        if !self.limits.accepts_gpa(student.gpa) {
            warn!("Rejected student {}: gpa {} out of range", student.id, student.gpa);
            return Outcome::failure(RosterError::InvalidAverage);
        }

        info!("Added student {} ({})", student.id, student.name);
        self.students.push(student);
        let stored = &self.students[self.students.len() - 1];
        Outcome::success("Student added", stored)
    }

    /// All students in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Student] {
        &self.students
    }

    /// Look up a student by id.
    pub fn find_by_id(&self, id: i64) -> Outcome<&Student> {
        match self.students.iter().find(|s| s.id == id) {
            Some(student) => {
                debug!("Found student {}", id);
                Outcome::success("Student found", student)
            }
            None => {
                debug!("Student {} not found", id);
                Outcome::failure(RosterError::NotFound)
            }
        }
    }

    /// Replace a student's gpa.
    ///
    /// The new value is range-checked before the id is looked up, so an
    /// out-of-range gpa reports "Invalid average" even for an unknown id.
    pub fn update_gpa(&mut self, id: i64, gpa: f64) -> Outcome<&Student> {
        if !self.limits.accepts_gpa(gpa) {
            warn!("Rejected gpa update for {}: {} out of range", id, gpa);
            return Outcome::failure(RosterError::InvalidAverage);
        }

        match self.find_mut(id) {
            Some(student) => {
                debug!("Updated gpa of {} from {} to {}", id, student.gpa, gpa);
                student.gpa = gpa;
                Outcome::success("Average updated", &*student)
            }
            None => Outcome::failure(RosterError::NotFound),
        }
    }

    /// Mark a student as active or inactive.
    pub fn set_active(&mut self, id: i64, active: bool) -> Outcome<&Student> {
        match self.find_mut(id) {
            Some(student) => {
                debug!("Set student {} active={}", id, active);
                student.active = active;
                Outcome::success("Status updated", &*student)
            }
            None => Outcome::failure(RosterError::NotFound),
        }
    }

    /// Active students, in insertion order.
    #[must_use]
    pub fn list_active(&self) -> Vec<&Student> {
        self.students.iter().filter(|s| s.active).collect()
    }

    /// Mean gpa across every stored student, or `0.0` for an empty roster.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn overall_average(&self) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.students.iter().map(|s| s.gpa).sum();
        sum / self.students.len() as f64
    }

    /// Number of stored students.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Check if the roster holds no students.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Get roster statistics.
    #[must_use]
    pub fn stats(&self) -> RosterStats {
        let active = self.students.iter().filter(|s| s.active).count();
        RosterStats {
            total: self.students.len(),
            active,
            inactive: self.students.len() - active,
            overall_average: self.overall_average(),
        }
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.students.iter().position(|s| s.id == id)
    }

    fn find_mut(&mut self, id: i64) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }
}

/// Statistics about the roster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RosterStats {
    /// Total number of students stored.
    pub total: usize,
    /// Students marked active.
    pub active: usize,
    /// Students marked inactive.
    pub inactive: usize,
    /// Mean gpa across all students.
    pub overall_average: f64,
}
