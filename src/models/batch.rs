//! Batch (student cohort) model.
//!
//! A batch is the scheduling unit: a cohort of students sharing a
//! course, year, and semester. Batches are administrative input and
//! are never mutated by the engine.

use serde::{Deserialize, Serialize};

/// A student cohort scheduled as a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    /// Unique batch identifier.
    pub id: String,
    /// Human-readable name (e.g., "CSE-A 2024").
    pub name: String,
    /// Parent course identifier.
    pub course_id: String,
    /// Year of study.
    pub year: u8,
    /// Current semester; only subjects of the same semester are scheduled.
    pub semester: u8,
    /// Headcount, checked against classroom capacity.
    pub strength: u32,
}

impl Batch {
    /// Creates a batch.
    pub fn new(id: impl Into<String>, semester: u8, strength: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            course_id: String::new(),
            year: 1,
            semester,
            strength,
        }
    }

    /// Sets the batch name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the parent course.
    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = course_id.into();
        self
    }

    /// Sets the year of study.
    pub fn with_year(mut self, year: u8) -> Self {
        self.year = year;
        self
    }
}
