//! Subject model.
//!
//! A subject's `credits` value is an integer count of required weekly
//! 60-minute sessions, not a real academic-credit-hour conversion.

use serde::{Deserialize, Serialize};

/// Subject delivery classification.
///
/// Drives classroom compatibility: practical subjects require a lab,
/// theory subjects require a non-lab room, tutorials accept any room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Theory,
    Practical,
    Tutorial,
}

/// A subject taught in a given semester.
///
/// A subject is only scheduled for batches whose semester equals the
/// subject's semester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Human-readable name, matched against faculty specializations.
    pub name: String,
    /// Subject code (e.g., "CS501").
    pub code: String,
    /// Required weekly sessions (>= 1).
    pub credits: u32,
    /// Delivery classification.
    pub kind: SubjectKind,
    /// Owning department; faculty are drawn from the same department.
    pub department_id: String,
    /// Semester in which this subject is taught.
    pub semester: u8,
}

impl Subject {
    /// Creates a subject.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: SubjectKind,
        department_id: impl Into<String>,
        semester: u8,
        credits: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: String::new(),
            credits,
            kind,
            department_id: department_id.into(),
            semester,
        }
    }

    /// Sets the subject code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }
}
