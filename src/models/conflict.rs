//! Conflict model.
//!
//! A conflict records an inability to satisfy a scheduling requirement.
//! Conflicts are advisory: generation always completes and returns
//! whatever was scheduled alongside the conflict list.

use serde::{Deserialize, Serialize};

use super::{Batch, Subject};

/// Conflict classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    FacultyClash,
    ClassroomClash,
    BatchClash,
    ConstraintViolation,
}

/// Informational severity classification. Never an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A recorded scheduling failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    /// Conflict classification.
    pub kind: ConflictKind,
    /// Human-readable description.
    pub description: String,
    /// Informational severity.
    pub severity: Severity,
    /// IDs of entries involved, when any exist.
    pub affected_entries: Vec<String>,
    /// Advisory remediation hints; not consumed elsewhere.
    pub suggestions: Vec<String>,
}

impl Conflict {
    /// No faculty in the subject's department can teach it.
    pub fn no_faculty(subject: &Subject) -> Self {
        Self {
            kind: ConflictKind::ConstraintViolation,
            description: format!("No suitable faculty found for {}", subject.name),
            severity: Severity::High,
            affected_entries: Vec::new(),
            suggestions: vec![
                "Assign faculty to this subject".into(),
                "Hire additional faculty".into(),
            ],
        }
    }

    /// The slot scan found no free slot for the subject/batch pair.
    pub fn no_slot(subject: &Subject, batch: &Batch) -> Self {
        Self {
            kind: ConflictKind::ConstraintViolation,
            description: format!(
                "Cannot find available time slot for {} - {}",
                subject.name, batch.name
            ),
            severity: Severity::Medium,
            affected_entries: Vec::new(),
            suggestions: vec![
                "Adjust faculty schedule".into(),
                "Add more time slots".into(),
                "Reduce subject hours".into(),
            ],
        }
    }

    /// No compatible classroom was free at the chosen slot.
    pub fn no_classroom(subject: &Subject, start_time: &str) -> Self {
        Self {
            kind: ConflictKind::ClassroomClash,
            description: format!(
                "No suitable classroom available for {} at {}",
                subject.name, start_time
            ),
            severity: Severity::Medium,
            affected_entries: Vec::new(),
            suggestions: vec![
                "Add more classrooms".into(),
                "Reschedule other classes".into(),
            ],
        }
    }
}
