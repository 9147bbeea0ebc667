//! Input validation for generation runs.
//!
//! Structural integrity checks on the reference records before
//! scheduling. Detects:
//! - Duplicate IDs within each record family
//! - Subjects with zero credits (nothing to schedule)
//! - Batches with zero strength
//! - Classrooms with zero capacity
//!
//! Validation is an advisory pre-flight for callers. The generator
//! itself never fails on bad input — it degrades to conflicts.

use std::collections::HashSet;

use crate::models::{Batch, Classroom, Faculty, Subject};

/// Pre-flight outcome: `Ok(())` or every issue found, never just the first.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A single detected integrity issue.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Issue category.
    pub kind: ValidationErrorKind,
    /// What is wrong, naming the offending record.
    pub message: String,
}

/// Integrity issue categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records in the same family share an ID.
    DuplicateId,
    /// A subject has zero credits.
    ZeroCredits,
    /// A batch has zero strength.
    ZeroStrength,
    /// A classroom has zero capacity.
    ZeroCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks the reference records before a generation run.
///
/// All four record families are scanned and every issue is collected,
/// so one call surfaces the full cleanup list.
pub fn validate_input(
    batches: &[Batch],
    subjects: &[Subject],
    faculty: &[Faculty],
    classrooms: &[Classroom],
) -> ValidationResult {
    let mut errors = Vec::new();

    check_unique_ids(batches.iter().map(|b| b.id.as_str()), "batch", &mut errors);
    check_unique_ids(
        subjects.iter().map(|s| s.id.as_str()),
        "subject",
        &mut errors,
    );
    check_unique_ids(
        faculty.iter().map(|f| f.id.as_str()),
        "faculty",
        &mut errors,
    );
    check_unique_ids(
        classrooms.iter().map(|c| c.id.as_str()),
        "classroom",
        &mut errors,
    );

    for subject in subjects {
        if subject.credits == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCredits,
                format!("Subject '{}' has zero credits", subject.id),
            ));
        }
    }

    for batch in batches {
        if batch.strength == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroStrength,
                format!("Batch '{}' has zero strength", batch.id),
            ));
        }
    }

    for room in classrooms {
        if room.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Classroom '{}' has zero capacity", room.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_unique_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    family: &str,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {family} ID: {id}"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoomKind, SubjectKind};

    fn sample() -> (Vec<Batch>, Vec<Subject>, Vec<Faculty>, Vec<Classroom>) {
        (
            vec![Batch::new("B1", 5, 40)],
            vec![Subject::new("S1", "OS", SubjectKind::Theory, "D1", 5, 3)],
            vec![Faculty::new("F1", "D1")],
            vec![Classroom::new("R1", RoomKind::LectureHall, 60)],
        )
    }

    #[test]
    fn test_valid_input() {
        let (b, s, f, c) = sample();
        assert!(validate_input(&b, &s, &f, &c).is_ok());
    }

    #[test]
    fn test_duplicate_batch_id() {
        let (mut b, s, f, c) = sample();
        b.push(Batch::new("B1", 5, 30));

        let errors = validate_input(&b, &s, &f, &c).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("batch")));
    }

    #[test]
    fn test_zero_credits() {
        let (b, mut s, f, c) = sample();
        s.push(Subject::new("S2", "Seminar", SubjectKind::Theory, "D1", 5, 0));

        let errors = validate_input(&b, &s, &f, &c).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroCredits));
    }

    #[test]
    fn test_zero_strength_and_capacity() {
        let b = vec![Batch::new("B1", 5, 0)];
        let c = vec![Classroom::new("R1", RoomKind::Lab, 0)];

        let errors = validate_input(&b, &[], &[], &c).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroStrength));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroCapacity));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let b = vec![Batch::new("B1", 5, 0), Batch::new("B1", 5, 40)];
        let errors = validate_input(&b, &[], &[], &[]).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
