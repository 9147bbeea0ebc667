//! Post-hoc timetable quality scoring.
//!
//! A deterministic, pure function of the final entry and conflict
//! sets: recomputing it yields identical results. Nothing in the
//! engine consumes the output — it is advisory for the caller.
//!
//! # Score
//! Starts at 100, minus 10 per conflict, plus 10 when every weekday's
//! entry count (all batches combined) lies in [2, 8], minus 5 per
//! faculty member with more than 20 assigned slots. Clamped to >= 0,
//! no upper clamp.
//!
//! # Efficiency
//! `entries / 30 * 100`, rounded. The denominator is the calendar
//! size, not scaled by batch count, so multi-batch runs can exceed 100.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::calendar::{self, WEEKDAYS};
use crate::models::{Conflict, TimetableEntry};

/// Slot-count threshold above which a faculty member counts as overloaded.
const OVERLOAD_THRESHOLD: usize = 20;

/// Per-weekday entry-count band considered balanced.
const BALANCED_RANGE: std::ops::RangeInclusive<usize> = 2..=8;

/// Quality assessment of a generated timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Quality score, clamped below at 0 (no upper clamp).
    pub score: i32,
    /// Conflicts recorded during generation.
    pub conflicts: Vec<Conflict>,
    /// Advisory remediation suggestions.
    pub suggestions: Vec<String>,
    /// Slot utilization percentage, rounded.
    pub efficiency: u32,
}

impl OptimizationResult {
    /// Scores a finished entry set against its conflict list.
    pub fn evaluate(entries: &[TimetableEntry], conflicts: &[Conflict]) -> Self {
        let mut score: i32 = 100;
        let mut suggestions = Vec::new();

        let efficiency_raw =
            entries.len() as f64 / calendar::SLOT_COUNT as f64 * 100.0;
        let efficiency = efficiency_raw.round() as u32;

        score -= conflicts.len() as i32 * 10;

        if is_balanced(entries) {
            score += 10;
        }

        let overloaded = overloaded_faculty_count(entries);
        score -= overloaded as i32 * 5;

        if !conflicts.is_empty() {
            suggestions.push(format!(
                "Resolve {} scheduling conflicts",
                conflicts.len()
            ));
        }
        if efficiency_raw < 60.0 {
            suggestions.push("Increase resource utilization".into());
        }
        if overloaded > 0 {
            suggestions.push(format!(
                "Balance workload for {overloaded} faculty members"
            ));
        }

        Self {
            score: score.max(0),
            conflicts: conflicts.to_vec(),
            suggestions,
            efficiency,
        }
    }
}

/// Whether every weekday's entry count falls in the balanced band.
fn is_balanced(entries: &[TimetableEntry]) -> bool {
    WEEKDAYS.iter().all(|&day| {
        let count = entries.iter().filter(|e| e.time_slot.day == day).count();
        BALANCED_RANGE.contains(&count)
    })
}

/// Number of faculty with more assigned slots than the overload threshold.
fn overloaded_faculty_count(entries: &[TimetableEntry]) -> usize {
    let mut workload: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *workload.entry(entry.faculty_id.as_str()).or_insert(0) += 1;
    }
    workload
        .values()
        .filter(|&&hours| hours > OVERLOAD_THRESHOLD)
        .count()
}
