//! Faculty model.

use serde::{Deserialize, Serialize};

use super::{SlotPreference, Subject};

/// A teaching staff member.
///
/// Specializations are free-text topic strings matched against subject
/// names. An empty specialization list means the faculty member can
/// teach any subject in their department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Home department.
    pub department_id: String,
    /// Topic strings matched against subject names (substring, both
    /// directions, case-insensitive).
    pub specialization: Vec<String>,
    /// Weekly teaching-hour ceiling (informational; the scorer flags
    /// overload at 20 assigned slots regardless).
    pub max_hours_per_week: u32,
    /// Preferred (day, start time) pairs. Non-empty = hard filter.
    pub preferred_time_slots: Vec<SlotPreference>,
}

impl Faculty {
    /// Creates a faculty member.
    pub fn new(id: impl Into<String>, department_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            department_id: department_id.into(),
            specialization: Vec::new(),
            max_hours_per_week: 20,
            preferred_time_slots: Vec::new(),
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a specialization topic.
    pub fn with_specialization(mut self, topic: impl Into<String>) -> Self {
        self.specialization.push(topic.into());
        self
    }

    /// Sets the weekly hour ceiling.
    pub fn with_max_hours(mut self, hours: u32) -> Self {
        self.max_hours_per_week = hours;
        self
    }

    /// Adds a preferred time slot.
    pub fn with_preferred_slot(mut self, preference: SlotPreference) -> Self {
        self.preferred_time_slots.push(preference);
        self
    }

    /// Whether this faculty member can teach the given subject.
    ///
    /// Requires the same department, plus either no declared
    /// specializations or at least one topic that is a case-insensitive
    /// substring of the subject name (or vice versa).
    pub fn can_teach(&self, subject: &Subject) -> bool {
        if self.department_id != subject.department_id {
            return false;
        }
        if self.specialization.is_empty() {
            return true;
        }
        let subject_name = subject.name.to_lowercase();
        self.specialization.iter().any(|topic| {
            let topic = topic.to_lowercase();
            subject_name.contains(&topic) || topic.contains(&subject_name)
        })
    }
}
