//! Time slot model.
//!
//! A slot is one 60-minute scheduling cell identified by (day, period).
//! Times are `"HH:MM"` strings to match the administrative data feed.

use serde::{Deserialize, Serialize};

/// Day of the week.
///
/// Saturday exists in the type system but is never populated in the
/// weekly calendar (5-day teaching week).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// Lowercase name as used in the data feed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cell of the weekly scheduling grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot identifier ("1".."30" in the weekly calendar).
    pub id: String,
    /// Day of the week.
    pub day: Day,
    /// Start time, "HH:MM".
    pub start_time: String,
    /// End time, "HH:MM".
    pub end_time: String,
    /// Duration in minutes (60 for every calendar slot).
    pub duration: u32,
    /// 1-based period index within the day.
    pub period: u8,
}

impl TimeSlot {
    /// Creates a slot.
    pub fn new(
        id: impl Into<String>,
        day: Day,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        period: u8,
    ) -> Self {
        Self {
            id: id.into(),
            day,
            start_time: start_time.into(),
            end_time: end_time.into(),
            duration: 60,
            period,
        }
    }

    /// Hour component of the start time (0 on malformed input).
    pub fn start_hour(&self) -> u32 {
        parse_hour(&self.start_time).unwrap_or(0)
    }
}

/// A faculty member's preferred (day, start time) pair.
///
/// A non-empty preference list acts as a hard filter: only exact
/// matches are eligible slots for that faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPreference {
    /// Preferred day.
    pub day: Day,
    /// Preferred start time, "HH:MM".
    pub start_time: String,
}

impl SlotPreference {
    /// Creates a preference.
    pub fn new(day: Day, start_time: impl Into<String>) -> Self {
        Self {
            day,
            start_time: start_time.into(),
        }
    }

    /// Whether a slot matches this preference exactly.
    pub fn matches(&self, slot: &TimeSlot) -> bool {
        self.day == slot.day && self.start_time == slot.start_time
    }
}

/// Parses the hour component of an "HH:MM" string.
pub(crate) fn parse_hour(time: &str) -> Option<u32> {
    time.split(':').next().and_then(|h| h.parse().ok())
}
