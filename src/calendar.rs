//! The weekly slot calendar.
//!
//! A fixed grid of 30 slots: 5 weekdays x 6 periods of 60 minutes.
//! Periods 2/3 and 4/5 are separated by a morning break (11:00-11:15)
//! and lunch (13:15-14:15).
//!
//! The grid is process-wide static configuration. Request constraints
//! are checked against it but never change which slots exist.

use std::sync::LazyLock;

use crate::models::{Day, TimeSlot};

/// Teaching days, in calendar order.
pub const WEEKDAYS: [Day; 5] = [
    Day::Monday,
    Day::Tuesday,
    Day::Wednesday,
    Day::Thursday,
    Day::Friday,
];

/// Periods per teaching day.
pub const PERIODS_PER_DAY: usize = 6;

/// Total slots in the weekly grid.
pub const SLOT_COUNT: usize = WEEKDAYS.len() * PERIODS_PER_DAY;

/// (start, end) times for each period of the day.
const PERIOD_TIMES: [(&str, &str); PERIODS_PER_DAY] = [
    ("09:00", "10:00"),
    ("10:00", "11:00"),
    ("11:15", "12:15"),
    ("12:15", "13:15"),
    ("14:15", "15:15"),
    ("15:15", "16:15"),
];

static SLOTS: LazyLock<Vec<TimeSlot>> = LazyLock::new(|| {
    let mut slots = Vec::with_capacity(SLOT_COUNT);
    let mut id = 0u32;
    for day in WEEKDAYS {
        for (period, (start, end)) in PERIOD_TIMES.iter().enumerate() {
            id += 1;
            slots.push(TimeSlot::new(
                id.to_string(),
                day,
                *start,
                *end,
                period as u8 + 1,
            ));
        }
    }
    slots
});

/// The full weekly grid, ordered by day then period, ids "1".."30".
pub fn weekly_slots() -> &'static [TimeSlot] {
    &SLOTS
}
