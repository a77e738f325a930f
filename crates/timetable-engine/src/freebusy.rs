//! Free-slot detection over a sorted timetable.
//!
//! A free slot is the idle interval between two adjacent fixed events on the
//! same day, reported when the earlier one ends strictly before the later one
//! starts. Deadlines take no time and neither open nor close a slot.

use chrono::{NaiveTime, Weekday};

use crate::event::Event;
use crate::ordering::fixed_neighbours;
use crate::time::{day_name, format_clock_time};

/// An idle interval between two events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeSlot {
    pub day: Weekday,
    /// End of the earlier event.
    pub start: NaiveTime,
    /// Start of the later event.
    pub end: NaiveTime,
}

impl FreeSlot {
    pub fn day_name(&self) -> &'static str {
        day_name(self.day)
    }
}

impl std::fmt::Display for FreeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} - {}",
            self.day_name(),
            format_clock_time(self.start),
            format_clock_time(self.end)
        )
    }
}

/// Find gaps between adjacent events of an already-sorted slice.
///
/// # Examples
///
/// ```
/// use timetable_engine::{find_free_slots, sort_events, Event};
///
/// let mut events = vec![
///     Event::from_packed("Lecture", 0, 900, 1000, false).unwrap(),
///     Event::from_packed("Lab", 0, 1030, 1200, false).unwrap(),
/// ];
/// sort_events(&mut events);
///
/// let slots = find_free_slots(&events);
/// assert_eq!(slots.len(), 1);
/// assert_eq!(slots[0].to_string(), "Monday: 10:00 - 10:30");
/// ```
pub fn find_free_slots(events: &[Event]) -> Vec<FreeSlot> {
    fixed_neighbours(events)
        .filter(|pair| pair.earlier_end < pair.later_start)
        .map(|pair| FreeSlot {
            day: pair.earlier.day,
            start: pair.earlier_end,
            end: pair.later_start,
        })
        .collect()
}
