//! Clash detection over a sorted timetable.
//!
//! A clash is reported for an adjacent pair of fixed events on the same day
//! when the earlier one ends strictly after the later one starts. Touching
//! boundaries (`end == start`) are not a clash, and deadlines never clash.
//!
//! Detection is adjacent-only. After sorting by start time any overlap shows
//! up between some pair of neighbours, but a long event that wholly contains
//! a later, non-adjacent event is reported only if a neighbouring pair also
//! overlaps. For example `A 09:00-17:00`, `B 10:00-10:30`, `C 12:00-13:00`
//! yields `(A, B)` but not `(A, C)`.

use chrono::Weekday;

use crate::event::Event;
use crate::ordering::fixed_neighbours;
use crate::time::day_name;

/// Two neighbouring events whose time ranges overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clash {
    /// Name of the earlier event in timetable order.
    pub first: String,
    /// Name of the event it overlaps with.
    pub second: String,
    pub day: Weekday,
}

impl Clash {
    pub fn day_name(&self) -> &'static str {
        day_name(self.day)
    }
}

/// Find clashes between adjacent events of an already-sorted slice.
///
/// Returns clashes in timetable order; an empty vector means no clashes.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use timetable_engine::{detect_clashes, Event};
///
/// let events = vec![
///     Event::from_packed("A", 1, 900, 1000, false).unwrap(),
///     Event::from_packed("B", 1, 930, 1100, false).unwrap(),
/// ];
/// let clashes = detect_clashes(&events);
/// assert_eq!(clashes.len(), 1);
/// assert_eq!((clashes[0].first.as_str(), clashes[0].second.as_str()), ("A", "B"));
/// assert_eq!(clashes[0].day, Weekday::Tue);
/// ```
pub fn detect_clashes(events: &[Event]) -> Vec<Clash> {
    fixed_neighbours(events)
        .filter(|pair| pair.earlier_end > pair.later_start)
        .map(|pair| Clash {
            first: pair.earlier.name.clone(),
            second: pair.later.name.clone(),
            day: pair.earlier.day,
        })
        .collect()
}
