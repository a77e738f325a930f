//! Total order over timetable events.
//!
//! Events sort by day (Monday first). Within a day every deadline comes
//! before every fixed event, and fixed events sort by start time. Ties keep
//! their input order, so sorting is deterministic for identical input.

use std::cmp::Ordering;

use chrono::NaiveTime;

use crate::event::Event;
use crate::time::day_index;

/// Three-way comparison: day, then presence of a start time, then start time.
///
/// Usable with any sorting algorithm; [`sort_events`] uses the standard
/// stable sort.
pub fn compare_events(a: &Event, b: &Event) -> Ordering {
    day_index(a.day)
        .cmp(&day_index(b.day))
        .then_with(|| match (a.start(), b.start()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => x.cmp(&y),
        })
}

/// Sort events in place into timetable order. Only reorders; no field changes.
///
/// # Examples
///
/// ```
/// use timetable_engine::{sort_events, Event};
///
/// let mut events = vec![
///     Event::from_packed("Lecture", 0, 900, 1000, false).unwrap(),
///     Event::from_packed("Lab", 0, 1030, 1200, false).unwrap(),
///     Event::from_packed("Report", 0, -1, 2359, true).unwrap(),
/// ];
/// sort_events(&mut events);
///
/// let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, ["Report", "Lecture", "Lab"]);
/// ```
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(compare_events);
}

/// Whether `events` is already in timetable order.
pub fn is_sorted(events: &[Event]) -> bool {
    events
        .windows(2)
        .all(|pair| compare_events(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Two neighbouring fixed events on the same day.
pub(crate) struct FixedNeighbours<'a> {
    pub earlier: &'a Event,
    pub later: &'a Event,
    pub earlier_end: NaiveTime,
    pub later_start: NaiveTime,
}

/// Adjacent pairs `(i, i + 1)` where both events are fixed and share a day.
///
/// Only consecutive positions are paired; an event nested inside a
/// non-adjacent earlier span is never compared with it.
pub(crate) fn fixed_neighbours(events: &[Event]) -> impl Iterator<Item = FixedNeighbours<'_>> {
    events.windows(2).filter_map(|pair| {
        let (earlier, later) = (&pair[0], &pair[1]);
        if earlier.day != later.day {
            return None;
        }
        let (_, earlier_end) = earlier.fixed_range()?;
        let (later_start, _) = later.fixed_range()?;
        Some(FixedNeighbours {
            earlier,
            later,
            earlier_end,
            later_start,
        })
    })
}
