//! Display-ready timetable rows.

use chrono::Weekday;

use crate::event::{Event, EventTiming};
use crate::time::{day_name, format_clock_time, DEADLINE_LABEL};

/// One line of the printed timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableRow {
    pub day: Weekday,
    pub name: String,
    /// `"By 23:59 (End of Day)"` or `"HH:MM - HH:MM"`.
    pub time: String,
}

impl TimetableRow {
    pub fn day_name(&self) -> &'static str {
        day_name(self.day)
    }
}

/// Render the time column for one event.
pub fn time_label(event: &Event) -> String {
    match event.timing {
        EventTiming::Deadline => format!("By {DEADLINE_LABEL} (End of Day)"),
        EventTiming::Fixed { start, end } => {
            format!("{} - {}", format_clock_time(start), format_clock_time(end))
        }
    }
}

/// One row per event, in the order given.
pub fn build_timetable_view(events: &[Event]) -> Vec<TimetableRow> {
    events
        .iter()
        .map(|event| TimetableRow {
            day: event.day,
            name: event.name.clone(),
            time: time_label(event),
        })
        .collect()
}

/// The rows falling on `day`, order preserved.
pub fn rows_for_day(rows: &[TimetableRow], day: Weekday) -> Vec<TimetableRow> {
    rows.iter().filter(|row| row.day == day).cloned().collect()
}
