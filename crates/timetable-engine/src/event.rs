//! The timetable entry type.

use chrono::{NaiveTime, Weekday};

use crate::error::TimetableError;
use crate::time::{day_from_index, end_of_day, time_from_packed};

/// When an event happens within its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTiming {
    /// No start time; due by 23:59 of the day.
    Deadline,
    /// A fixed time range. `start < end` is not enforced.
    Fixed { start: NaiveTime, end: NaiveTime },
}

/// One timetable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    pub day: Weekday,
    pub timing: EventTiming,
}

impl Event {
    /// A fixed time-range event.
    pub fn fixed(name: impl Into<String>, day: Weekday, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            name: name.into(),
            day,
            timing: EventTiming::Fixed { start, end },
        }
    }

    /// An end-of-day deadline.
    pub fn deadline(name: impl Into<String>, day: Weekday) -> Self {
        Self {
            name: name.into(),
            day,
            timing: EventTiming::Deadline,
        }
    }

    /// Build an event from the packed representation: day index 0-6,
    /// `HHMM` integers, and a deadline flag.
    ///
    /// For deadlines `start` and `end` are ignored; the event always has no
    /// start time and ends at 23:59 (legacy callers pass `-1` and `2359`).
    ///
    /// # Errors
    ///
    /// Returns [`TimetableError::InvalidDay`] for a day outside `0..=6` and
    /// [`TimetableError::InvalidTime`] for an impossible fixed start or end.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_engine::Event;
    ///
    /// let lab = Event::from_packed("Lab", 0, 1030, 1200, false).unwrap();
    /// assert_eq!(lab.start_packed(), Some(1030));
    ///
    /// let report = Event::from_packed("Report", 0, -1, 2359, true).unwrap();
    /// assert!(report.is_deadline());
    /// assert_eq!(report.end_packed(), 2359);
    /// ```
    pub fn from_packed(
        name: impl Into<String>,
        day: i64,
        start: i32,
        end: i32,
        is_deadline: bool,
    ) -> Result<Self, TimetableError> {
        let day = day_from_index(day)?;
        if is_deadline {
            return Ok(Self::deadline(name, day));
        }
        Ok(Self::fixed(
            name,
            day,
            time_from_packed(start)?,
            time_from_packed(end)?,
        ))
    }

    pub fn is_deadline(&self) -> bool {
        matches!(self.timing, EventTiming::Deadline)
    }

    /// Start time, or `None` for a deadline.
    pub fn start(&self) -> Option<NaiveTime> {
        match self.timing {
            EventTiming::Deadline => None,
            EventTiming::Fixed { start, .. } => Some(start),
        }
    }

    /// End time; 23:59 for a deadline.
    pub fn end(&self) -> NaiveTime {
        match self.timing {
            EventTiming::Deadline => end_of_day(),
            EventTiming::Fixed { end, .. } => end,
        }
    }

    /// `(start, end)` of a fixed event, `None` for a deadline.
    pub fn fixed_range(&self) -> Option<(NaiveTime, NaiveTime)> {
        match self.timing {
            EventTiming::Deadline => None,
            EventTiming::Fixed { start, end } => Some((start, end)),
        }
    }

    /// Packed `HHMM` start, `None` for a deadline.
    pub fn start_packed(&self) -> Option<i32> {
        self.start().map(crate::time::time_to_packed)
    }

    /// Packed `HHMM` end (`2359` for a deadline).
    pub fn end_packed(&self) -> i32 {
        crate::time::time_to_packed(self.end())
    }
}

/// Trim an event name supplied by a user, rejecting blank names.
///
/// # Errors
///
/// Returns [`TimetableError::EmptyName`] if nothing remains after trimming.
pub fn normalize_name(name: &str) -> Result<String, TimetableError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TimetableError::EmptyName);
    }
    Ok(trimmed.to_string())
}
