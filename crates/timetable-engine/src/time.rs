//! Weekday and clock-time helpers.
//!
//! The timetable works on a single abstract week: a day is a
//! [`chrono::Weekday`] and a time of day is a minute-precision
//! [`chrono::NaiveTime`]. This module owns the mapping between those types
//! and the outside representations:
//!
//! - day indices `0..=6` (Monday = 0) and English day names
//! - clock strings typed by a user (`"HH:MM"`, `"HH MM"`, or a bare `"HH"`)
//! - the packed `HHMM` integer form (`930` = 09:30)
//!
//! Every conversion is checked. An out-of-range day index or an impossible
//! time is a [`TimetableError`], never a silent lookup miss.

use chrono::{NaiveTime, Timelike, Weekday};

use crate::error::TimetableError;

/// The days of the week in timetable order, Monday first.
pub const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// The displayed due time of every deadline.
pub const DEADLINE_LABEL: &str = "23:59";

// ── Days ────────────────────────────────────────────────────────────────────

/// Convert a day index (Monday = 0 … Sunday = 6) into a [`Weekday`].
///
/// # Errors
///
/// Returns [`TimetableError::InvalidDay`] for any index outside `0..=6`.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use timetable_engine::time::day_from_index;
///
/// assert_eq!(day_from_index(0).unwrap(), Weekday::Mon);
/// assert_eq!(day_from_index(6).unwrap(), Weekday::Sun);
/// assert!(day_from_index(7).is_err());
/// ```
pub fn day_from_index(index: i64) -> Result<Weekday, TimetableError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| ALL_DAYS.get(i).copied())
        .ok_or(TimetableError::InvalidDay(index))
}

/// The position of `day` in the week, Monday = 0.
pub fn day_index(day: Weekday) -> u32 {
    day.num_days_from_monday()
}

/// The English name of `day` as shown in reports and exports.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a weekday name (case-insensitive, full or abbreviated) or a day
/// index `"0"`..`"6"`.
///
/// # Errors
///
/// Returns [`TimetableError::InvalidDayName`] if the text names no day, or
/// [`TimetableError::InvalidDay`] for a numeric index outside `0..=6`.
pub fn parse_day(s: &str) -> Result<Weekday, TimetableError> {
    let normalized = s.trim().to_ascii_lowercase();
    if let Ok(index) = normalized.parse::<i64>() {
        return day_from_index(index);
    }
    match normalized.as_str() {
        "monday" | "mon" => Ok(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Ok(Weekday::Tue),
        "wednesday" | "wed" => Ok(Weekday::Wed),
        "thursday" | "thu" | "thurs" => Ok(Weekday::Thu),
        "friday" | "fri" => Ok(Weekday::Fri),
        "saturday" | "sat" => Ok(Weekday::Sat),
        "sunday" | "sun" => Ok(Weekday::Sun),
        _ => Err(TimetableError::InvalidDayName(format!("'{}'", s.trim()))),
    }
}

// ── Clock times ─────────────────────────────────────────────────────────────

/// 23:59, the time every deadline is due by.
pub fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).unwrap_or_default()
}

/// Parse a clock time typed as `"HH:MM"`, `"HH MM"`, or a bare hour `"HH"`.
///
/// Hours run 0-23 and minutes 0-59; surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`TimetableError::InvalidTime`] when the text is not one of the
/// accepted shapes or names an impossible time.
///
/// # Examples
///
/// ```
/// use timetable_engine::time::{format_clock_time, parse_clock_time};
///
/// assert_eq!(format_clock_time(parse_clock_time("14:30").unwrap()), "14:30");
/// assert_eq!(format_clock_time(parse_clock_time("9 05").unwrap()), "09:05");
/// assert_eq!(format_clock_time(parse_clock_time("7").unwrap()), "07:00");
/// assert!(parse_clock_time("25:00").is_err());
/// ```
pub fn parse_clock_time(s: &str) -> Result<NaiveTime, TimetableError> {
    let trimmed = s.trim();
    let invalid = || TimetableError::InvalidTime(format!("'{}'", trimmed));

    let parts: Vec<&str> = if trimmed.contains(':') {
        trimmed.split(':').map(str::trim).collect()
    } else {
        trimmed.split_whitespace().collect()
    };

    let (hour, minute) = match parts.as_slice() {
        [h] => (parse_component(h), Some(0)),
        [h, m] => (parse_component(h), parse_component(m)),
        _ => return Err(invalid()),
    };

    match (hour, minute) {
        (Some(h), Some(m)) => NaiveTime::from_hms_opt(h, m, 0).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// Format a time as zero-padded `"HH:MM"`.
pub fn format_clock_time(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Convert a packed `HHMM` integer (`930` = 09:30) into a time.
///
/// # Errors
///
/// Returns [`TimetableError::InvalidTime`] for negative values or values
/// whose hour/minute digits are out of range (`2400`, `1260`, …).
pub fn time_from_packed(hhmm: i32) -> Result<NaiveTime, TimetableError> {
    if hhmm < 0 {
        return Err(TimetableError::InvalidTime(format!("packed value {hhmm}")));
    }
    let (hour, minute) = (hhmm / 100, hhmm % 100);
    NaiveTime::from_hms_opt(hour as u32, minute as u32, 0)
        .ok_or_else(|| TimetableError::InvalidTime(format!("packed value {hhmm}")))
}

/// The packed `HHMM` form of a time (`09:30` = `930`).
pub fn time_to_packed(time: NaiveTime) -> i32 {
    (time.hour() * 100 + time.minute()) as i32
}

/// Parse one all-digit hour or minute field.
fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
