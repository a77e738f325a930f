//! Machine-readable export of a timetable.
//!
//! Each event becomes one JSON object, in timetable order:
//!
//! ```text
//! {"day":"Monday","event":"Report","deadline":"23:59","type":"deadline"}
//! {"day":"Monday","event":"Lab","start":"10:30","end":"12:00","type":"fixed"}
//! ```
//!
//! [`to_json_string`] lays the objects out as a JSON array with one compact
//! object per line.

use serde::Serialize;

use crate::error::TimetableError;
use crate::event::{Event, EventTiming};
use crate::time::{day_name, format_clock_time, DEADLINE_LABEL};

/// Value of the `"type"` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Deadline,
    Fixed,
}

/// One exported event. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExportRecord {
    Deadline {
        day: &'static str,
        event: String,
        deadline: &'static str,
        #[serde(rename = "type")]
        kind: EntryKind,
    },
    Fixed {
        day: &'static str,
        event: String,
        start: String,
        end: String,
        #[serde(rename = "type")]
        kind: EntryKind,
    },
}

impl ExportRecord {
    pub fn from_event(event: &Event) -> Self {
        let day = day_name(event.day);
        match event.timing {
            EventTiming::Deadline => ExportRecord::Deadline {
                day,
                event: event.name.clone(),
                deadline: DEADLINE_LABEL,
                kind: EntryKind::Deadline,
            },
            EventTiming::Fixed { start, end } => ExportRecord::Fixed {
                day,
                event: event.name.clone(),
                start: format_clock_time(start),
                end: format_clock_time(end),
                kind: EntryKind::Fixed,
            },
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            ExportRecord::Deadline { kind, .. } | ExportRecord::Fixed { kind, .. } => *kind,
        }
    }
}

/// One export record per event, in the order given.
pub fn build_export_model(events: &[Event]) -> Vec<ExportRecord> {
    events.iter().map(ExportRecord::from_event).collect()
}

/// Serialize records as a JSON array: `[` and `]` on their own lines, each
/// record compact on its own line indented by two spaces, no trailing comma.
///
/// # Errors
///
/// Returns [`TimetableError::Export`] if a record fails to serialize.
///
/// # Examples
///
/// ```
/// use timetable_engine::{build_export_model, to_json_string, Event};
///
/// let events = [Event::from_packed("Gym", 0, 700, 800, false).unwrap()];
/// let json = to_json_string(&build_export_model(&events)).unwrap();
/// assert_eq!(
///     json,
///     "[\n  {\"day\":\"Monday\",\"event\":\"Gym\",\"start\":\"07:00\",\"end\":\"08:00\",\"type\":\"fixed\"}\n]\n"
/// );
/// ```
pub fn to_json_string(records: &[ExportRecord]) -> Result<String, TimetableError> {
    let mut out = String::from("[\n");
    for (i, record) in records.iter().enumerate() {
        let line =
            serde_json::to_string(record).map_err(|e| TimetableError::Export(e.to_string()))?;
        out.push_str("  ");
        out.push_str(&line);
        if i + 1 < records.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("]\n");
    Ok(out)
}
