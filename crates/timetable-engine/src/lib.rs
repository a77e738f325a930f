//! # timetable-engine
//!
//! Deterministic analysis of a weekly timetable.
//!
//! Events are either fixed time ranges or end-of-day deadlines on one of the
//! seven weekdays. The engine orders them, finds clashes and free slots
//! between neighbouring events, and builds the display and export views.
//! It does no I/O: callers collect the events and decide where the reports
//! go.
//!
//! ## Modules
//!
//! - [`event`] — The `Event` type (fixed range or deadline)
//! - [`store`] — Append-only event collection for one run
//! - [`ordering`] — Total order by day, deadline-first, then start time
//! - [`conflict`] — Clashes between adjacent same-day events
//! - [`freebusy`] — Free slots between adjacent same-day events
//! - [`view`] — Display-ready timetable rows
//! - [`export`] — JSON export records
//! - [`analyzer`] — Sort and build every report in one call
//! - [`time`] — Day names and `HH:MM` parsing/formatting
//! - [`error`] — Error types

pub mod analyzer;
pub mod conflict;
pub mod error;
pub mod event;
pub mod export;
pub mod freebusy;
pub mod ordering;
pub mod store;
pub mod time;
pub mod view;

pub use analyzer::{analyze, ScheduleReport};
pub use conflict::{detect_clashes, Clash};
pub use error::TimetableError;
pub use event::{normalize_name, Event, EventTiming};
pub use export::{build_export_model, to_json_string, EntryKind, ExportRecord};
pub use freebusy::{find_free_slots, FreeSlot};
pub use ordering::{compare_events, is_sorted, sort_events};
pub use store::EventStore;
pub use time::{day_from_index, day_name, format_clock_time, parse_clock_time, parse_day};
pub use view::{build_timetable_view, rows_for_day, TimetableRow};
