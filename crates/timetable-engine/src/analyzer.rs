//! One-call analysis of a run's events.
//!
//! [`analyze`] sorts the store in place, then derives every report from the
//! sorted sequence: timetable rows, clashes, free slots and export records.

use crate::conflict::{detect_clashes, Clash};
use crate::export::{build_export_model, ExportRecord};
use crate::freebusy::{find_free_slots, FreeSlot};
use crate::store::EventStore;
use crate::view::{build_timetable_view, TimetableRow};

/// Everything derived from one sorted batch of events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleReport {
    pub timetable: Vec<TimetableRow>,
    pub clashes: Vec<Clash>,
    pub free_slots: Vec<FreeSlot>,
    pub export: Vec<ExportRecord>,
}

impl ScheduleReport {
    pub fn has_clashes(&self) -> bool {
        !self.clashes.is_empty()
    }
}

/// Sort `store` and build the full report from it.
///
/// # Examples
///
/// ```
/// use timetable_engine::{analyze, Event, EventStore};
///
/// let mut store: EventStore = [
///     Event::from_packed("A", 1, 900, 1000, false).unwrap(),
///     Event::from_packed("B", 1, 930, 1100, false).unwrap(),
/// ]
/// .into_iter()
/// .collect();
///
/// let report = analyze(&mut store);
/// assert!(report.has_clashes());
/// assert!(report.free_slots.is_empty());
/// assert_eq!(report.timetable.len(), 2);
/// ```
pub fn analyze(store: &mut EventStore) -> ScheduleReport {
    store.sort();
    let events = store.as_slice();
    ScheduleReport {
        timetable: build_timetable_view(events),
        clashes: detect_clashes(events),
        free_slots: find_free_slots(events),
        export: build_export_model(events),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use chrono::Weekday;

    #[test]
    fn test_empty_store() {
        let mut store = EventStore::new();
        let report = analyze(&mut store);
        assert!(report.timetable.is_empty());
        assert!(!report.has_clashes());
        assert!(report.free_slots.is_empty());
        assert!(report.export.is_empty());
    }

    #[test]
    fn test_reports_follow_sorted_order() {
        let mut store: EventStore = [
            Event::from_packed("Lab", 0, 1030, 1200, false).unwrap(),
            Event::from_packed("Report", 0, -1, 2359, true).unwrap(),
        ]
        .into_iter()
        .collect();
        let report = analyze(&mut store);
        assert_eq!(store.as_slice()[0].name, "Report");
        assert_eq!(report.timetable[0].name, "Report");
        assert_eq!(report.timetable[0].day, Weekday::Mon);
        assert_eq!(
            report.export[0],
            ExportRecord::from_event(&Event::deadline("Report", Weekday::Mon))
        );
    }
}
