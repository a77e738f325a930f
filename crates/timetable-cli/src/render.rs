//! Terminal formatting of the schedule report.

use timetable_engine::{Clash, FreeSlot, TimetableRow};

const RULE_WIDTH: usize = 62;
const BANNER_WIDTH: usize = 46;

/// A banner title framed by `=` rules.
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\n{title}\n{rule}\n")
}

/// A section heading framed by `-` rules.
pub fn section(title: &str) -> String {
    let rule = "-".repeat(BANNER_WIDTH);
    format!("{rule}\n{title}\n{rule}\n")
}

/// The weekly timetable as a fixed-width table.
pub fn render_timetable(rows: &[TimetableRow]) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = banner("WEEKLY TIMETABLE");
    out.push_str(&format!("{:<10} {:<25} {}\n", "Day", "Event Name", "Time"));
    out.push_str(&rule);
    out.push('\n');
    for row in rows {
        out.push_str(&format!("{:<10} {:<25} {}\n", row.day_name(), row.name, row.time));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

pub fn render_clashes(clashes: &[Clash]) -> String {
    let mut out = String::from("Checking for schedule conflicts...\n");
    if clashes.is_empty() {
        out.push_str("No clashes found.\n");
    }
    for clash in clashes {
        out.push_str(&format!(
            "⚠️  Clash: '{}' overlaps with '{}' on {}\n",
            clash.first,
            clash.second,
            clash.day_name()
        ));
    }
    out
}

pub fn render_free_slots(slots: &[FreeSlot]) -> String {
    let mut out = String::from("Suggested Free Slots:\n");
    if slots.is_empty() {
        out.push_str("No free slots available.\n");
    }
    for slot in slots {
        out.push_str(&format!("{slot}\n"));
    }
    out
}

/// The numbered day menu shown when choosing an event's day.
pub fn day_menu() -> String {
    let mut out = String::from("Choose a day for this event by typing its number:\n");
    for (i, day) in timetable_engine::time::ALL_DAYS.iter().enumerate() {
        out.push_str(&format!("  [{i}] {}\n", timetable_engine::day_name(*day)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetable_engine::{build_timetable_view, Event};

    #[test]
    fn test_timetable_columns() {
        let rows = build_timetable_view(&[
            Event::from_packed("Report", 0, -1, 2359, true).unwrap(),
            Event::from_packed("Lecture", 0, 900, 1000, false).unwrap(),
        ]);
        let table = render_timetable(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[1], "WEEKLY TIMETABLE");
        assert_eq!(lines[3], format!("{:<10} {:<25} Time", "Day", "Event Name"));
        assert_eq!(lines[5], format!("{:<10} {:<25} By 23:59 (End of Day)", "Monday", "Report"));
        assert_eq!(lines[6], format!("{:<10} {:<25} 09:00 - 10:00", "Monday", "Lecture"));
        assert_eq!(lines[7], "-".repeat(RULE_WIDTH));
    }

    #[test]
    fn test_clash_lines() {
        let events = [
            Event::from_packed("A", 1, 900, 1000, false).unwrap(),
            Event::from_packed("B", 1, 930, 1100, false).unwrap(),
        ];
        let text = render_clashes(&timetable_engine::detect_clashes(&events));
        assert!(text.contains("Clash: 'A' overlaps with 'B' on Tuesday"));
        assert!(!text.contains("No clashes found."));
        assert!(render_clashes(&[]).contains("No clashes found."));
    }

    #[test]
    fn test_free_slot_lines() {
        let events = [
            Event::from_packed("Lecture", 0, 900, 1000, false).unwrap(),
            Event::from_packed("Lab", 0, 1030, 1200, false).unwrap(),
        ];
        let text = render_free_slots(&timetable_engine::find_free_slots(&events));
        assert_eq!(text, "Suggested Free Slots:\nMonday: 10:00 - 10:30\n");
        assert!(render_free_slots(&[]).contains("No free slots available."));
    }

    #[test]
    fn test_day_menu_lists_week() {
        let menu = day_menu();
        assert!(menu.contains("  [0] Monday\n"));
        assert!(menu.contains("  [6] Sunday\n"));
    }
}
