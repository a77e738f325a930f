//! Line-oriented interactive input.
//!
//! Every question repeats until the answer is valid. Running out of input
//! mid-question is an error, so piped scripts that stop early fail cleanly
//! instead of looping.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use chrono::{NaiveTime, Weekday};
use timetable_engine::{day_from_index, day_name, normalize_name, parse_clock_time, Event};

use crate::render;

pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Access the output stream for non-question text.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Print `question` and read one line, without the line terminator.
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.out, "{question}")?;
        self.out.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            bail!("unexpected end of input at prompt {:?}", question.trim());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until `parse` accepts the answer.
    fn ask_parsed<T>(
        &mut self,
        question: &str,
        mut parse: impl FnMut(&str) -> std::result::Result<T, String>,
    ) -> Result<T> {
        loop {
            let answer = self.ask(question)?;
            match parse(answer.trim()) {
                Ok(value) => return Ok(value),
                Err(reason) => writeln!(self.out, "{reason} Please try again.")?,
            }
        }
    }

    pub fn ask_name(&mut self) -> Result<String> {
        self.ask_parsed("Enter Event Name: ", |s| {
            normalize_name(s).map_err(|e| format!("{e}."))
        })
    }

    /// Ask for a count in `0..=max`.
    pub fn ask_count(&mut self, question: &str, max: usize) -> Result<usize> {
        self.ask_parsed(question, |s| match s.parse::<usize>() {
            Ok(n) if n <= max => Ok(n),
            Ok(_) => Err(format!("At most {max} events can be added at once.")),
            Err(_) => Err(format!("'{s}' is not a non-negative whole number.")),
        })
    }

    /// Ask for one of the listed integer choices.
    pub fn ask_choice(&mut self, question: &str, allowed: &[u32]) -> Result<u32> {
        self.ask_parsed(question, |s| match s.parse::<u32>() {
            Ok(n) if allowed.contains(&n) => Ok(n),
            _ => Err(format!("'{s}' is not one of {allowed:?}.")),
        })
    }

    pub fn ask_day(&mut self) -> Result<Weekday> {
        write!(self.out, "\n{}", render::day_menu())?;
        self.ask_parsed("Enter day number: ", |s| {
            let index: i64 = s.parse().map_err(|_| format!("'{s}' is not a day number."))?;
            day_from_index(index).map_err(|e| format!("{e}."))
        })
    }

    pub fn ask_time(&mut self, question: &str) -> Result<NaiveTime> {
        self.ask_parsed(question, |s| parse_clock_time(s).map_err(|e| format!("{e}.")))
    }

    /// Collect one full event: name, day, deadline flag and, for fixed
    /// events, start and end times.
    pub fn ask_event(&mut self, number: usize) -> Result<Event> {
        write!(self.out, "\n{}", render::section(&format!("EVENT {number} DETAILS")))?;

        let name = self.ask_name()?;
        let day = self.ask_day()?;

        writeln!(self.out, "\nIs this a deadline-based task (due by end of day)?")?;
        writeln!(self.out, "  [1] Yes (no specific start time)")?;
        writeln!(self.out, "  [0] No (enter start and end times)")?;
        let is_deadline = self.ask_choice("Enter your choice: ", &[0, 1])? == 1;

        if is_deadline {
            writeln!(
                self.out,
                "Deadline recorded for {} by 23:59 (End of Day)",
                day_name(day)
            )?;
            return Ok(Event::deadline(name, day));
        }

        writeln!(self.out)?;
        let start = self.ask_time("Enter Start Time (24-hour, e.g., 09:00 or 14:30): ")?;
        let end = self.ask_time("Enter End Time (24-hour, e.g., 10:30 or 16:00): ")?;
        Ok(Event::fixed(name, day, start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_fixed_event() {
        let mut p = prompter("Lecture\n0\n0\n09:00\n10 00\n");
        let event = p.ask_event(1).unwrap();
        assert_eq!(event, Event::fixed("Lecture", Weekday::Mon, hm(9, 0), hm(10, 0)));
        let out = output(p);
        assert!(out.contains("EVENT 1 DETAILS"));
        assert!(out.contains("  [3] Thursday"));
    }

    #[test]
    fn test_deadline_event() {
        let mut p = prompter("Report\n4\n1\n");
        let event = p.ask_event(2).unwrap();
        assert_eq!(event, Event::deadline("Report", Weekday::Fri));
        assert!(output(p).contains("Deadline recorded for Friday by 23:59 (End of Day)"));
    }

    #[test]
    fn test_invalid_answers_are_reprompted() {
        let mut p = prompter("\nGym\n9\nmonday\n2\nmaybe\n0\n25:00\n7:00\n8\n");
        let event = p.ask_event(1).unwrap();
        assert_eq!(event, Event::fixed("Gym", Weekday::Wed, hm(7, 0), hm(8, 0)));
        let out = output(p);
        assert!(out.contains("Event name must not be empty."));
        assert!(out.contains("Invalid day: 9"));
        assert!(out.contains("'monday' is not a day number."));
        assert!(out.contains("'maybe' is not one of [0, 1]."));
        assert!(out.contains("Invalid time: '25:00'"));
    }

    #[test]
    fn test_windows_line_endings() {
        let mut p = prompter("Swim\r\n6\r\n1\r\n");
        assert_eq!(p.ask_event(1).unwrap(), Event::deadline("Swim", Weekday::Sun));
    }

    #[test]
    fn test_end_of_input_is_error() {
        let mut p = prompter("Lecture\n0\n");
        let err = p.ask_event(1).unwrap_err().to_string();
        assert!(err.contains("unexpected end of input"), "got: {err}");
    }

    #[test]
    fn test_count_rejects_negative() {
        let mut p = prompter("-2\nthree\n3\n");
        assert_eq!(p.ask_count("How many? ", 10).unwrap(), 3);
        assert!(output(p).contains("'-2' is not a non-negative whole number."));
    }

    #[test]
    fn test_count_above_limit_is_reprompted() {
        let mut p = prompter("11\n99999999999999999999999\n10\n");
        assert_eq!(p.ask_count("How many? ", 10).unwrap(), 10);
        let out = output(p);
        assert_eq!(out.matches("At most 10 events can be added at once.").count(), 1);
        assert!(out.contains("'99999999999999999999999' is not a non-negative whole number."));
    }
}
