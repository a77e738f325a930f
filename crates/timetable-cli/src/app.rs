//! The interactive planner session: collect events, analyze, report, export.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Weekday;
use clap::ValueEnum;
use timetable_engine::{analyze, rows_for_day, to_json_string, EventStore};
use tracing::{debug, warn};

use crate::prompt::Prompter;
use crate::render;

/// Largest batch of events accepted in one session.
pub const MAX_EVENTS: usize = 100;

/// How the session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Create a new timetable.
    New,
    /// Add events to an existing timetable.
    Append,
}

/// Session settings taken from the command line.
#[derive(Debug, Clone)]
pub struct Options {
    pub output: PathBuf,
    pub mode: Option<Mode>,
    pub day: Option<Weekday>,
    pub print_json: bool,
    pub export: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: PathBuf::from("schedule.json"),
            mode: None,
            day: None,
            print_json: false,
            export: true,
        }
    }
}

/// Run one planner session reading answers from `input` and writing all
/// user-facing text to `out`.
pub fn run<R: BufRead, W: Write>(options: &Options, input: R, out: W) -> Result<()> {
    let mut prompter = Prompter::new(input, out);

    write!(prompter.out(), "\n{}\n", render::banner("SMART TIMETABLE & ACTIVITY PLANNER"))?;

    let mode = match options.mode {
        Some(mode) => mode,
        None => {
            writeln!(prompter.out(), "1. Create new timetable")?;
            writeln!(prompter.out(), "2. Edit existing timetable (append new events)")?;
            match prompter.ask_choice("Enter your choice: ", &[1, 2])? {
                2 => Mode::Append,
                _ => Mode::New,
            }
        }
    };
    debug!(?mode, "session started");

    if mode == Mode::Append && options.output.exists() {
        // Prior entries are not parsed back; only the new batch is analyzed.
        writeln!(
            prompter.out(),
            "\nExisting '{}' detected. New events will be added.",
            options.output.display()
        )?;
    }

    let count = prompter.ask_count(
        "\nHow many new events/activities do you want to add now? ",
        MAX_EVENTS,
    )?;

    let mut store = EventStore::new();
    for number in 1..=count {
        let event = prompter.ask_event(number)?;
        debug!(name = %event.name, day = ?event.day, deadline = event.is_deadline(), "event recorded");
        store.push(event);
    }

    let report = analyze(&mut store);
    debug!(
        events = store.len(),
        clashes = report.clashes.len(),
        free_slots = report.free_slots.len(),
        "analysis complete"
    );

    let out = prompter.out();
    let rows = match options.day {
        Some(day) => rows_for_day(&report.timetable, day),
        None => report.timetable.clone(),
    };
    write!(out, "\n{}", render::render_timetable(&rows))?;
    write!(out, "\n{}", render::render_clashes(&report.clashes))?;
    write!(out, "\n{}", render::render_free_slots(&report.free_slots))?;

    let json = to_json_string(&report.export)?;
    let mut exported = false;
    if options.export {
        match write_export(&options.output, &json) {
            Ok(()) => {
                debug!(path = %options.output.display(), "export written");
                writeln!(
                    out,
                    "\nData exported successfully to '{}'",
                    options.output.display()
                )?;
                exported = true;
            }
            Err(e) => {
                warn!(path = %options.output.display(), error = %e, "export failed");
                writeln!(out, "\nError creating {}: {e}", options.output.display())?;
            }
        }
    }

    if options.print_json {
        write!(out, "\n{json}")?;
    }

    if exported {
        writeln!(out, "\nTimetable successfully created and exported.")?;
        writeln!(out, "You can now view it visually on the webpage for confirmation.")?;
    } else {
        writeln!(out, "\nTimetable successfully created.")?;
    }
    out.flush()?;
    Ok(())
}

fn write_export(path: &Path, json: &str) -> std::io::Result<()> {
    fs::write(path, json)
}
