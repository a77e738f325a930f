use std::io;
use std::path::PathBuf;

use chrono::Weekday;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod prompt;
mod render;

use app::{Mode, Options};

/// Build a weekly timetable interactively, then report clashes and free
/// slots and export it as JSON.
#[derive(Parser)]
#[command(name = "timetable", version, about)]
struct Cli {
    /// Path of the exported JSON timetable.
    #[arg(short, long, default_value = "schedule.json")]
    output: PathBuf,

    /// Start mode; prompts with a menu when omitted.
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Only print timetable rows for this day (name or 0-6, Monday = 0).
    #[arg(long, value_parser = parse_day_arg)]
    day: Option<Weekday>,

    /// Also print the export JSON to stdout.
    #[arg(long)]
    print_json: bool,

    /// Do not write the export file.
    #[arg(long)]
    no_export: bool,

    /// Enable debug logging on stderr (RUST_LOG overrides).
    #[arg(short, long)]
    verbose: bool,
}

fn parse_day_arg(s: &str) -> Result<Weekday, String> {
    timetable_engine::parse_day(s).map_err(|e| e.to_string())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = Options {
        output: cli.output,
        mode: cli.mode,
        day: cli.day,
        print_json: cli.print_json,
        export: !cli.no_export,
    };

    let stdin = io::stdin();
    let result = app::run(&options, stdin.lock(), io::stdout().lock());

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
