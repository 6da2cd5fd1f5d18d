//! Command-line entrypoint for the weekly timetable engine.

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use tracing::info;
use tracing_subscriber::EnvFilter;

use timetable_engine::assignment::build_schedule;
use timetable_engine::error::PlannerResult;
use timetable_engine::records::{read_catalog, read_preferences};
use timetable_engine::render::{format_schedule, save_schedule};

/// Builds a weekly course timetable from a session catalog and a preference list.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Session catalog CSV, one `name,day,time` record per line.
    #[arg(value_name = "SESSIONS", value_hint = ValueHint::FilePath)]
    sessions: PathBuf,

    /// Preference CSV, one `course,first_choice,second_choice` record per line.
    #[arg(value_name = "PREFERENCES", value_hint = ValueHint::FilePath)]
    preferences: PathBuf,

    /// Where to save the rendered timetable.
    #[arg(
        short,
        long,
        value_name = "FILE",
        value_hint = ValueHint::FilePath,
        default_value = "my_timetable.txt"
    )]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> PlannerResult<()> {
    let catalog = read_catalog(&cli.sessions)?;
    info!(count = catalog.len(), "Loaded session catalog");

    let preferences = read_preferences(&cli.preferences)?;
    info!(count = preferences.len(), "Loaded preferences");

    let schedule = build_schedule(&catalog, &preferences);
    info!(
        placed = schedule.entries.len(),
        dropped = schedule.dropped.len(),
        "Timetable built"
    );

    print!("{}", format_schedule(&schedule));

    save_schedule(&schedule, &cli.output)?;
    info!(path = %cli.output.display(), "Timetable saved");

    Ok(())
}

/// Install the stderr logging subscriber. `RUST_LOG` overrides the
/// default `info` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
