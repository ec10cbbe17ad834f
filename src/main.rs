use chrono::{DateTime, Local, TimeZone, Utc};
use clap::Parser;
use flashcards_srs::export::json::{export_log_to_path, import_config};
use flashcards_srs::models::answer::{AnswerButton, format_interval};
use flashcards_srs::models::sm2::preview_intervals;
use flashcards_srs::models::{DayBoundary, Phase, SchedulerConfig};
use flashcards_srs::store::{MemoryStore, ReviewService, ReviewStore};
use flexi_logger::Logger;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

const ITEM_ID: i64 = 1;

/// Replays a sequence of grades for one card through the SM-2 scheduler.
///
/// The first grade is given at --start, every following one when the card
/// becomes due again.
#[derive(Parser, Debug)]
#[command(name = "srs-sim", version)]
struct Cli {
    /// Grades 0-5 (0 = blackout, 5 = perfect); out-of-range values are clamped
    #[arg(required = true, allow_negative_numbers = true)]
    grades: Vec<i32>,

    /// JSON file overriding scheduler parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Time of the first review (RFC 3339), defaults to now
    #[arg(long, value_parser = parse_start)]
    start: Option<DateTime<Utc>>,

    /// Seed for due-date fuzz, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    no_fuzz: bool,

    /// Don't snap due dates to 03:00
    #[arg(long)]
    no_align: bool,

    /// Snap to 03:00 local time instead of UTC
    #[arg(long)]
    local_day: bool,

    /// Write the review log to this JSON file
    #[arg(long)]
    export_log: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn parse_start(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| format!("expected an RFC 3339 timestamp: {err}"))
}

/// Formats Unix milliseconds as local "YYYY-MM-DD HH:MM"
fn format_millis(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M").to_string(),
        None => ms.to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let logger = if cli.verbose {
        Logger::try_with_str("debug")?
    } else {
        Logger::try_with_env_or_str("warn")?
    };
    let _logger = logger.log_to_stderr().start()?;

    let mut config = match &cli.config {
        Some(path) => import_config(path)?,
        None => SchedulerConfig::default(),
    };
    if cli.no_fuzz {
        config.enable_fuzz = false;
    }
    if cli.no_align {
        config.align_due_at_to_3am = false;
    }
    if cli.local_day {
        config.day_boundary = DayBoundary::Local;
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut service = ReviewService::new(MemoryStore::new(), config);
    let mut now = cli.start.unwrap_or_else(Utc::now).timestamp_millis();

    println!(
        "{:<17}  {:>5}  {:<10}  {:>8}  {:>4}  {}",
        "reviewed", "grade", "phase", "interval", "ease", "due"
    );
    for &grade in &cli.grades {
        let state = service.review_and_schedule_with(ITEM_ID, grade, now, &mut rng)?;
        let phase = match state.phase() {
            Phase::Learning { step } => format!("learning {step}"),
            Phase::Mature => "mature".to_string(),
        };
        println!(
            "{:<17}  {:>5}  {:<10}  {:>8}  {:>4.2}  {}",
            format_millis(now),
            state.last_grade.unwrap_or_default(),
            phase,
            format_interval(state.interval_days),
            state.ease,
            format_millis(state.due_at)
        );
        // Snapping to 03:00 can put a learning card's due date behind the clock.
        now = now.max(state.due_at);
    }

    if let Some(state) = service.store().state(ITEM_ID)? {
        let labels: Vec<String> = AnswerButton::ALL
            .iter()
            .zip(preview_intervals(&state, service.config()))
            .map(|(button, days)| format!("{button:?} {}", format_interval(days)))
            .collect();
        println!("Next answer: {}", labels.join(", "));
    }

    if let Some(path) = &cli.export_log {
        let log = service.history(ITEM_ID)?;
        export_log_to_path(&log, path)?;
        println!("Review log written to {}", path.display());
    }

    Ok(())
}
