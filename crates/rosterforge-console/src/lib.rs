//! Colorful console output for team generation.
//!
//! Provides a custom `tracing` layer that formats generator events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Generation start/end
//! - **WARN**: Dropped players, thread pool fallback
//! - **DEBUG**: Per-attempt scores, forced placements, unsatisfiable constraints
//! - **TRACE**: Individual placements

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static GENERATE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directive applied when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "rosterforge_solver=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the RosterForge banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let default_directive = DEFAULT_DIRECTIVE
            .parse::<Directive>()
            .unwrap_or_else(|_| LevelFilter::INFO.into());
        let filter = EnvFilter::builder()
            .with_default_directive(default_directive)
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RosterConsoleLayer)
            .try_init();
    });
}

// Marks the start of generation for elapsed time tracking.
fn mark_generate_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    GENERATE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since generation start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = GENERATE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 ____            _            _____
|  _ \ ___  ___ | |_ ___ _ __|  ___|__  _ __ __ _  ___
| |_) / _ \/ __|| __/ _ \ '__| |_ / _ \| '__/ _` |/ _ \
|  _ < (_) \__ \| ||  __/ |  |  _| (_) | | | (_| |  __/
|_| \_\___/|___/ \__\___|_|  |_|  \___/|_|  \__, |\___|
                                            |___/
"#;

    let version_line = format!("                   v{} - Balanced Team Generator\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats generator events with colors.
pub struct RosterConsoleLayer;

impl<S: Subscriber> Layer<S> for RosterConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !target.starts_with("rosterforge_solver") && !target.starts_with("rosterforge::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    score: Option<String>,
    player: Option<String>,
    team: Option<String>,
    error: Option<String>,
    player_count: Option<u64>,
    team_count: Option<u64>,
    constraint_count: Option<u64>,
    history_pairs: Option<u64>,
    attempt: Option<u64>,
    team_index: Option<u64>,
    fallback_placements: Option<u64>,
    threads: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "score" => self.score = Some(s),
            "player" => self.player = Some(s),
            "team" => self.team = Some(s),
            "error" => self.error = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "player_count" => self.player_count = Some(value),
            "team_count" => self.team_count = Some(value),
            "constraint_count" => self.constraint_count = Some(value),
            "history_pairs" => self.history_pairs = Some(value),
            "attempt" => self.attempt = Some(value),
            "team_index" => self.team_index = Some(value),
            "fallback_placements" => self.fallback_placements = Some(value),
            "threads" => self.threads = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "score" => self.score = Some(value.to_string()),
            "player" => self.player = Some(value.to_string()),
            "team" => self.team = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "generate_start" => format_generate_start(v),
        "generate_end" => format_generate_end(v),
        "generate_skipped" => format_generate_skipped(v),
        "attempt" => format_attempt(v),
        "fallback_placement" => format_fallback(v),
        "constraints_unsatisfied" => format_unsatisfied(v),
        "placement" => format_placement(v, level),
        "redistribute" => format_redistribute(v),
        "redistribute_dropped" => format_redistribute_dropped(v),
        "thread_pool_failed" => format_thread_pool_failed(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_generate_start(v: &EventVisitor) -> String {
    mark_generate_start();
    let players = v.player_count.unwrap_or(0);
    let teams = v.team_count.unwrap_or(0);
    let constraints = v.constraint_count.unwrap_or(0);
    let pairs = v.history_pairs.unwrap_or(0);

    let mut output = format!(
        "{} {} Generating │ {} players │ {} teams",
        format_elapsed(),
        "▶".bright_green().bold(),
        players.to_formatted_string(&Locale::en).bright_yellow(),
        teams.to_formatted_string(&Locale::en).bright_yellow(),
    );

    if constraints > 0 {
        output.push_str(&format!(
            " │ {} constraints",
            constraints.to_formatted_string(&Locale::en).bright_yellow()
        ));
    }

    if pairs > 0 {
        output.push_str(&format!(
            " │ {} recent pairings",
            pairs.to_formatted_string(&Locale::en).bright_magenta()
        ));
    }

    output
}

fn format_generate_end(v: &EventVisitor) -> String {
    let score = v.score.as_deref().unwrap_or("N/A");
    let attempt = v.attempt.map_or_else(|| "?".to_string(), |a| (a + 1).to_string());

    format!(
        "{} {} Teams ready │ {} │ best of attempt {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_score(score),
        attempt.white().bold(),
    )
}

fn format_generate_skipped(v: &EventVisitor) -> String {
    format!(
        "{} {} Not enough players │ {} active",
        format_elapsed(),
        "○".bright_black(),
        v.player_count.unwrap_or(0).yellow(),
    )
}

fn format_attempt(v: &EventVisitor) -> String {
    let attempt = v.attempt.unwrap_or(0) + 1;
    let score = v.score.as_deref().unwrap_or("N/A");

    let mut output = format!(
        "{} {} Attempt {:>3} │ {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        attempt.to_string().white(),
        format_score(score),
    );

    if let Some(fallbacks) = v.fallback_placements.filter(|&n| n > 0) {
        output.push_str(&format!(" │ {} forced", fallbacks.bright_red()));
    }

    output
}

fn format_fallback(v: &EventVisitor) -> String {
    format!(
        "{} {} {} placed on team {} ignoring constraints",
        format_elapsed(),
        "!".bright_yellow().bold(),
        v.player.as_deref().unwrap_or("?").white(),
        v.team_index.unwrap_or(0) + 1,
    )
}

fn format_unsatisfied(v: &EventVisitor) -> String {
    format!(
        "{} {} Constraints not fully satisfiable │ {} forced placements",
        format_elapsed(),
        "⚠".yellow(),
        v.fallback_placements.unwrap_or(0).yellow(),
    )
}

fn format_placement(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} {} → team {}",
        format_elapsed(),
        "·".bright_black(),
        v.player.as_deref().unwrap_or("?").bright_black(),
        (v.team_index.unwrap_or(0) + 1).bright_black(),
    )
}

fn format_redistribute(v: &EventVisitor) -> String {
    format!(
        "{} {} Moved {} to {}",
        format_elapsed(),
        "↔".bright_blue(),
        v.player.as_deref().unwrap_or("?").white().bold(),
        v.team.as_deref().unwrap_or("?").white(),
    )
}

fn format_redistribute_dropped(v: &EventVisitor) -> String {
    format!(
        "{} {} {} could not join {} and is unassigned",
        format_elapsed(),
        "✗".bright_red(),
        v.player.as_deref().unwrap_or("?").white().bold(),
        v.team.as_deref().unwrap_or("?").white(),
    )
}

fn format_thread_pool_failed(v: &EventVisitor) -> String {
    format!(
        "{} {} Could not start {} threads ({}), running sequentially",
        format_elapsed(),
        "⚠".bright_yellow(),
        v.threads.unwrap_or(0),
        v.error.as_deref().unwrap_or("unknown error"),
    )
}

/// Colors a score by its composite value, the leading number.
fn format_score(score: &str) -> String {
    let composite = score
        .split_whitespace()
        .next()
        .and_then(|n| n.parse::<f64>().ok());

    match composite {
        Some(n) if n < 1.0 => score.bright_green().to_string(),
        Some(n) if n < 3.0 => score.yellow().to_string(),
        Some(_) => score.bright_red().to_string(),
        None => score.white().to_string(),
    }
}
