//! `eventflow` CLI — check venue conflicts, suggest free slots, and browse events.
//!
//! ## Usage
//!
//! ```sh
//! # Is Lecture Hall B free on 2025-01-28 from 12:00 to 14:00? (sample data)
//! eventflow check --date 2025-01-28 --start 12:00 --end 14:00 --venue "Lecture Hall B"
//!
//! # Same check against your own events, ignoring the event being edited
//! eventflow -i events.json check --date 2025-01-28 --start 12:00 --end 14:00 \
//!   --venue "Lecture Hall B" --exclude 3
//!
//! # Free 90-minute windows on a day
//! eventflow suggest --date 2025-02-10 --duration 1.5
//!
//! # Browse
//! eventflow list --search ai --type workshop --sort attendees --desc
//!
//! # Dashboard numbers as JSON
//! eventflow --json stats
//! ```
//!
//! Events are read from `--input` (a JSON array) or default to the built-in
//! sample data. Set `RUST_LOG` or pass `--debug` for diagnostics on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eventflow::analytics::{events_by_department, events_by_type, DashboardStats};
use eventflow::feed::{EventQuery, SortDirection, SortKey};
use eventflow::form::{check_schedule, EventDraft, ScheduleCheck};
use eventflow::seed::seed_events;
use eventflow::{events_from_json, suggest_slot_intervals, Event, EventType, SchedulerConfig};
use serde_json::json;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "eventflow",
    version,
    about = "Campus event scheduling: venue conflicts, free slots, and browsing"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file holding an array of events (sample data if omitted)
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// TOML file overriding the suggestion slot grid and cap
    #[arg(long, global = true)]
    config: Option<String>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a proposed booking for venue conflicts
    Check {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Start time (HH:MM, 24-hour)
        #[arg(long)]
        start: String,
        /// End time (HH:MM, 24-hour)
        #[arg(long)]
        end: String,
        /// Venue, matched exactly
        #[arg(long)]
        venue: String,
        /// Id of the event being edited, left out of the check
        #[arg(long)]
        exclude: Option<String>,
    },
    /// Suggest free start times on a day
    Suggest {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Length in hours (fractions allowed)
        #[arg(long)]
        duration: f64,
    },
    /// List events, filtered and sorted
    List {
        /// Case-insensitive text over title, description and tags
        #[arg(long, default_value = "")]
        search: String,
        /// Event type (seminar, fest, workshop, sports, cultural, academic, social)
        #[arg(long = "type")]
        event_type: Option<EventType>,
        #[arg(long)]
        department: Option<String>,
        /// Only events on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Sort key: date, title, attendees, type
        #[arg(long, default_value = "date")]
        sort: SortKey,
        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
    /// Show dashboard statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let events = load_events(cli.input.as_deref())?;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Check {
            date,
            start,
            end,
            venue,
            exclude,
        } => {
            let draft = EventDraft {
                date,
                start_time: start,
                end_time: end,
                venue,
                ..Default::default()
            };
            let check = check_schedule(&draft, &events, exclude.as_deref(), &config)
                .context("Failed to check schedule")?;
            print_check(&draft, &check, &events, cli.json)?;
        }
        Commands::Suggest { date, duration } => {
            let slots = suggest_slot_intervals(&config, &date, duration, &events)
                .context("Failed to suggest slots")?;
            if cli.json {
                let shown: Vec<String> = slots.iter().map(ToString::to_string).collect();
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else if slots.is_empty() {
                println!("No free slots on {}", date);
            } else {
                for slot in &slots {
                    println!("{}", slot);
                }
            }
        }
        Commands::List {
            search,
            event_type,
            department,
            date,
            sort,
            desc,
        } => {
            let query = EventQuery {
                search,
                event_type,
                department,
                date,
                sort_by: sort,
                direction: if desc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                },
            };
            let selected = query.apply(&events);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&selected)?);
            } else {
                for event in &selected {
                    println!("{}", describe(event));
                }
                let n = selected.len();
                println!("{} event{} found", n, if n == 1 { "" } else { "s" });
            }
        }
        Commands::Stats => {
            let stats = DashboardStats::compute(&events);
            let by_type = events_by_type(&events);
            let by_department = events_by_department(&events);
            if cli.json {
                let by_type: serde_json::Map<String, serde_json::Value> = by_type
                    .iter()
                    .map(|(t, n)| (t.to_string(), json!(n)))
                    .collect();
                let out = json!({
                    "stats": stats,
                    "byType": by_type,
                    "byDepartment": by_department,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Total events:      {}", stats.total_events);
                println!("Upcoming:          {}", stats.upcoming_events);
                println!("Completed:         {}", stats.completed_events);
                println!("Cancelled:         {}", stats.cancelled_events);
                println!("Total attendees:   {}", stats.total_attendees);
                println!("Avg attendance:    {}", stats.average_attendance);
                println!("Completion rate:   {}%", stats.completion_rate);
                println!();
                println!("By type:");
                for (event_type, n) in &by_type {
                    println!("  {:<12} {}", event_type.label(), n);
                }
                println!("By department:");
                for (department, n) in &by_department {
                    println!("  {:<24} {}", department, n);
                }
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean for piping.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_events(path: Option<&str>) -> Result<Vec<Event>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path))?;
            let events = events_from_json(&raw)
                .with_context(|| format!("Failed to parse events from {}", path))?;
            tracing::debug!(count = events.len(), path, "loaded events");
            Ok(events)
        }
        None => Ok(seed_events()),
    }
}

fn load_config(path: Option<&str>) -> Result<SchedulerConfig> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path))?;
            SchedulerConfig::from_toml_str(&raw)
                .with_context(|| format!("Invalid config in {}", path))
        }
        None => Ok(SchedulerConfig::default()),
    }
}

fn print_check(draft: &EventDraft, check: &ScheduleCheck, events: &[Event], as_json: bool) -> Result<()> {
    if as_json {
        let out = match check {
            ScheduleCheck::Incomplete => json!({ "status": "incomplete" }),
            ScheduleCheck::Clear => json!({ "status": "clear", "conflict": false }),
            ScheduleCheck::Conflict {
                conflicting_ids,
                suggestions,
            } => json!({
                "status": "conflict",
                "conflict": true,
                "conflictingIds": conflicting_ids,
                "suggestions": suggestions.iter().map(ToString::to_string).collect::<Vec<_>>(),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    match check {
        ScheduleCheck::Incomplete => {
            println!("Incomplete: date, start, end and venue are all required");
        }
        ScheduleCheck::Clear => {
            println!(
                "No conflict: {} is free on {} {}-{}",
                draft.venue, draft.date, draft.start_time, draft.end_time
            );
        }
        ScheduleCheck::Conflict {
            conflicting_ids,
            suggestions,
        } => {
            println!("Conflict: {} is booked on {}", draft.venue, draft.date);
            for id in conflicting_ids {
                if let Some(event) = events.iter().find(|e| &e.id == id) {
                    println!(
                        "  - [{}] {} ({}-{})",
                        event.id, event.title, event.start_time, event.end_time
                    );
                }
            }
            if suggestions.is_empty() {
                println!("No alternative slots on {}", draft.date);
            } else {
                println!("Suggested times:");
                for slot in suggestions {
                    println!("  {}", slot);
                }
            }
        }
    }
    Ok(())
}

fn describe(event: &Event) -> String {
    let capacity = match event.max_attendees {
        Some(max) => max.to_string(),
        None => "Unlimited".to_string(),
    };
    format!(
        "{} {}-{}  {}  [{}] @ {}  {}/{}",
        event.date,
        event.start_time,
        event.end_time,
        event.title,
        event.event_type,
        event.venue,
        event.current_attendees,
        capacity
    )
}
