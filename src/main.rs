mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use clap::{Parser, Subcommand};
use promptcal_core::{generate_ics, PromptSchedule, UuidSource};

#[derive(Parser)]
#[command(name = "promptcal")]
#[command(about = "Turn an ordered list of daily prompts into an iCalendar file with reminder alarms")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the .ics file from a prompt config
    Generate {
        /// Path to the config file
        #[arg(short, long, default_value = "promptcal.toml")]
        config: PathBuf,

        /// Write here instead of the configured output ("-" for stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Override the configured start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
    },
    /// Validate the config and show what would be generated
    Check {
        /// Path to the config file
        #[arg(short, long, default_value = "promptcal.toml")]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            output,
            start,
        } => cmd_generate(&config, output, start),
        Commands::Check { config } => cmd_check(&config),
    }
}

fn cmd_generate(config_path: &Path, output: Option<String>, start: Option<String>) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    let start_date = match start {
        Some(s) => parse_start_date(&s)?,
        None => cfg.start_date,
    };

    let prompts = config::resolve_prompts(&cfg)?;
    let schedule = PromptSchedule::new(start_date, prompts);
    let document = generate_ics(&schedule, &mut UuidSource, &cfg.ics)?;

    let destination = output.unwrap_or_else(|| cfg.output.clone());
    if destination == "-" {
        print!("{}", document);
        return Ok(());
    }

    let path = config::expand_path(&destination);
    std::fs::write(&path, &document)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "Wrote {} events ({} to {}) to {}",
        schedule.prompts.len(),
        schedule.start_date,
        last_day(&schedule),
        path.display()
    );

    Ok(())
}

fn cmd_check(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let prompts = config::resolve_prompts(&cfg)?;
    let schedule = PromptSchedule::new(cfg.start_date, prompts);

    // Derive events to surface the same errors `generate` would hit
    let mut uids = promptcal_core::SequentialUidSource::new();
    let events = schedule.events(&mut uids, &cfg.ics)?;

    println!(
        "{} prompts, {} to {}",
        events.len(),
        schedule.start_date,
        last_day(&schedule)
    );
    println!(
        "Reminder at {} (UTC offset {})",
        cfg.ics.alarm_time.format("%H:%M"),
        cfg.ics.utc_offset
    );
    println!("Output: {}", cfg.output);

    Ok(())
}

fn parse_start_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid start date '{}', expected YYYY-MM-DD", s))
}

fn last_day(schedule: &PromptSchedule) -> NaiveDate {
    schedule.start_date + Duration::days(schedule.prompts.len().saturating_sub(1) as i64)
}
