//! Terminal front end for the patient queue.
//!
//! Reads one command per line from stdin and prints the outcome, standing in
//! for the admission desk form.

mod commands;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use patient_queue_core::{PatientQueueService, QueueConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{execute, parse_line, Command, HELP};

#[derive(Parser)]
#[command(name = "patient-queue", about = "Hospital patient queue management")]
struct Cli {
    /// JSON queue configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Accept priorities outside the configured range
    #[arg(long)]
    no_enforce_range: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => QueueConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => QueueConfig::default(),
    };
    if cli.no_enforce_range {
        config.enforce_priority_range = false;
    }

    let mut service = PatientQueueService::with_config(config)?;
    info!(
        threshold = service.config().emergency_threshold,
        enforce_range = service.config().enforce_priority_range,
        "patient queue ready"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", HELP)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => writeln!(stdout, "{}", execute(&mut service, command))?,
            Err(message) => writeln!(stdout, "{}", message)?,
        }
        stdout.flush()?;
    }

    Ok(())
}
