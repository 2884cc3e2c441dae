mod config;
mod controller;
mod submitter;

use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use intake_core::{RosterStore, WizardController};
use shared::domain::Step;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    controller::{orchestration::replay_script, session::IntakeSession},
    submitter::LoggingSubmitter,
};

#[derive(Parser, Debug)]
#[command(about = "Non-client project intake wizard")]
struct Cli {
    /// Settings file; `intake.toml` in the working directory is used if present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the step table with titles.
    Steps,
    /// Suggest directory emails containing `partial`.
    Suggest { partial: String },
    /// Replay a JSON-lines script of wizard actions.
    Run {
        script: PathBuf,
        /// Print the review summary after the last action.
        #[arg(long)]
        review: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = config::load_settings(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Steps => print_steps(&mut out)?,
        Command::Suggest { partial } => {
            for email in RosterStore::suggest_emails(&partial, &settings.email_directory) {
                writeln!(out, "{email}")?;
            }
        }
        Command::Run { script, review } => {
            let file = File::open(&script)
                .with_context(|| format!("failed to open script '{}'", script.display()))?;
            let mut session = IntakeSession::new();
            let stats =
                replay_script(&mut session, BufReader::new(file), &LoggingSubmitter, &mut out)
                    .await?;
            info!(
                applied = stats.applied,
                rejected = stats.rejected,
                roster = session.roster().len(),
                step = %session.step(),
                "script finished"
            );
            if review {
                serde_json::to_writer_pretty(&mut out, &session.review())?;
                writeln!(out)?;
            }
        }
    }

    Ok(())
}

fn print_steps(out: &mut impl Write) -> Result<()> {
    let mut wizard = WizardController::new();
    for step in Step::ALL {
        let title = WizardController::metadata(step)
            .map(|meta| meta.title)
            .unwrap_or("(submission complete)");
        let next = wizard.advance();
        writeln!(out, "{:<20} {title:<24} -> {}", step.as_str(), next.as_str())?;
    }
    Ok(())
}
