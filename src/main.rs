//! timetable-studio command line
//!
//! Usage:
//!     timetable-studio encode --set days=Monday,Tuesday
//!     timetable-studio render response.json --days Monday,Tuesday
//!     timetable-studio generate --endpoint http://localhost:5000/generate-timetable
//!
//! The browser front-end is the separate `studio` binary.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timetable_studio::client::DEFAULT_ENDPOINT;
use timetable_studio::config::split_list;
use timetable_studio::{
    encode, normalize_value, project, render_text_table, HttpScheduleClient, RawConfig, Submission,
    SubmissionState,
};

#[derive(Parser, Debug)]
#[command(name = "timetable-studio", about = "Submit scheduling parameters and print the returned timetable")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the request body built from the default form plus overrides
    Encode {
        /// Form field override, e.g. `--set batches=K4,L4` (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,
    },
    /// Normalize a saved scheduler response and print it as a table
    Render {
        /// JSON file holding the scheduler's response body
        file: PathBuf,
        /// Comma-separated day columns (defaults to the days in the response)
        #[arg(long)]
        days: Option<String>,
    },
    /// Submit the form to the scheduler and print the timetable
    Generate {
        /// Scheduler endpoint
        #[arg(long, env = "TIMETABLE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
        /// Form field override, e.g. `--set days=Monday,Tuesday` (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timetable_studio=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match args.command {
        Command::Encode { overrides } => {
            let raw = form_with_overrides(&overrides)?;
            println!("{}", encode(&raw).to_json_pretty()?);
        }
        Command::Render { file, days } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let value: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("{} is not JSON", file.display()))?;
            let grid = normalize_value(&value)?;
            if grid.skipped() > 0 {
                eprintln!("note: {} malformed entries were left out", grid.skipped());
            }
            let days = match days {
                Some(d) => split_list(&d),
                None => grid.columns().to_vec(),
            };
            print!("{}", render_text_table(&project(&grid, days.as_slice())));
        }
        Command::Generate { endpoint, overrides } => {
            let raw = form_with_overrides(&overrides)?;
            let request = encode(&raw);
            let client = HttpScheduleClient::new(endpoint);

            let mut submission = Submission::new();
            match submission.run(&client, request.clone())? {
                SubmissionState::Succeeded { grid, .. } => {
                    print!("{}", render_text_table(&project(grid, request.days.as_slice())));
                }
                SubmissionState::Failed { message, .. } => {
                    eprintln!("{}", message);
                    std::process::exit(1);
                }
                other => bail!("submission ended in unexpected state {:?}", other),
            }
        }
    }
    Ok(())
}

fn form_with_overrides(overrides: &[String]) -> anyhow::Result<RawConfig> {
    let mut raw = RawConfig::default();
    for assignment in overrides {
        if !raw.apply_override(assignment) {
            bail!("unknown form field in '{}'", assignment);
        }
    }
    Ok(raw)
}
