//! Scrollcam Harness
//!
//! Runs a camera scenario headlessly and logs the camera pose per frame.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::scenario::Scenario;

mod runner;
mod scenario;

#[derive(Debug, Parser)]
#[command(version, about = "Run a scrollcam scenario and log the camera pose")]
struct Args {
    /// Scenario JSON file. Runs the bundled demo when omitted.
    scenario: Option<PathBuf>,

    /// Log every Nth frame.
    #[arg(long, default_value_t = 10)]
    log_every: u32,

    /// Print every frame as a JSON line on stdout.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading scenario {}", path.display()))?;
            Scenario::from_json(&text).with_context(|| format!("loading scenario {}", path.display()))?
        }
        None => Scenario::builtin().context("loading bundled scenario")?,
    };

    tracing::info!(
        "Running {} frames at dt={:.4}s ({} profiles, {} steps)",
        scenario.frames,
        scenario.dt,
        scenario.profiles.len(),
        scenario.steps.len()
    );

    let records = runner::run(&scenario).context("running scenario")?;
    let log_every = args.log_every.max(1);

    for record in &records {
        if args.json {
            println!("{}", serde_json::to_string(record)?);
        } else if record.frame % log_every == 0 {
            tracing::info!(
                "frame {:>5} {:<12} pos=({:>8.3}, {:>8.3}) size={:.3}{}",
                record.frame,
                record.profile,
                record.position[0],
                record.position[1],
                record.size,
                if record.transitioning { " [transition]" } else { "" }
            );
        }
    }

    if let Some(last) = records.last() {
        tracing::info!(
            "Finished on profile {} at ({:.3}, {:.3})",
            last.profile,
            last.position[0],
            last.position[1]
        );
    }

    Ok(())
}
