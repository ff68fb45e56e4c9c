//! fastbox: nearest-agent package assignment and delivery simulation.
//!
//! ```text
//! fastbox [run] [INPUT]   assign + simulate INPUT, write report.json and top_agent.csv
//! fastbox cases [DIR]     replay every *.json test case in DIR deterministically
//! ```
//!
//! See [`config`] for the environment variables; `RUST_LOG` controls logging.

mod cases;
mod config;
mod pipeline;


use anyhow::{Result, bail};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Command, RunConfig};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fastbox=info,fb_assign=info,fb_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RunConfig::from_env()?;
    match config.command(std::env::args().skip(1))? {
        Command::Run { input } => {
            info!(delay = config.delay, seed = ?config.seed, "starting run");
            pipeline::run(&config, &input)?;
        }
        Command::Cases { dir } => {
            let outcomes = cases::run_cases(&dir, &config.output_dir)?;
            let failed = outcomes.iter().filter(|o| !o.passed()).count();
            info!(total = outcomes.len(), failed, "test cases finished");
            if failed > 0 {
                bail!("{failed} of {} test cases failed", outcomes.len());
            }
        }
    }
    Ok(())
}
