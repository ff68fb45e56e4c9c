//! Run configuration from environment variables and the command line.
//!
//! | Variable              | Default          | Meaning                          |
//! |-----------------------|------------------|----------------------------------|
//! | `FASTBOX_INPUT`       | `base_case.json` | input file for `run`             |
//! | `FASTBOX_OUTPUT_DIR`  | `output`         | where reports are written        |
//! | `FASTBOX_CASES_DIR`   | `Test_cases`     | directory scanned by `cases`     |
//! | `FASTBOX_DELAY`       | `true`           | inject random delays in `run`    |
//! | `FASTBOX_SEED`        | *(entropy)*      | seed for the delay draws         |
//! | `FASTBOX_JOIN_AGENTS` | *(none)*         | `ID:X,Y;ID:X,Y` agents to add    |

use std::path::PathBuf;

use fb_core::{Agent, Point};
use fb_sim::SimConfig;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },

    #[error("unknown command {0:?} (expected `run` or `cases`)")]
    UnknownCommand(String),

    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Assign, simulate, and write `report.json` + `top_agent.csv`.
    Run { input: PathBuf },
    /// Replay every test case in a directory in deterministic mode.
    Cases { dir: PathBuf },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input:       PathBuf,
    pub output_dir:  PathBuf,
    pub cases_dir:   PathBuf,
    pub delay:       bool,
    pub seed:        Option<u64>,
    pub join_agents: Vec<Agent>,
}

impl RunConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let delay = match get("FASTBOX_DELAY") {
            Some(v) => parse_bool("FASTBOX_DELAY", &v)?,
            None => true,
        };

        let seed = get("FASTBOX_SEED")
            .map(|v| {
                v.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                    var:    "FASTBOX_SEED",
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let join_agents = match get("FASTBOX_JOIN_AGENTS") {
            Some(v) => parse_join_agents(&v)?,
            None => Vec::new(),
        };

        Ok(Self {
            input:       get("FASTBOX_INPUT").unwrap_or_else(|| "base_case.json".into()).into(),
            output_dir:  get("FASTBOX_OUTPUT_DIR").unwrap_or_else(|| "output".into()).into(),
            cases_dir:   get("FASTBOX_CASES_DIR").unwrap_or_else(|| "Test_cases".into()).into(),
            delay,
            seed,
            join_agents,
        })
    }

    pub fn sim_config(&self) -> SimConfig {
        if self.delay {
            SimConfig::with_delay(self.seed)
        } else {
            SimConfig { delay: None, seed: self.seed }
        }
    }

    /// Resolve the command from arguments (program name already stripped).
    ///
    /// `fastbox [run] [INPUT]` or `fastbox cases [DIR]`; a missing path falls
    /// back to the configured one.
    pub fn command<I>(&self, args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let (cmd, path) = match args.next() {
            None => (Command::Run { input: self.input.clone() }, None),
            Some(first) => match first.as_str() {
                "run" => (Command::Run { input: self.input.clone() }, args.next()),
                "cases" => (Command::Cases { dir: self.cases_dir.clone() }, args.next()),
                other if other.ends_with(".json") => (Command::Run { input: self.input.clone() }, Some(first)),
                _ => return Err(ConfigError::UnknownCommand(first)),
            },
        };

        if let Some(extra) = args.next() {
            return Err(ConfigError::UnexpectedArgument(extra));
        }

        Ok(match (cmd, path) {
            (Command::Run { .. }, Some(p)) => Command::Run { input: p.into() },
            (Command::Cases { .. }, Some(p)) => Command::Cases { dir: p.into() },
            (cmd, None) => cmd,
        })
    }
}

fn parse_bool(var: &'static str, v: &str) -> Result<bool, ConfigError> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            var,
            reason: format!("{other:?} is not a boolean"),
        }),
    }
}

/// `"A4:20,20;A5:1.5,-2"` → two agents.
fn parse_join_agents(v: &str) -> Result<Vec<Agent>, ConfigError> {
    let invalid = |entry: &str| ConfigError::InvalidValue {
        var:    "FASTBOX_JOIN_AGENTS",
        reason: format!("{entry:?} is not of the form ID:X,Y"),
    };

    v.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (id, coords) = entry.split_once(':').ok_or_else(|| invalid(entry))?;
            let (x, y) = coords.split_once(',').ok_or_else(|| invalid(entry))?;
            let x: f64 = x.trim().parse().map_err(|_| invalid(entry))?;
            let y: f64 = y.trim().parse().map_err(|_| invalid(entry))?;
            let id = id.trim();
            if id.is_empty() {
                return Err(invalid(entry));
            }
            Ok(Agent::new(id, Point::new(x, y)))
        })
        .collect()
}
