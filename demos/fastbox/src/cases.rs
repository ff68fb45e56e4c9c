//! Batch runner over a directory of JSON test cases.
//!
//! Each case runs in deterministic mode and must deliver every package it
//! lists.  A flat report per case lands in `<output>/test_case_report/`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info};

use fb_input::load_input;
use fb_output::{CsvReportWriter, ReportWriter};
use fb_sim::{NoopObserver, SimConfig};

use crate::pipeline::run_pipeline;

#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    pub name:      String,
    pub expected:  usize,
    pub delivered: u64,
    /// Load or pipeline failure, if the case never produced a report.
    pub error:     Option<String>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.delivered == self.expected as u64
    }
}

/// `*.json` files in `dir`, sorted by file name.
pub fn case_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "json") {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

pub fn run_cases(dir: &Path, output_dir: &Path) -> Result<Vec<CaseOutcome>> {
    let report_dir = output_dir.join("test_case_report");
    fs::create_dir_all(&report_dir)
        .with_context(|| format!("creating {}", report_dir.display()))?;

    let mut outcomes = Vec::new();
    for path in case_files(dir)? {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let outcome = match run_case(&path, &report_dir.join(format!("{name}_report.csv"))) {
            Ok((expected, delivered)) => CaseOutcome { name, expected, delivered, error: None },
            Err(e) => CaseOutcome { name, expected: 0, delivered: 0, error: Some(format!("{e:#}")) },
        };

        if let Some(e) = &outcome.error {
            error!(case = %outcome.name, "ERROR: {e}");
        } else if outcome.passed() {
            info!(case = %outcome.name, expected = outcome.expected, delivered = outcome.delivered, "PASS");
        } else {
            error!(case = %outcome.name, expected = outcome.expected, delivered = outcome.delivered, "FAIL");
        }
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// Returns `(package count, packages delivered)`.
fn run_case(path: &Path, csv_path: &Path) -> Result<(usize, u64)> {
    let input = load_input(path).with_context(|| format!("loading {}", path.display()))?;
    let outcome = run_pipeline(&input, SimConfig::deterministic(), &mut NoopObserver)?;

    let mut csv = CsvReportWriter::create(csv_path)?;
    csv.write_report(&outcome.report)?;
    csv.finish()?;

    Ok((input.packages.len(), outcome.report.total_delivered()))
}
