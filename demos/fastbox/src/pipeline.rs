//! Assignment → simulation → report, with logging.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use fb_assign::{AssignmentMap, assign_packages};
use fb_core::{AgentId, DeliveryInput};
use fb_input::load_input;
use fb_output::{CsvReportWriter, JsonReportWriter, ReportWriter};
use fb_report::{BestAgent, Report, generate_report};
use fb_sim::{AgentStats, DeliveryEvent, DeliverySim, SimConfig, SimObserver};

use crate::config::RunConfig;

/// Logs each delivery at `debug` and each finished agent at `info`.
pub struct LoggingObserver;

impl SimObserver for LoggingObserver {
    fn on_delivery(&mut self, event: &DeliveryEvent<'_>) {
        debug!(
            agent = %event.agent,
            package = %event.package.id,
            leg = event.leg_distance,
            delay = event.delay_distance,
            "delivered"
        );
    }

    fn on_agent_end(&mut self, agent: &AgentId, stats: &AgentStats) {
        info!(
            agent = %agent,
            delivered = stats.packages_delivered,
            total_distance = stats.total_distance,
            efficiency = stats.efficiency,
            "agent summary"
        );
    }
}

pub struct RunOutcome {
    pub map:    AssignmentMap,
    pub report: Report,
}

/// Run the in-memory pipeline on an already loaded input.
pub fn run_pipeline<O: SimObserver>(
    input:    &DeliveryInput,
    config:   SimConfig,
    observer: &mut O,
) -> Result<RunOutcome> {
    let map = assign_packages(input)?;
    for (agent, packages) in map.iter() {
        let ids: Vec<&str> = packages.iter().map(|p| p.id.as_str()).collect();
        debug!(agent = %agent, packages = ?ids, "assignment");
    }

    let mut sim = DeliverySim::new(config)?;
    let stats = sim.run(&map, input, observer)?;
    Ok(RunOutcome { map, report: generate_report(stats) })
}

pub fn write_reports(report: &Report, json_path: &Path, csv_path: &Path) -> Result<()> {
    let mut json = JsonReportWriter::create(json_path)
        .with_context(|| format!("creating {}", json_path.display()))?;
    json.write_report(report)?;
    json.finish()?;

    let mut csv = CsvReportWriter::create(csv_path)
        .with_context(|| format!("creating {}", csv_path.display()))?;
    csv.write_report(report)?;
    csv.finish()?;
    Ok(())
}

/// The `run` command: load, extend the roster, simulate, write both reports.
pub fn run(config: &RunConfig, input_path: &Path) -> Result<Report> {
    let mut input = load_input(input_path)
        .with_context(|| format!("loading {}", input_path.display()))?;
    info!(
        warehouses = input.warehouses.len(),
        agents = input.agents.len(),
        packages = input.packages.len(),
        "loaded {}",
        input_path.display()
    );

    for agent in &config.join_agents {
        info!(agent = %agent.id, location = %agent.location, "agent joined");
        input.add_agent(agent.clone());
    }
    input.validate()?;

    let outcome = run_pipeline(&input, config.sim_config(), &mut LoggingObserver)?;
    let busy = outcome.map.iter().filter(|(_, pkgs)| !pkgs.is_empty()).count();
    info!(
        assigned = outcome.map.package_count(),
        agents = outcome.map.agent_count(),
        busy,
        "assignment complete"
    );

    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;
    write_reports(
        &outcome.report,
        &config.output_dir.join("report.json"),
        &config.output_dir.join("top_agent.csv"),
    )?;

    match &outcome.report.best_agent {
        BestAgent::Agent(id) => info!(best_agent = %id, "simulation complete"),
        BestAgent::NoQualifyingAgent => warn!("simulation complete; no agent delivered any package"),
    }
    Ok(outcome.report)
}
