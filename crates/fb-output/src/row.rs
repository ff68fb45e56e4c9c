//! Flat row type for tabular backends.

use fb_report::Report;
use serde::Serialize;

/// One agent's line in the flat report.
///
/// `status` is `"best_agent"` for the selected agent and empty otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentReportRow {
    pub agent:              String,
    pub packages_delivered: u32,
    pub total_distance:     f64,
    pub efficiency:         f64,
    pub status:             &'static str,
}

impl AgentReportRow {
    pub const BEST_STATUS: &'static str = "best_agent";

    /// Rows for every agent in `report`, in report order.
    pub fn from_report(report: &Report) -> Vec<AgentReportRow> {
        report
            .agents
            .iter()
            .map(|(id, s)| AgentReportRow {
                agent:              id.to_string(),
                packages_delivered: s.packages_delivered,
                total_distance:     s.total_distance,
                efficiency:         s.efficiency,
                status:             if report.is_best(id) { Self::BEST_STATUS } else { "" },
            })
            .collect()
    }
}
