//! The `Report` type and best-agent selection.

use fb_core::AgentId;
use fb_sim::{AgentStats, SimStats};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Outcome of best-agent selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BestAgent {
    Agent(AgentId),
    /// No agent delivered anything (or there were no agents).
    NoQualifyingAgent,
}

impl BestAgent {
    pub fn agent(&self) -> Option<&AgentId> {
        match self {
            BestAgent::Agent(id) => Some(id),
            BestAgent::NoQualifyingAgent => None,
        }
    }
}

/// Per-agent stats in roster order plus the selected best agent.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub agents:     Vec<(AgentId, AgentStats)>,
    pub best_agent: BestAgent,
}

impl Report {
    pub fn is_best(&self, agent: &AgentId) -> bool {
        self.best_agent.agent() == Some(agent)
    }

    pub fn get(&self, agent: &str) -> Option<&AgentStats> {
        self.agents
            .iter()
            .find(|(id, _)| id.as_str() == agent)
            .map(|(_, s)| s)
    }

    pub fn total_delivered(&self) -> u64 {
        self.agents
            .iter()
            .map(|(_, s)| u64::from(s.packages_delivered))
            .sum()
    }
}

/// Lowest efficiency among agents with deliveries; the earlier agent wins a tie.
pub fn select_best_agent(stats: &SimStats) -> BestAgent {
    let mut best: Option<(&AgentId, f64)> = None;
    for (id, s) in stats.iter().filter(|(_, s)| !s.is_idle()) {
        if best.is_none_or(|(_, e)| s.efficiency < e) {
            best = Some((id, s.efficiency));
        }
    }
    best.map_or(BestAgent::NoQualifyingAgent, |(id, _)| BestAgent::Agent(id.clone()))
}

pub fn generate_report(stats: SimStats) -> Report {
    let best_agent = select_best_agent(&stats);
    Report {
        agents: stats.into_inner(),
        best_agent,
    }
}

/// Record-of-records form: each agent id maps to its stats, followed by a
/// top-level `best_agent` (a string, or `null` when no agent qualifies).
/// Agents keep roster order.
impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.agents.len() + 1))?;
        for (id, stats) in &self.agents {
            map.serialize_entry(id, stats)?;
        }
        map.serialize_entry("best_agent", &self.best_agent.agent())?;
        map.end()
    }
}
