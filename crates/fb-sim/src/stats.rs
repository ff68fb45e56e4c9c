//! Per-agent simulation results.

use fb_core::AgentId;
use serde::Serialize;

/// Round to two decimal places; an exact half goes to the even neighbour.
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}

/// What one agent achieved over the run.
///
/// `total_distance` and `efficiency` are rounded to two decimals.
/// `efficiency` is distance per delivered package (lower is better) and is
/// `0.0` when nothing was delivered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct AgentStats {
    pub packages_delivered: u32,
    pub total_distance:     f64,
    pub efficiency:         f64,
}

impl AgentStats {
    /// Build rounded stats from the raw tally.
    pub fn from_totals(delivered: u32, total_distance: f64) -> Self {
        let efficiency = if delivered > 0 {
            total_distance / f64::from(delivered)
        } else {
            0.0
        };
        Self {
            packages_delivered: delivered,
            total_distance:     round2(total_distance),
            efficiency:         round2(efficiency),
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.packages_delivered == 0
    }
}

/// Stats for every agent in the assignment map, in roster order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimStats {
    agents: Vec<(AgentId, AgentStats)>,
}

impl SimStats {
    pub fn push(&mut self, agent: AgentId, stats: AgentStats) {
        self.agents.push((agent, stats));
    }

    pub fn get(&self, agent: &str) -> Option<&AgentStats> {
        self.agents
            .iter()
            .find(|(id, _)| id.as_str() == agent)
            .map(|(_, s)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AgentId, &AgentStats)> {
        self.agents.iter().map(|(id, s)| (id, s))
    }

    /// Sum of `packages_delivered` over all agents.
    pub fn total_delivered(&self) -> u64 {
        self.agents
            .iter()
            .map(|(_, s)| u64::from(s.packages_delivered))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn into_inner(self) -> Vec<(AgentId, AgentStats)> {
        self.agents
    }
}

impl FromIterator<(AgentId, AgentStats)> for SimStats {
    fn from_iter<I: IntoIterator<Item = (AgentId, AgentStats)>>(iter: I) -> Self {
        Self { agents: iter.into_iter().collect() }
    }
}
