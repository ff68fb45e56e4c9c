//! Per-agent ordered package lists.

use std::collections::HashMap;

use fb_core::{AgentId, Package};

use crate::{AssignError, AssignResult};

/// Agent id → packages that agent will deliver, in delivery order.
///
/// Agents are kept in roster order, including agents that received nothing.
/// Packages within an agent keep the order they were pushed, which is the
/// input package order when built by [`assign_packages`][crate::assign_packages].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssignmentMap {
    entries: Vec<(AgentId, Vec<Package>)>,
    slots:   HashMap<AgentId, usize>,
}

impl AssignmentMap {
    /// An empty map with one (empty) slot per agent, in the given order.
    pub fn with_agents<I>(agents: I) -> AssignResult<Self>
    where
        I: IntoIterator<Item = AgentId>,
    {
        let mut map = Self::default();
        for id in agents {
            map.insert_agent(id)?;
        }
        Ok(map)
    }

    /// Add an empty slot for `agent`, returning its slot index.
    pub fn insert_agent(&mut self, agent: AgentId) -> AssignResult<usize> {
        if self.slots.contains_key(&agent) {
            return Err(AssignError::DuplicateAgent(agent));
        }
        let slot = self.entries.len();
        self.slots.insert(agent.clone(), slot);
        self.entries.push((agent, Vec::new()));
        Ok(slot)
    }

    /// Append `package` to the agent at `slot`.
    ///
    /// # Panics
    /// If `slot` was not returned by [`insert_agent`][Self::insert_agent].
    pub fn push(&mut self, slot: usize, package: Package) {
        self.entries[slot].1.push(package);
    }

    /// Append `package` to `agent`'s list, creating the slot if needed.
    pub fn push_for(&mut self, agent: &AgentId, package: Package) {
        let slot = match self.slots.get(agent) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.slots.insert(agent.clone(), slot);
                self.entries.push((agent.clone(), Vec::new()));
                slot
            }
        };
        self.entries[slot].1.push(package);
    }

    pub fn get(&self, agent: &str) -> Option<&[Package]> {
        self.slots.get(agent).map(|&slot| self.entries[slot].1.as_slice())
    }

    /// The agent a package was assigned to, if any.
    pub fn agent_for(&self, package: &str) -> Option<&AgentId> {
        self.entries
            .iter()
            .find(|(_, pkgs)| pkgs.iter().any(|p| p.id.as_str() == package))
            .map(|(agent, _)| agent)
    }

    /// `(agent, packages)` pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (&AgentId, &[Package])> {
        self.entries.iter().map(|(a, p)| (a, p.as_slice()))
    }

    pub fn agent_count(&self) -> usize {
        self.entries.len()
    }

    pub fn package_count(&self) -> usize {
        self.entries.iter().map(|(_, p)| p.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
