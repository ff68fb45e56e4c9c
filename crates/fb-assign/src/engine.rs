//! Nearest-agent assignment.
//!
//! Each package goes to the agent whose *starting* location is closest to the
//! package's warehouse.  Agent positions are never advanced during
//! assignment, so the result depends only on the roster and warehouse
//! locations, not on what other packages were assigned.
//!
//! Ties go to the agent listed first.

use fb_core::{Agent, DeliveryInput, Point};
use tracing::debug;

use crate::{AssignError, AssignResult, AssignmentMap};

/// Index and distance of the agent nearest `target`.
///
/// Scans every agent; a later agent replaces the current best only when it
/// is strictly closer.  Returns `None` for an empty roster.
pub fn nearest_agent(agents: &[Agent], target: Point) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, agent) in agents.iter().enumerate() {
        let d = agent.location.distance(target);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }
    best
}

/// Assign every package in `input` to its nearest agent.
///
/// The map has one entry per agent in roster order, including agents that
/// receive nothing.  Fails on the first package whose warehouse is unknown,
/// or on the first package at all when the roster is empty.  No partial map
/// is returned on failure.
pub fn assign_packages(input: &DeliveryInput) -> AssignResult<AssignmentMap> {
    let warehouses = input.warehouse_locations();
    let mut map = AssignmentMap::with_agents(input.agents.iter().map(|a| a.id.clone()))?;

    for package in &input.packages {
        let Some(&location) = warehouses.get(package.warehouse.as_str()) else {
            return Err(AssignError::UnknownWarehouse {
                package:   package.id.clone(),
                warehouse: package.warehouse.clone(),
            });
        };

        let (slot, distance) = nearest_agent(&input.agents, location)
            .ok_or_else(|| AssignError::NoAgents { package: package.id.clone() })?;

        debug!(
            package = %package.id,
            agent = %input.agents[slot].id,
            distance,
            "assigned package"
        );
        map.push(slot, package.clone());
    }

    Ok(map)
}
