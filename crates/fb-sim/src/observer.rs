//! Simulation observer trait for progress reporting and data collection.

use fb_core::{AgentId, Package};

use crate::AgentStats;

/// One completed delivery.
#[derive(Clone, Copy, Debug)]
pub struct DeliveryEvent<'a> {
    pub agent:          &'a AgentId,
    pub package:        &'a Package,
    /// Travel to the warehouse plus travel to the destination.
    pub leg_distance:   f64,
    /// Extra distance from an injected delay; `0.0` if none.
    pub delay_distance: f64,
    /// Unrounded running total for this agent, including this delivery.
    pub running_total:  f64,
}

/// Callbacks invoked by [`DeliverySim::run`][crate::DeliverySim::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called before an agent's first delivery.
    fn on_agent_start(&mut self, _agent: &AgentId, _queued: usize) {}

    fn on_delivery(&mut self, _event: &DeliveryEvent<'_>) {}

    /// Called once an agent's list is exhausted, with its final stats.
    fn on_agent_end(&mut self, _agent: &AgentId, _stats: &AgentStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
