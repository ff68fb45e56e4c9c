//! The `DeliverySim` runner.

use fb_assign::AssignmentMap;
use fb_core::{AgentId, DeliveryInput, Package, SimRng};
use tracing::{debug, trace};

use crate::{AgentStats, DeliveryEvent, NoopObserver, SimConfig, SimError, SimObserver, SimResult, SimStats};

/// Replays assignment maps against the input's warehouse and agent data.
///
/// Owns the delay RNG, so consecutive [`run`][Self::run] calls continue the
/// same draw sequence.  Create a fresh sim with the same seed to reproduce a
/// run exactly.
#[derive(Debug)]
pub struct DeliverySim {
    config: SimConfig,
    rng:    SimRng,
}

impl DeliverySim {
    /// Validate `config` and seed the delay RNG.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            rng: SimRng::from_seed_opt(config.seed),
            config,
        })
    }

    /// Simulate every agent in `map`, in map order.
    ///
    /// Agents with an empty list still appear, with zeroed stats.  Fails if
    /// the map names an agent or warehouse that `input` does not contain.
    pub fn run<O: SimObserver>(
        &mut self,
        map:      &AssignmentMap,
        input:    &DeliveryInput,
        observer: &mut O,
    ) -> SimResult<SimStats> {
        let warehouses = input.warehouse_locations();
        let agents = input.agent_locations();

        let mut stats = SimStats::default();
        for (agent, packages) in map.iter() {
            let start = *agents
                .get(agent.as_str())
                .ok_or_else(|| SimError::UnknownAgent(agent.clone()))?;

            observer.on_agent_start(agent, packages.len());

            let mut position = start;
            let mut total = 0.0;
            let mut delivered: u32 = 0;

            for package in packages {
                let warehouse = *warehouses
                    .get(package.warehouse.as_str())
                    .ok_or_else(|| SimError::UnknownWarehouse {
                        package:   package.id.clone(),
                        warehouse: package.warehouse.clone(),
                    })?;

                let leg = position.distance(warehouse) + warehouse.distance(package.destination);
                let delay = self.draw_delay(agent, package);
                total += leg + delay;

                position = package.destination;
                delivered += 1;

                observer.on_delivery(&DeliveryEvent {
                    agent,
                    package,
                    leg_distance:   leg,
                    delay_distance: delay,
                    running_total:  total,
                });
            }

            let agent_stats = AgentStats::from_totals(delivered, total);
            debug!(
                agent = %agent,
                delivered = agent_stats.packages_delivered,
                total_distance = agent_stats.total_distance,
                efficiency = agent_stats.efficiency,
                "agent finished"
            );
            observer.on_agent_end(agent, &agent_stats);
            stats.push(agent.clone(), agent_stats);
        }

        Ok(stats)
    }

    /// Extra distance for one delivery; `0.0` when delays are off or the
    /// draw misses.  Consumes no randomness when delays are off.
    fn draw_delay(&mut self, agent: &AgentId, package: &Package) -> f64 {
        let Some(delay) = self.config.delay else {
            return 0.0;
        };
        if !self.rng.gen_bool(delay.probability) {
            return 0.0;
        }
        let extra = self.rng.gen_range(delay.min_extra..=delay.max_extra);
        trace!(agent = %agent, package = %package.id, extra, "delivery delayed");
        extra
    }
}

/// One-shot form of [`DeliverySim::run`] without an observer.
pub fn simulate_deliveries(
    map:    &AssignmentMap,
    input:  &DeliveryInput,
    config: SimConfig,
) -> SimResult<SimStats> {
    DeliverySim::new(config)?.run(map, input, &mut NoopObserver)
}
