//! Input records for one run.
//!
//! All records are loaded fresh per run and never mutated by the pipeline.
//! Collection order is significant: the agent list order decides ties in
//! nearest-agent selection, and the package list order decides delivery order.

use std::collections::{HashMap, HashSet};

use crate::{AgentId, FbError, FbResult, PackageId, Point, WarehouseId};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Warehouse {
    pub id:       WarehouseId,
    pub location: Point,
}

impl Warehouse {
    pub fn new(id: impl Into<WarehouseId>, location: impl Into<Point>) -> Self {
        Self { id: id.into(), location: location.into() }
    }
}

/// A courier and the location it starts the run from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:       AgentId,
    pub location: Point,
}

impl Agent {
    pub fn new(id: impl Into<AgentId>, location: impl Into<Point>) -> Self {
        Self { id: id.into(), location: location.into() }
    }
}

/// A delivery unit picked up at `warehouse` and dropped at `destination`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub id:          PackageId,
    pub warehouse:   WarehouseId,
    pub destination: Point,
}

impl Package {
    pub fn new(
        id:          impl Into<PackageId>,
        warehouse:   impl Into<WarehouseId>,
        destination: impl Into<Point>,
    ) -> Self {
        Self {
            id:          id.into(),
            warehouse:   warehouse.into(),
            destination: destination.into(),
        }
    }
}

/// Everything the pipeline consumes: warehouses, agents, and packages.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryInput {
    pub warehouses: Vec<Warehouse>,
    pub agents:     Vec<Agent>,
    pub packages:   Vec<Package>,
}

impl DeliveryInput {
    pub fn new(warehouses: Vec<Warehouse>, agents: Vec<Agent>, packages: Vec<Package>) -> Self {
        Self { warehouses, agents, packages }
    }

    /// Append an agent to the roster.  It takes part in every assignment
    /// made after this call, and loses ties to all agents already listed.
    pub fn add_agent(&mut self, agent: Agent) {
        self.agents.push(agent);
    }

    /// Warehouse locations keyed by id.
    pub fn warehouse_locations(&self) -> HashMap<&str, Point> {
        self.warehouses
            .iter()
            .map(|w| (w.id.as_str(), w.location))
            .collect()
    }

    /// Agent starting locations keyed by id.
    pub fn agent_locations(&self) -> HashMap<&str, Point> {
        self.agents
            .iter()
            .map(|a| (a.id.as_str(), a.location))
            .collect()
    }

    /// Reject repeated ids within a collection and non-finite coordinates.
    ///
    /// Unknown warehouse references are *not* checked here; the assignment
    /// step reports them, since it is the first stage that needs the lookup.
    pub fn validate(&self) -> FbResult<()> {
        let mut seen = HashSet::new();
        for w in &self.warehouses {
            if !seen.insert(w.id.as_str()) {
                return Err(FbError::DuplicateWarehouse(w.id.clone()));
            }
            check_finite(w.location, "warehouse", w.id.as_str())?;
        }

        seen.clear();
        for a in &self.agents {
            if !seen.insert(a.id.as_str()) {
                return Err(FbError::DuplicateAgent(a.id.clone()));
            }
            check_finite(a.location, "agent", a.id.as_str())?;
        }

        seen.clear();
        for p in &self.packages {
            if !seen.insert(p.id.as_str()) {
                return Err(FbError::DuplicatePackage(p.id.clone()));
            }
            check_finite(p.destination, "package", p.id.as_str())?;
        }
        Ok(())
    }
}

fn check_finite(point: Point, what: &'static str, id: &str) -> FbResult<()> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(FbError::NonFiniteLocation { what, id: id.to_owned() })
    }
}
