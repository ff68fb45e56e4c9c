//! `fb-sim`: replays each agent's package list and tallies distance.
//!
//! # Per-agent loop
//!
//! ```text
//! for (agent, packages) in assignment map, in roster order:
//!   pos ← agent start location
//!   for package in packages, in assigned order:
//!     total += |pos → warehouse| + |warehouse → destination|
//!     if delay enabled and draw < probability:
//!       total += uniform(min_extra ..= max_extra)
//!     pos ← destination; delivered += 1
//!   efficiency ← total / delivered   (0 when nothing was delivered)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fb_sim::{DeliverySim, NoopObserver, SimConfig};
//!
//! let mut sim = DeliverySim::new(SimConfig::deterministic())?;
//! let stats = sim.run(&map, &input, &mut NoopObserver)?;
//! ```

pub mod config;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use config::{DelayConfig, SimConfig};
pub use error::{SimError, SimResult};
pub use observer::{DeliveryEvent, NoopObserver, SimObserver};
pub use sim::{DeliverySim, simulate_deliveries};
pub use stats::{AgentStats, SimStats, round2};
