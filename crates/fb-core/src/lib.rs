//! `fb-core`: foundational types for the fastbox delivery simulator.
//!
//! Every other `fb-*` crate depends on this one.  It has no `fb-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `WarehouseId`, `AgentId`, `PackageId`                 |
//! | [`geo`]         | `Point`, Euclidean distance                           |
//! | [`model`]       | `Warehouse`, `Agent`, `Package`, `DeliveryInput`      |
//! | [`rng`]         | `SimRng` (seedable delay source)                      |
//! | [`error`]       | `FbError`, `FbResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod model;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FbError, FbResult};
pub use geo::{Point, euclidean_distance};
pub use ids::{AgentId, PackageId, WarehouseId};
pub use model::{Agent, DeliveryInput, Package, Warehouse};
pub use rng::SimRng;
