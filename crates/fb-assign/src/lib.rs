//! `fb-assign`: hands every package to the agent nearest its warehouse.
//!
//! ```rust,ignore
//! use fb_assign::assign_packages;
//!
//! let map = assign_packages(&input)?;
//! for (agent, packages) in map.iter() {
//!     println!("{agent}: {} packages", packages.len());
//! }
//! ```

pub mod engine;
pub mod error;
pub mod map;

#[cfg(test)]
mod tests;

pub use engine::{assign_packages, nearest_agent};
pub use error::{AssignError, AssignResult};
pub use map::AssignmentMap;
