//! Input validation errors.
//!
//! Downstream crates define their own error enums for the stage they own
//! (`AssignError`, `SimError`, …) and wrap `FbError` where they validate input.

use thiserror::Error;

use crate::{AgentId, PackageId, WarehouseId};

#[derive(Debug, Error, PartialEq)]
pub enum FbError {
    #[error("warehouse {0} is listed more than once")]
    DuplicateWarehouse(WarehouseId),

    #[error("agent {0} is listed more than once")]
    DuplicateAgent(AgentId),

    #[error("package {0} is listed more than once")]
    DuplicatePackage(PackageId),

    #[error("{what} {id} has a non-finite location")]
    NonFiniteLocation { what: &'static str, id: String },
}

/// Shorthand result type for `fb-core`.
pub type FbResult<T> = Result<T, FbError>;
