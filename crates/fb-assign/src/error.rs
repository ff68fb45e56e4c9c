use fb_core::{AgentId, PackageId, WarehouseId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AssignError {
    #[error("unknown warehouse reference: package {package} names warehouse {warehouse}")]
    UnknownWarehouse {
        package:   PackageId,
        warehouse: WarehouseId,
    },

    #[error("no agents available to take package {package}")]
    NoAgents { package: PackageId },

    #[error("agent {0} appears more than once in the roster")]
    DuplicateAgent(AgentId),
}

pub type AssignResult<T> = Result<T, AssignError>;
