use fb_core::{AgentId, PackageId, WarehouseId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent {0} is in the assignment map but not in the input roster")]
    UnknownAgent(AgentId),

    #[error("package {package} names unknown warehouse {warehouse}")]
    UnknownWarehouse {
        package:   PackageId,
        warehouse: WarehouseId,
    },
}

pub type SimResult<T> = Result<T, SimError>;
