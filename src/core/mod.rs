pub mod builder;
pub mod engine;
pub mod factory;
pub mod planner;

pub use crate::domain::model::{
    ArgValue, ContractHandle, DeployedContract, DeploymentModule, InstantiationRequest, RequestId,
    ResolvedArg, ResolvedRequest,
};
pub use crate::domain::ports::Orchestrator;
pub use crate::utils::error::Result;
