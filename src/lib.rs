pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::ManifestConfig;

pub use crate::adapters::{DeploymentJournal, DryRunOrchestrator};
pub use crate::core::builder::{build_module, exports, ModuleBuilder};
pub use crate::core::engine::{DeploymentEngine, DeploymentOutcome};
pub use crate::core::factory::factory_module;
pub use crate::core::planner::ExecutionPlan;
pub use crate::core::{
    ArgValue, ContractHandle, DeployedContract, DeploymentModule, InstantiationRequest,
    Orchestrator, RequestId, ResolvedArg, ResolvedRequest,
};
pub use crate::utils::error::{DeployError, Result};
