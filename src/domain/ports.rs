use crate::domain::model::{DeployedContract, ResolvedRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Capability that turns instantiation requests into deployed contracts.
/// The real implementation lives in an external deployment tool; this
/// crate ships a dry-run one for planning and tests.
#[async_trait]
pub trait Orchestrator: Send + Sync {
    async fn instantiate(&self, request: &ResolvedRequest) -> Result<DeployedContract>;
}
