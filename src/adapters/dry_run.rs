use crate::core::{DeployedContract, Orchestrator, ResolvedRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Stand-in for the external deployment tool: assigns deterministic
/// placeholder addresses instead of touching a chain.
#[derive(Debug, Clone, Default)]
pub struct DryRunOrchestrator;

impl DryRunOrchestrator {
    pub fn new() -> Self {
        Self
    }

    fn placeholder_address(request: &ResolvedRequest) -> String {
        let mut hasher = DefaultHasher::new();
        (request.contract.as_str(), request.id.0).hash(&mut hasher);
        format!("0x{:040x}", hasher.finish())
    }
}

#[async_trait]
impl Orchestrator for DryRunOrchestrator {
    async fn instantiate(&self, request: &ResolvedRequest) -> Result<DeployedContract> {
        let address = Self::placeholder_address(request);
        tracing::debug!(
            "Dry-run instantiation of '{}' -> {}",
            request.contract,
            address
        );
        Ok(DeployedContract {
            contract: request.contract.clone(),
            address,
            request: request.id,
        })
    }
}
