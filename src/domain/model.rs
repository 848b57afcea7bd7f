use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Index of an instantiation request within its module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub usize);

/// Opaque token referencing one request's eventual deployed contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractHandle {
    pub id: RequestId,
}

/// Constructor argument value. Handles reference earlier requests in the
/// same module and are replaced by the deployed address at execution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Bool(bool),
    Uint(u128),
    Int(i64),
    String(String),
    Handle(ContractHandle),
}

/// Recorded intent to construct one contract instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstantiationRequest {
    pub id: RequestId,
    pub contract: String,
    pub args: Vec<ArgValue>,
}

/// Declarative deployment descriptor: a named list of instantiation
/// requests plus the exported name -> handle mapping. Holds no runtime
/// state and performs no I/O of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentModule {
    pub name: String,
    pub requests: Vec<InstantiationRequest>,
    pub exports: BTreeMap<String, ContractHandle>,
}

impl DeploymentModule {
    pub fn request(&self, id: RequestId) -> Option<&InstantiationRequest> {
        self.requests.get(id.0)
    }
}

/// Argument with handle references already replaced by addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResolvedArg {
    Bool(bool),
    Uint(u128),
    Int(i64),
    String(String),
    Address(String),
}

/// Instantiation request as handed to the orchestrator: same contract
/// target, but every argument is a concrete value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRequest {
    pub id: RequestId,
    pub contract: String,
    pub args: Vec<ResolvedArg>,
}

/// Result of one executed instantiation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployedContract {
    pub contract: String,
    pub address: String,
    pub request: RequestId,
}
