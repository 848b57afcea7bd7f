use crate::core::planner::ExecutionPlan;
use crate::core::{
    ArgValue, DeployedContract, DeploymentModule, Orchestrator, RequestId, ResolvedArg,
    ResolvedRequest,
};
use crate::utils::error::{DeployError, Result};
use std::collections::{BTreeMap, HashMap};

/// Outcome of running one deployment module: every executed request in
/// plan order, plus the exports resolved to deployed contracts.
#[derive(Debug, Clone)]
pub struct DeploymentOutcome {
    pub module: String,
    pub deployed: Vec<DeployedContract>,
    pub exports: BTreeMap<String, DeployedContract>,
}

/// Drives a module through an orchestrator: plans the requests, resolves
/// handle arguments to the addresses produced so far, and instantiates
/// them in order.
pub struct DeploymentEngine<O: Orchestrator> {
    orchestrator: O,
}

impl<O: Orchestrator> DeploymentEngine<O> {
    pub fn new(orchestrator: O) -> Self {
        Self { orchestrator }
    }

    pub async fn run(&self, module: &DeploymentModule) -> Result<DeploymentOutcome> {
        tracing::info!("Planning module '{}'", module.name);
        let plan = ExecutionPlan::for_module(module)?;
        tracing::info!("Plan has {} instantiation request(s)", plan.len());

        let mut by_request: HashMap<RequestId, DeployedContract> = HashMap::new();
        let mut deployed = Vec::with_capacity(plan.len());

        for &id in plan.steps() {
            let request = module.request(id).ok_or_else(|| DeployError::PlanningError {
                module: module.name.clone(),
                message: format!("Plan step references unknown request {id:?}"),
            })?;

            let resolved = resolve_request(&module.name, request.id, &request.contract, &request.args, &by_request)?;

            tracing::debug!(
                "Instantiating '{}' with {} argument(s)",
                resolved.contract,
                resolved.args.len()
            );
            let contract = self.orchestrator.instantiate(&resolved).await?;
            tracing::info!("Instantiated '{}' at {}", contract.contract, contract.address);

            by_request.insert(id, contract.clone());
            deployed.push(contract);
        }

        let mut exports = BTreeMap::new();
        for (name, handle) in &module.exports {
            let contract = by_request
                .get(&handle.id)
                .ok_or_else(|| DeployError::PlanningError {
                    module: module.name.clone(),
                    message: format!("Export '{}' was never instantiated", name),
                })?;
            exports.insert(name.clone(), contract.clone());
        }

        Ok(DeploymentOutcome {
            module: module.name.clone(),
            deployed,
            exports,
        })
    }
}

fn resolve_request(
    module: &str,
    id: RequestId,
    contract: &str,
    args: &[ArgValue],
    by_request: &HashMap<RequestId, DeployedContract>,
) -> Result<ResolvedRequest> {
    let mut resolved = Vec::with_capacity(args.len());
    for arg in args {
        resolved.push(match arg {
            ArgValue::Bool(value) => ResolvedArg::Bool(*value),
            ArgValue::Uint(value) => ResolvedArg::Uint(*value),
            ArgValue::Int(value) => ResolvedArg::Int(*value),
            ArgValue::String(value) => ResolvedArg::String(value.clone()),
            ArgValue::Handle(handle) => {
                let dependency =
                    by_request
                        .get(&handle.id)
                        .ok_or_else(|| DeployError::PlanningError {
                            module: module.to_string(),
                            message: format!(
                                "Request {:?} uses handle {:?} before it was instantiated",
                                id, handle.id
                            ),
                        })?;
                ResolvedArg::Address(dependency.address.clone())
            }
        });
    }

    Ok(ResolvedRequest {
        id,
        contract: contract.to_string(),
        args: resolved,
    })
}
