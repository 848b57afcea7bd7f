use crate::core::{ArgValue, DeploymentModule, RequestId};
use crate::utils::error::{DeployError, Result};

/// Execution order for a module's instantiation requests: every handle
/// argument refers to a request planned earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    steps: Vec<RequestId>,
}

impl ExecutionPlan {
    pub fn for_module(module: &DeploymentModule) -> Result<Self> {
        for (name, handle) in &module.exports {
            if module.request(handle.id).is_none() {
                return Err(DeployError::PlanningError {
                    module: module.name.clone(),
                    message: format!("Export '{}' references unknown request {:?}", name, handle.id),
                });
            }
        }

        let dependencies: Vec<Vec<RequestId>> = module
            .requests
            .iter()
            .map(|request| {
                request
                    .args
                    .iter()
                    .filter_map(|arg| match arg {
                        ArgValue::Handle(handle) => Some(handle.id),
                        _ => None,
                    })
                    .collect()
            })
            .collect();

        for (index, deps) in dependencies.iter().enumerate() {
            for dep in deps {
                if module.request(*dep).is_none() {
                    return Err(DeployError::PlanningError {
                        module: module.name.clone(),
                        message: format!(
                            "Request {} has a handle argument referencing unknown request {:?}",
                            index, dep
                        ),
                    });
                }
            }
        }

        // Kahn's algorithm, preferring lower request ids for a stable order.
        let count = module.requests.len();
        let mut in_degree = vec![0usize; count];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); count];
        for (index, deps) in dependencies.iter().enumerate() {
            for dep in deps {
                in_degree[index] += 1;
                dependents[dep.0].push(index);
            }
        }

        let mut ready: Vec<usize> = (0..count).filter(|&i| in_degree[i] == 0).collect();
        let mut steps = Vec::with_capacity(count);
        while let Some(&next) = ready.iter().min() {
            ready.retain(|&i| i != next);
            steps.push(RequestId(next));
            for &dependent in &dependents[next] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    ready.push(dependent);
                }
            }
        }

        if steps.len() != count {
            return Err(DeployError::PlanningError {
                module: module.name.clone(),
                message: "Dependency cycle between instantiation requests".to_string(),
            });
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[RequestId] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::{build_module, exports};
    use crate::core::{ContractHandle, InstantiationRequest};
    use std::collections::BTreeMap;

    #[test]
    fn test_single_request_plan() {
        let module = build_module("Single", |m| {
            let only = m.contract("EventFactory", vec![ArgValue::Uint(10), ArgValue::Uint(10)]);
            exports([("eventFactory", only)])
        });

        let plan = ExecutionPlan::for_module(&module).unwrap();
        assert_eq!(plan.steps(), &[RequestId(0)]);
    }

    #[test]
    fn test_handle_dependencies_come_first() {
        let module = build_module("Chained", |m| {
            let token = m.contract("Token", vec![]);
            let vault = m.contract("Vault", vec![ArgValue::Handle(token)]);
            exports([("token", token), ("vault", vault)])
        });

        let plan = ExecutionPlan::for_module(&module).unwrap();
        assert_eq!(plan.steps(), &[RequestId(0), RequestId(1)]);
    }

    #[test]
    fn test_dangling_export_is_rejected() {
        let mut module = build_module("Broken", |m| {
            let token = m.contract("Token", vec![]);
            exports([("token", token)])
        });
        module
            .exports
            .insert("ghost".to_string(), ContractHandle { id: RequestId(7) });

        let err = ExecutionPlan::for_module(&module).unwrap_err();
        assert!(matches!(err, DeployError::PlanningError { .. }));
    }

    #[test]
    fn test_cycle_is_rejected() {
        // Handles normally only point backwards; build the cycle by hand.
        let module = DeploymentModule {
            name: "Cyclic".to_string(),
            requests: vec![
                InstantiationRequest {
                    id: RequestId(0),
                    contract: "A".to_string(),
                    args: vec![ArgValue::Handle(ContractHandle { id: RequestId(1) })],
                },
                InstantiationRequest {
                    id: RequestId(1),
                    contract: "B".to_string(),
                    args: vec![ArgValue::Handle(ContractHandle { id: RequestId(0) })],
                },
            ],
            exports: BTreeMap::new(),
        };

        let err = ExecutionPlan::for_module(&module).unwrap_err();
        match err {
            DeployError::PlanningError { message, .. } => {
                assert!(message.contains("cycle") || message.contains("Cycle"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
