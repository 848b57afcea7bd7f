use crate::core::{ArgValue, ContractHandle, DeploymentModule, InstantiationRequest, RequestId};
use std::collections::BTreeMap;

/// Builder context handed to module definitions. Accumulates
/// instantiation requests and hands out handles to their results.
pub struct ModuleBuilder {
    name: String,
    requests: Vec<InstantiationRequest>,
}

impl ModuleBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            requests: Vec::new(),
        }
    }

    /// Records an instantiation request for `contract` with the given
    /// constructor arguments and returns a handle to its eventual result.
    pub fn contract(&mut self, contract: &str, args: Vec<ArgValue>) -> ContractHandle {
        let id = RequestId(self.requests.len());
        self.requests.push(InstantiationRequest {
            id,
            contract: contract.to_string(),
            args,
        });
        ContractHandle { id }
    }

    pub fn finish(self, exports: BTreeMap<String, ContractHandle>) -> DeploymentModule {
        DeploymentModule {
            name: self.name,
            requests: self.requests,
            exports,
        }
    }
}

/// Builds a deployment module from a definition closure. The closure
/// receives the builder context and returns the export mapping; the
/// module itself performs no I/O and stays purely declarative.
pub fn build_module<F>(name: &str, define: F) -> DeploymentModule
where
    F: FnOnce(&mut ModuleBuilder) -> BTreeMap<String, ContractHandle>,
{
    let mut builder = ModuleBuilder::new(name);
    let exports = define(&mut builder);
    builder.finish(exports)
}

/// Small helper for the common "export these handles" return.
pub fn exports<const N: usize>(pairs: [(&str, ContractHandle); N]) -> BTreeMap<String, ContractHandle> {
    pairs
        .into_iter()
        .map(|(name, handle)| (name.to_string(), handle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_records_request_and_returns_handle() {
        let mut builder = ModuleBuilder::new("TestModule");

        let first = builder.contract("Token", vec![ArgValue::Uint(1000)]);
        let second = builder.contract("Vault", vec![ArgValue::Handle(first)]);

        assert_eq!(first.id, RequestId(0));
        assert_eq!(second.id, RequestId(1));

        let module = builder.finish(exports([("vault", second)]));
        assert_eq!(module.name, "TestModule");
        assert_eq!(module.requests.len(), 2);
        assert_eq!(module.requests[0].contract, "Token");
        assert_eq!(module.requests[1].args, vec![ArgValue::Handle(first)]);
    }

    #[test]
    fn test_build_module_collects_exports() {
        let module = build_module("TestModule", |m| {
            let token = m.contract("Token", vec![]);
            exports([("token", token)])
        });

        assert_eq!(module.exports.len(), 1);
        assert_eq!(module.exports["token"].id, RequestId(0));
    }

    #[test]
    fn test_builds_are_independent() {
        let build = || {
            build_module("TestModule", |m| {
                let token = m.contract("Token", vec![ArgValue::Uint(42)]);
                exports([("token", token)])
            })
        };

        let first = build();
        let second = build();

        // Two builds share no state; mutating one leaves the other intact.
        let mut mutated = first.clone();
        mutated.requests[0].contract = "Other".to_string();
        assert_eq!(second.requests[0].contract, "Token");
        assert_eq!(first, second);
    }
}
