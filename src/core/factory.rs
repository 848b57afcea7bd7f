use crate::core::builder::{build_module, exports};
use crate::core::{ArgValue, DeploymentModule};

/// Built-in module instantiating one `EventFactory` with constructor
/// args `[10, 10]`, exported as `eventFactory`.
pub fn factory_module() -> DeploymentModule {
    build_module("FactoryModule", |m| {
        let event_factory = m.contract("EventFactory", vec![ArgValue::Uint(10), ArgValue::Uint(10)]);
        exports([("eventFactory", event_factory)])
    })
}
