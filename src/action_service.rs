//! Toolbox action service
//!
//! Host-facing shim around the [`FunctionRegistry`]. The host hands it the
//! current configuration (or `None`) and asks it for functions by name.

use tracing::{debug, info};

use crate::Result;
use crate::config::ToolboxConfig;
use crate::formulas::ToolboxVariant;
use crate::models::Value;
use crate::registry::FunctionRegistry;

/// Name under which the toolbox functions are published to scripts
pub const ACTION_NAME: &str = "toolbox";

/// Publishes the toolbox functions to the scripting host
#[derive(Debug, Clone)]
pub struct ToolboxActionService {
    registry: FunctionRegistry,
    /// Set once a configuration has been received. Advisory only: functions
    /// stay callable either way.
    properly_configured: bool,
}

impl ToolboxActionService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: FunctionRegistry::new(ToolboxVariant::Standard),
            properly_configured: false,
        }
    }

    #[must_use]
    pub fn action_name(&self) -> &'static str {
        ACTION_NAME
    }

    pub fn activate(&self) {
        info!(
            action = ACTION_NAME,
            variant = %self.registry.variant(),
            functions = self.registry.len(),
            "Toolbox action activated"
        );
    }

    pub fn deactivate(&self) {
        info!(action = ACTION_NAME, "Toolbox action deactivated");
    }

    /// React to a configuration update from the host
    ///
    /// A present configuration marks the service as configured and rebuilds
    /// the registry for its variant. An absent one changes nothing.
    pub fn updated(&mut self, config: Option<&ToolboxConfig>) {
        let Some(config) = config else {
            debug!("Configuration update without configuration, keeping current state");
            return;
        };

        if config.variant != self.registry.variant() {
            self.registry = FunctionRegistry::new(config.variant);
        }
        self.properly_configured = true;

        info!(variant = %config.variant, "Toolbox configuration applied");
    }

    #[must_use]
    pub fn is_properly_configured(&self) -> bool {
        self.properly_configured
    }

    #[must_use]
    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Call a published function by name
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value> {
        self.registry.invoke(name, args)
    }
}

impl Default for ToolboxActionService {
    fn default() -> Self {
        Self::new()
    }
}
