use crate::error::{ConfigError, ConfigResult};
use crate::loader::validation::ConfigValidator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::*;

/// Main configuration structure consumed by deployment and test tooling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevchainConfig {
    /// Named network profiles
    pub networks: BTreeMap<String, NetworkProfile>,

    /// Test runner reporting
    pub mocha: ReporterConfig,

    /// Compiler settings, absent unless explicitly configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solc: Option<SolcConfig>,
}

impl DevchainConfig {
    /// Look up a network profile by name
    pub fn network(&self, name: &str) -> ConfigResult<&NetworkProfile> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))
    }

    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// Whether compiler optimization was explicitly switched on
    pub fn optimizer_enabled(&self) -> bool {
        self.solc
            .as_ref()
            .map(SolcConfig::optimizer_enabled)
            .unwrap_or(false)
    }

    /// Validate every section, reporting every violation
    pub fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::new().validate(self).map_err(|issues| {
            let summary = issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            ConfigError::Validation(summary)
        })
    }
}

impl Default for DevchainConfig {
    fn default() -> Self {
        crate::networks::default_config()
    }
}
