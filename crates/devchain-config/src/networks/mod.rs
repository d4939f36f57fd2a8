//! Built-in network profiles

pub mod profiles;

use crate::config::{DevchainConfig, NetworkProfile, ReporterConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Names of the built-in profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkName {
    Development,
    Local,
    Test,
    Rinkeby,
    Ropsten,
}

impl NetworkName {
    pub const ALL: [NetworkName; 5] = [
        NetworkName::Development,
        NetworkName::Local,
        NetworkName::Test,
        NetworkName::Rinkeby,
        NetworkName::Ropsten,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkName::Development => "development",
            NetworkName::Local => "local",
            NetworkName::Test => "test",
            NetworkName::Rinkeby => "rinkeby",
            NetworkName::Ropsten => "ropsten",
        }
    }

    pub fn profile(&self) -> NetworkProfile {
        match self {
            NetworkName::Development => NetworkProfile::development(),
            NetworkName::Local => NetworkProfile::local(),
            NetworkName::Test => NetworkProfile::test(),
            NetworkName::Rinkeby => NetworkProfile::rinkeby(),
            NetworkName::Ropsten => NetworkProfile::ropsten(),
        }
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NetworkName {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(NetworkName::Development),
            "local" => Ok(NetworkName::Local),
            "test" => Ok(NetworkName::Test),
            "rinkeby" => Ok(NetworkName::Rinkeby),
            "ropsten" => Ok(NetworkName::Ropsten),
            _ => Err(crate::error::ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}

/// Configuration with every built-in profile and the gas reporter
pub fn default_config() -> DevchainConfig {
    let networks: BTreeMap<String, NetworkProfile> = NetworkName::ALL
        .iter()
        .map(|name| (name.as_str().to_string(), name.profile()))
        .collect();

    DevchainConfig {
        networks,
        mocha: ReporterConfig::gas_reporter(),
        solc: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("Ropsten".parse::<NetworkName>().unwrap(), NetworkName::Ropsten);
        assert_eq!("dev".parse::<NetworkName>().unwrap(), NetworkName::Development);
        assert!("mainnet".parse::<NetworkName>().is_err());
    }

    #[test]
    fn default_config_registers_every_preset() {
        let config = default_config();
        assert_eq!(config.networks.len(), NetworkName::ALL.len());
        for name in NetworkName::ALL {
            assert_eq!(config.network(name.as_str()).unwrap(), &name.profile());
        }
        assert!(config.solc.is_none());
        assert!(config.validate().is_ok());
    }
}
