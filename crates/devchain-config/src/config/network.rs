use crate::error::{ConfigError, ConfigResult};
use crate::loader::validation::{check_profile, first_failure};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Connection parameters for one blockchain RPC endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// RPC hostname
    pub host: String,

    /// RPC TCP port
    pub port: u16,

    /// Chain the profile may deploy to
    pub network_id: NetworkId,

    /// Gas limit for deployment transactions
    pub gas: u64,

    /// Gas price in wei, left to the node when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u64>,

    /// Sending account address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl NetworkProfile {
    /// Endpoint URL the deployment tool connects to
    pub fn rpc_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Whether this profile may be used against the given chain
    pub fn accepts_chain(&self, chain_id: u64) -> bool {
        self.network_id.matches(chain_id)
    }

    /// Validate the profile registered under `name`
    pub fn validate(&self, name: &str) -> ConfigResult<()> {
        let mut issues = Vec::new();
        check_profile(name, self, &mut issues);
        first_failure(issues)
    }
}

/// Chain identifier, either the `*` wildcard or a concrete id.
///
/// On the wire the id is always a string (`"*"`, `"3"`); a bare integer is
/// accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawNetworkId", into = "String")]
pub enum NetworkId {
    Any,
    Id(u64),
}

impl NetworkId {
    pub fn matches(&self, chain_id: u64) -> bool {
        match self {
            NetworkId::Any => true,
            NetworkId::Id(id) => *id == chain_id,
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkId::Any => write!(f, "*"),
            NetworkId::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for NetworkId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "*" {
            return Ok(NetworkId::Any);
        }
        s.parse::<u64>()
            .map(NetworkId::Id)
            .map_err(|_| ConfigError::InvalidNetworkId(s.to_string()))
    }
}

impl From<NetworkId> for String {
    fn from(id: NetworkId) -> Self {
        id.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNetworkId {
    Text(String),
    Number(u64),
}

impl TryFrom<RawNetworkId> for NetworkId {
    type Error = ConfigError;

    fn try_from(raw: RawNetworkId) -> Result<Self, Self::Error> {
        match raw {
            RawNetworkId::Text(text) => text.parse(),
            RawNetworkId::Number(id) => Ok(NetworkId::Id(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_every_chain() {
        assert!(NetworkId::Any.matches(1));
        assert!(NetworkId::Any.matches(1337));
        assert!(NetworkId::Id(3).matches(3));
        assert!(!NetworkId::Id(3).matches(4));
    }

    #[test]
    fn parses_wire_strings() {
        assert_eq!("*".parse::<NetworkId>().unwrap(), NetworkId::Any);
        assert_eq!("3".parse::<NetworkId>().unwrap(), NetworkId::Id(3));
        assert!(matches!(
            "ropsten".parse::<NetworkId>(),
            Err(ConfigError::InvalidNetworkId(_))
        ));
        assert!("".parse::<NetworkId>().is_err());
    }

    #[test]
    fn serializes_as_string() {
        assert_eq!(serde_json::to_string(&NetworkId::Id(3)).unwrap(), "\"3\"");
        assert_eq!(serde_json::to_string(&NetworkId::Any).unwrap(), "\"*\"");
    }

    #[test]
    fn accepts_bare_integer() {
        let id: NetworkId = serde_json::from_str("42").unwrap();
        assert_eq!(id, NetworkId::Id(42));
    }

    #[test]
    fn rpc_url_uses_host_and_port() {
        let profile = NetworkProfile::development();
        assert_eq!(profile.rpc_url(), "http://localhost:8545");
        assert!(profile.accepts_chain(5777));
        assert!(NetworkProfile::ropsten().accepts_chain(3));
        assert!(!NetworkProfile::ropsten().accepts_chain(1));
    }
}
