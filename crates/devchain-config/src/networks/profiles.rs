use crate::config::{NetworkId, NetworkProfile};

const LOCAL_HOST: &str = "localhost";
const RPC_PORT: u16 = 8545;
const LOCAL_GAS_LIMIT: u64 = 4_712_388;
const ROPSTEN_GAS_LIMIT: u64 = 5_000_000;
const ROPSTEN_CHAIN_ID: u64 = 3;
const ROPSTEN_DEPLOYER: &str = "0xa303ddc620aa7d1390baccc8a495508b183fab59";

impl NetworkProfile {
    fn local_node(network_id: NetworkId, gas: u64) -> Self {
        Self {
            host: LOCAL_HOST.to_string(),
            port: RPC_PORT,
            network_id,
            gas,
            gas_price: None,
            from: None,
        }
    }

    /// Create development network profile
    pub fn development() -> Self {
        Self::local_node(NetworkId::Any, LOCAL_GAS_LIMIT)
    }

    pub fn local() -> Self {
        Self::local_node(NetworkId::Any, LOCAL_GAS_LIMIT)
    }

    pub fn test() -> Self {
        Self::local_node(NetworkId::Any, LOCAL_GAS_LIMIT)
    }

    /// Rinkeby through a locally running node, any chain id accepted
    pub fn rinkeby() -> Self {
        Self::local_node(NetworkId::Any, LOCAL_GAS_LIMIT)
    }

    /// Ropsten through a locally running node with a fixed deployer account
    pub fn ropsten() -> Self {
        Self {
            from: Some(ROPSTEN_DEPLOYER.to_string()),
            ..Self::local_node(NetworkId::Id(ROPSTEN_CHAIN_ID), ROPSTEN_GAS_LIMIT)
        }
    }
}
