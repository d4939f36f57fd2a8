use std::env;
use std::str::FromStr;

use crate::config::NetworkId;
use crate::networks::NetworkName;
use crate::{ConfigError, ConfigResult, DevchainConfig};

const PREFIX: &str = "DEVCHAIN";

/// Environment variable-based configuration overrides
pub struct EnvLoader;

impl EnvLoader {
    /// Network named by `DEVCHAIN_NETWORK`, if set
    pub fn requested_network() -> Option<String> {
        Self::requested_network_from(|key| env::var(key).ok())
    }

    /// Network selected through `DEVCHAIN_NETWORK`, defaulting to development
    pub fn selected_network() -> String {
        Self::selected_network_from(|key| env::var(key).ok())
    }

    /// Requested network name, canonical for built-in profiles
    pub fn requested_network_from<F>(lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(&format!("{}_NETWORK", PREFIX))
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(|raw| Self::canonical_network(&raw))
    }

    pub fn selected_network_from<F>(lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::requested_network_from(lookup)
            .unwrap_or_else(|| NetworkName::Development.as_str().to_string())
    }

    /// Built-in names and aliases map to their profile key; custom names pass through
    pub fn canonical_network(name: &str) -> String {
        match name.parse::<NetworkName>() {
            Ok(builtin) => builtin.as_str().to_string(),
            Err(_) => name.to_string(),
        }
    }

    /// Apply overrides from the process environment
    pub fn apply_overrides(config: &mut DevchainConfig) -> ConfigResult<()> {
        Self::apply_overrides_from(config, |key| env::var(key).ok())
    }

    /// Apply overrides using `lookup` to resolve variable names
    pub fn apply_overrides_from<F>(config: &mut DevchainConfig, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::apply_network_overrides(config, &lookup)?;
        Self::apply_reporter_overrides(config, &lookup)?;
        Ok(())
    }

    /// Variable name for a field of the named network profile
    pub fn network_key(network: &str, field: &str) -> String {
        format!(
            "{}_NETWORKS_{}_{}",
            PREFIX,
            network.to_uppercase().replace('-', "_"),
            field
        )
    }

    fn apply_network_overrides<F>(config: &mut DevchainConfig, lookup: &F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        for (name, profile) in config.networks.iter_mut() {
            let key = |field: &str| Self::network_key(name, field);

            if let Some(host) = lookup(&key("HOST")) {
                profile.host = host;
            }
            if let Some(port) = Self::parsed(lookup, &key("PORT"))? {
                profile.port = port;
            }
            if let Some(network_id) = Self::parsed::<NetworkId, F>(lookup, &key("NETWORK_ID"))? {
                profile.network_id = network_id;
            }
            if let Some(gas) = Self::parsed(lookup, &key("GAS"))? {
                profile.gas = gas;
            }
            if let Some(gas_price) = Self::parsed(lookup, &key("GAS_PRICE"))? {
                profile.gas_price = Some(gas_price);
            }
            if let Some(from) = lookup(&key("FROM")) {
                profile.from = Some(from);
            }
        }
        Ok(())
    }

    fn apply_reporter_overrides<F>(config: &mut DevchainConfig, lookup: &F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(reporter) = lookup(&format!("{}_REPORTER", PREFIX)) {
            config.mocha.reporter = reporter;
        }
        if let Some(currency) = lookup(&format!("{}_REPORTER_CURRENCY", PREFIX)) {
            config.mocha.reporter_options.currency = currency;
        }
        if let Some(gas_price) = Self::parsed(lookup, &format!("{}_REPORTER_GAS_PRICE", PREFIX))? {
            config.mocha.reporter_options.gas_price = gas_price;
        }
        Ok(())
    }

    fn parsed<T, F>(lookup: &F, key: &str) -> ConfigResult<Option<T>>
    where
        T: FromStr,
        F: Fn(&str) -> Option<String>,
    {
        match lookup(key) {
            Some(value) => value
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|_| ConfigError::EnvironmentError(format!("Invalid {}: {}", key, value))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networks::default_config;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn overrides_network_fields() {
        let vars = vars(&[
            ("DEVCHAIN_NETWORKS_DEVELOPMENT_HOST", "127.0.0.1"),
            ("DEVCHAIN_NETWORKS_DEVELOPMENT_PORT", "7545"),
            ("DEVCHAIN_NETWORKS_DEVELOPMENT_NETWORK_ID", "5777"),
            ("DEVCHAIN_NETWORKS_ROPSTEN_GAS_PRICE", "20000000000"),
        ]);
        let mut config = default_config();
        EnvLoader::apply_overrides_from(&mut config, |k| vars.get(k).cloned()).unwrap();

        let dev = config.network("development").unwrap();
        assert_eq!(dev.host, "127.0.0.1");
        assert_eq!(dev.port, 7545);
        assert_eq!(dev.network_id, NetworkId::Id(5777));
        assert_eq!(config.network("ropsten").unwrap().gas_price, Some(20_000_000_000));
        assert_eq!(config.network("local").unwrap().port, 8545);
    }

    #[test]
    fn overrides_reporter_options() {
        let vars = vars(&[
            ("DEVCHAIN_REPORTER_CURRENCY", "EUR"),
            ("DEVCHAIN_REPORTER_GAS_PRICE", "21"),
        ]);
        let mut config = default_config();
        EnvLoader::apply_overrides_from(&mut config, |k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.mocha.reporter, "eth-gas-reporter");
        assert_eq!(config.mocha.reporter_options.currency, "EUR");
        assert_eq!(config.mocha.reporter_options.gas_price, 21);
    }

    #[test]
    fn rejects_malformed_values() {
        let vars = vars(&[("DEVCHAIN_NETWORKS_TEST_GAS", "lots")]);
        let mut config = default_config();
        let result = EnvLoader::apply_overrides_from(&mut config, |k| vars.get(k).cloned());
        assert!(matches!(result, Err(ConfigError::EnvironmentError(_))));
    }

    #[test]
    fn selected_network_resolves_aliases() {
        let dev = vars(&[("DEVCHAIN_NETWORK", "dev")]);
        assert_eq!(
            EnvLoader::requested_network_from(|k| dev.get(k).cloned()).as_deref(),
            Some("development")
        );

        let ropsten = vars(&[("DEVCHAIN_NETWORK", " Ropsten ")]);
        let selected = EnvLoader::selected_network_from(|k| ropsten.get(k).cloned());
        assert_eq!(selected, "ropsten");
        assert!(default_config().network(&selected).is_ok());

        let custom = vars(&[("DEVCHAIN_NETWORK", "Staging")]);
        assert_eq!(
            EnvLoader::selected_network_from(|k| custom.get(k).cloned()),
            "Staging"
        );
    }

    #[test]
    fn selected_network_defaults_to_development() {
        let empty = vars(&[]);
        assert_eq!(EnvLoader::requested_network_from(|k| empty.get(k).cloned()), None);
        assert_eq!(
            EnvLoader::selected_network_from(|k| empty.get(k).cloned()),
            "development"
        );

        let blank = vars(&[("DEVCHAIN_NETWORK", "  ")]);
        assert_eq!(EnvLoader::requested_network_from(|k| blank.get(k).cloned()), None);
    }

    #[test]
    fn network_key_normalizes_names() {
        assert_eq!(
            EnvLoader::network_key("my-chain", "HOST"),
            "DEVCHAIN_NETWORKS_MY_CHAIN_HOST"
        );
    }
}
