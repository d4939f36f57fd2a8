use crate::utils::ConfigFormat;
use crate::{ConfigError, ConfigResult, DevchainConfig};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// File-based configuration loader
pub struct FileLoader;

impl FileLoader {
    /// Parse a configuration held in memory
    pub fn parse_str(content: &str, format: ConfigFormat) -> ConfigResult<DevchainConfig> {
        let config: DevchainConfig = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    /// Render a configuration in the given format
    pub fn render(config: &DevchainConfig, format: ConfigFormat) -> ConfigResult<String> {
        let content = match format {
            ConfigFormat::Toml => toml::to_string_pretty(config)?,
            ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        };
        Ok(content)
    }

    /// Load configuration from a TOML file
    pub async fn load_toml<P: AsRef<Path>>(path: P) -> ConfigResult<DevchainConfig> {
        Self::load_as(path.as_ref(), ConfigFormat::Toml).await
    }

    /// Load configuration from a JSON file
    pub async fn load_json<P: AsRef<Path>>(path: P) -> ConfigResult<DevchainConfig> {
        Self::load_as(path.as_ref(), ConfigFormat::Json).await
    }

    /// Auto-detect file format and load configuration
    pub async fn load_auto<P: AsRef<Path>>(path: P) -> ConfigResult<DevchainConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => {
                let format = ext.parse::<ConfigFormat>().map_err(|_| {
                    ConfigError::InvalidFormat(format!("Unsupported file extension: {}", ext))
                })?;
                Self::load_as(path, format).await
            }
            None => {
                // Try TOML first, then JSON
                let toml_error = match Self::load_toml(path).await {
                    Ok(config) => return Ok(config),
                    Err(e) => e,
                };
                debug!(path = %path.display(), error = %toml_error, "not a TOML configuration, trying JSON");
                match Self::load_json(path).await {
                    // Not JSON either, so the TOML failure is the useful one
                    Err(ConfigError::Json(_)) => Err(toml_error),
                    result => result,
                }
            }
        }
    }

    /// Save configuration to a TOML file
    pub async fn save_toml<P: AsRef<Path>>(config: &DevchainConfig, path: P) -> ConfigResult<()> {
        Self::save_as(config, path.as_ref(), ConfigFormat::Toml).await
    }

    /// Save configuration to a JSON file
    pub async fn save_json<P: AsRef<Path>>(config: &DevchainConfig, path: P) -> ConfigResult<()> {
        Self::save_as(config, path.as_ref(), ConfigFormat::Json).await
    }

    async fn load_as(path: &Path, format: ConfigFormat) -> ConfigResult<DevchainConfig> {
        let content = fs::read_to_string(path).await?;
        let config = Self::parse_str(&content, format)?;

        config.validate()?;
        debug!(path = %path.display(), ?format, networks = config.networks.len(), "loaded configuration file");
        Ok(config)
    }

    async fn save_as(config: &DevchainConfig, path: &Path, format: ConfigFormat) -> ConfigResult<()> {
        let content = Self::render(config, format)?;
        fs::write(path, content).await?;

        debug!(path = %path.display(), ?format, "saved configuration file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networks::default_config;

    #[test]
    fn toml_round_trip_is_identical() {
        let config = default_config();
        let rendered = FileLoader::render(&config, ConfigFormat::Toml).unwrap();
        assert_eq!(FileLoader::parse_str(&rendered, ConfigFormat::Toml).unwrap(), config);
    }

    #[test]
    fn json_keeps_reporter_key_names() {
        let rendered = FileLoader::render(&default_config(), ConfigFormat::Json).unwrap();
        assert!(rendered.contains("\"reporterOptions\""));
        assert!(rendered.contains("\"gasPrice\": 1"));
        assert!(rendered.contains("\"network_id\": \"3\""));
        assert!(!rendered.contains("solc"));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let content = r#"
[networks.development]
host = "localhost"
port = "eighty"
network_id = "*"
gas = 4712388

[mocha]
reporter = "spec"

[mocha.reporterOptions]
currency = "USD"
gasPrice = 1
"#;
        assert!(matches!(
            FileLoader::parse_str(content, ConfigFormat::Toml),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn rejects_missing_gas() {
        let content = r#"{
  "networks": { "development": { "host": "localhost", "port": 8545, "network_id": "*" } },
  "mocha": { "reporter": "spec", "reporterOptions": { "currency": "USD", "gasPrice": 1 } }
}"#;
        assert!(matches!(
            FileLoader::parse_str(content, ConfigFormat::Json),
            Err(ConfigError::Json(_))
        ));
    }
}
