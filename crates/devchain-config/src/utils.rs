use crate::loader::FileLoader;
use crate::{ConfigError, ConfigResult, DevchainConfig};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Configuration utility functions
pub struct ConfigUtils;

impl ConfigUtils {
    /// Find configuration file in standard locations
    pub fn find_config_file(filename: &str) -> ConfigResult<PathBuf> {
        Self::find_config_file_in(&Self::search_paths(), filename)
    }

    /// Directories searched for configuration files, in priority order
    pub fn search_paths() -> Vec<PathBuf> {
        vec![
            // Current directory
            PathBuf::from("."),
            // Config subdirectory
            PathBuf::from("config"),
            // User config directory
            default_config_dir(),
        ]
    }

    /// First match for `filename` across `search_paths`
    pub fn find_config_file_in(search_paths: &[PathBuf], filename: &str) -> ConfigResult<PathBuf> {
        search_paths
            .iter()
            .find_map(|dir| Self::find_in(dir, filename))
            .ok_or_else(|| {
                ConfigError::FileNotFound(format!(
                    "Configuration file '{}' not found in standard locations",
                    filename
                ))
            })
    }

    /// Look for `filename` in one directory, also trying known extensions
    pub fn find_in(dir: &Path, filename: &str) -> Option<PathBuf> {
        let config_path = dir.join(filename);
        if config_path.is_file() {
            return Some(config_path);
        }

        ["toml", "json"]
            .iter()
            .map(|ext| dir.join(format!("{}.{}", filename, ext)))
            .find(|candidate| candidate.is_file())
    }

    /// SHA-256 of the canonical TOML rendering, hex encoded
    pub fn fingerprint(config: &DevchainConfig) -> ConfigResult<String> {
        let serialized = toml::to_string(config)?;
        let digest = Sha256::digest(serialized.as_bytes());
        Ok(hex::encode(digest))
    }

    /// Generate a configuration template
    pub fn generate_template(name: &str) -> ConfigResult<String> {
        match name {
            "default" => Ok(include_str!("../configs/default.toml").to_string()),
            "custom" => FileLoader::render(&crate::networks::default_config(), ConfigFormat::Toml),
            _ => Err(ConfigError::InvalidFormat(format!(
                "Unknown configuration template: {}",
                name
            ))),
        }
    }

    /// Validate configuration file syntax without loading
    pub fn validate_syntax<P: AsRef<Path>>(path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match ConfigFormat::from_path(path) {
            Some(ConfigFormat::Toml) => {
                toml::from_str::<toml::Value>(&content)?;
            }
            Some(ConfigFormat::Json) => {
                serde_json::from_str::<serde_json::Value>(&content)?;
            }
            None => {
                // Try both formats
                if toml::from_str::<toml::Value>(&content).is_err()
                    && serde_json::from_str::<serde_json::Value>(&content).is_err()
                {
                    return Err(ConfigError::InvalidFormat(
                        "File is neither valid TOML nor JSON".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Convert between configuration formats
    pub async fn convert_format<P: AsRef<Path>>(
        input_path: P,
        output_path: P,
        output_format: ConfigFormat,
    ) -> ConfigResult<()> {
        let config = FileLoader::load_auto(input_path).await?;

        match output_format {
            ConfigFormat::Toml => FileLoader::save_toml(&config, output_path).await,
            ConfigFormat::Json => FileLoader::save_json(&config, output_path).await,
        }
    }
}

/// Configuration file format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Format implied by the file extension, if any
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl std::str::FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(ConfigError::InvalidFormat(format!("Unknown format: {}", s))),
        }
    }
}

pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("devchain"))
        .unwrap_or_else(|| PathBuf::from(".devchain"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networks::default_config;

    #[test]
    fn bundled_template_matches_defaults() {
        let template = ConfigUtils::generate_template("default").unwrap();
        let parsed = FileLoader::parse_str(&template, ConfigFormat::Toml).unwrap();
        assert_eq!(parsed, default_config());
        assert!(!parsed.optimizer_enabled());
    }

    #[test]
    fn unknown_template_is_rejected() {
        assert!(matches!(
            ConfigUtils::generate_template("mainnet"),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn fingerprint_tracks_content() {
        let config = default_config();
        let original = ConfigUtils::fingerprint(&config).unwrap();
        assert_eq!(original.len(), 64);
        assert_eq!(original, ConfigUtils::fingerprint(&config.clone()).unwrap());

        let mut changed = config;
        changed.mocha.reporter_options.gas_price = 2;
        assert_ne!(original, ConfigUtils::fingerprint(&changed).unwrap());
    }

    #[test]
    fn search_prefers_earlier_directories() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(second.path().join("devchain.toml"), "").unwrap();
        let paths = vec![first.path().to_path_buf(), second.path().to_path_buf()];

        assert_eq!(
            ConfigUtils::find_config_file_in(&paths, "devchain").unwrap(),
            second.path().join("devchain.toml")
        );

        std::fs::write(first.path().join("devchain.json"), "{}").unwrap();
        assert_eq!(
            ConfigUtils::find_config_file_in(&paths, "devchain").unwrap(),
            first.path().join("devchain.json")
        );

        assert!(matches!(
            ConfigUtils::find_config_file_in(&paths, "missing"),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn search_starts_in_working_directory() {
        let paths = ConfigUtils::search_paths();
        assert_eq!(paths[0], PathBuf::from("."));
        assert_eq!(paths[1], PathBuf::from("config"));
        assert_eq!(paths[2], default_config_dir());
    }

    #[test]
    fn format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a/b.JSON")), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_path(Path::new("devchain.toml")), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_path(Path::new("devchain.yaml")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("devchain")), None);
    }
}
