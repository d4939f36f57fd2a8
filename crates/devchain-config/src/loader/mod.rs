//! Configuration loading and environment handling

pub mod env;
pub mod file;
pub mod validation;

// Re-export the loaders that other code expects
pub use env::EnvLoader;
pub use file::FileLoader;
pub use validation::{ConfigValidator, ValidationError, ValidationResult};

use crate::{ConfigResult, DevchainConfig};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration loader
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Skip environment overrides
    ignore_env: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader that never consults the process environment
    pub fn without_env() -> Self {
        Self { ignore_env: true }
    }

    /// Load with precedence: env vars > config file > built-in defaults
    pub async fn load<P: AsRef<Path>>(&self, config_path: Option<P>) -> ConfigResult<DevchainConfig> {
        let mut config = match config_path {
            Some(path) => {
                let path = path.as_ref();
                info!(path = %path.display(), "loading configuration file");
                FileLoader::load_auto(path).await?
            }
            None => {
                debug!("no configuration file given, using built-in profiles");
                crate::networks::default_config()
            }
        };

        if !self.ignore_env {
            EnvLoader::apply_overrides(&mut config)?;
        }

        config.validate()?;
        info!(networks = config.networks.len(), "configuration ready");
        Ok(config)
    }
}
