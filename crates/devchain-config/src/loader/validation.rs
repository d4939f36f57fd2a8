use crate::config::{DevchainConfig, NetworkProfile, ReporterConfig, SolcConfig};
use crate::{ConfigError, ConfigResult};
use thiserror::Error;

/// A single problem found while validating a configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no networks are configured")]
    NoNetworks,

    #[error("network name cannot be empty")]
    EmptyNetworkName,

    #[error("network '{0}': host cannot be empty")]
    EmptyHost(String),

    #[error("network '{0}': port cannot be 0")]
    ZeroPort(String),

    #[error("network '{0}': gas limit must be greater than 0")]
    ZeroGas(String),

    #[error("network '{0}': gas price must be greater than 0")]
    ZeroGasPrice(String),

    #[error("network '{network}': invalid from address '{address}'")]
    InvalidFromAddress { network: String, address: String },

    #[error("reporter name cannot be empty")]
    EmptyReporter,

    #[error("invalid reporter currency '{0}'")]
    InvalidCurrency(String),

    #[error("optimizer runs must be greater than 0 when the optimizer is enabled")]
    ZeroOptimizerRuns,

    #[error("{field} value {value} exceeds the largest storable integer")]
    ValueOutOfRange { field: String, value: u64 },
}

/// TOML integers are signed 64-bit
pub const MAX_INTEGER: u64 = i64::MAX as u64;

pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Configuration validation utilities
#[derive(Debug, Default)]
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check every section and collect all problems
    pub fn validate(&self, config: &DevchainConfig) -> ValidationResult {
        let mut issues = Vec::new();

        if config.networks.is_empty() {
            issues.push(ValidationError::NoNetworks);
        }
        for (name, profile) in &config.networks {
            check_profile(name, profile, &mut issues);
        }
        check_reporter(&config.mocha, &mut issues);
        if let Some(solc) = &config.solc {
            check_compiler(solc, &mut issues);
        }

        if issues.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = issues.len(), "configuration failed validation");
            Err(issues)
        }
    }
}

pub(crate) fn check_profile(name: &str, profile: &NetworkProfile, issues: &mut Vec<ValidationError>) {
    if name.trim().is_empty() {
        issues.push(ValidationError::EmptyNetworkName);
    }
    if profile.host.trim().is_empty() {
        issues.push(ValidationError::EmptyHost(name.to_string()));
    }
    if profile.port == 0 {
        issues.push(ValidationError::ZeroPort(name.to_string()));
    }
    if profile.gas == 0 {
        issues.push(ValidationError::ZeroGas(name.to_string()));
    }
    if profile.gas_price == Some(0) {
        issues.push(ValidationError::ZeroGasPrice(name.to_string()));
    }
    check_range(&format!("network '{}': gas", name), profile.gas, issues);
    if let Some(gas_price) = profile.gas_price {
        check_range(&format!("network '{}': gas_price", name), gas_price, issues);
    }
    if let Some(address) = &profile.from {
        if !is_account_address(address) {
            issues.push(ValidationError::InvalidFromAddress {
                network: name.to_string(),
                address: address.clone(),
            });
        }
    }
}

pub(crate) fn check_reporter(reporter: &ReporterConfig, issues: &mut Vec<ValidationError>) {
    if reporter.reporter.trim().is_empty() {
        issues.push(ValidationError::EmptyReporter);
    }
    let currency = &reporter.reporter_options.currency;
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
        issues.push(ValidationError::InvalidCurrency(currency.clone()));
    }
    check_range("reporter gasPrice", reporter.reporter_options.gas_price, issues);
}

fn check_range(field: &str, value: u64, issues: &mut Vec<ValidationError>) {
    if value > MAX_INTEGER {
        issues.push(ValidationError::ValueOutOfRange {
            field: field.to_string(),
            value,
        });
    }
}

pub(crate) fn check_compiler(solc: &SolcConfig, issues: &mut Vec<ValidationError>) {
    if solc.optimizer.enabled && solc.optimizer.runs == 0 {
        issues.push(ValidationError::ZeroOptimizerRuns);
    }
}

pub(crate) fn first_failure(issues: Vec<ValidationError>) -> ConfigResult<()> {
    match issues.into_iter().next() {
        Some(issue) => Err(ConfigError::Validation(issue.to_string())),
        None => Ok(()),
    }
}

/// `0x` followed by 20 bytes of hex
pub fn is_account_address(address: &str) -> bool {
    let Some(digits) = address.strip_prefix("0x") else {
        return false;
    };
    matches!(hex::decode(digits), Ok(bytes) if bytes.len() == 20)
}
