use crate::error::ConfigResult;
use crate::loader::validation::{check_reporter, first_failure};
use serde::{Deserialize, Serialize};

/// Test runner reporter selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// Reporter identifier handed to the test runner
    pub reporter: String,

    /// Options forwarded to the reporter
    #[serde(rename = "reporterOptions")]
    pub reporter_options: ReporterOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReporterOptions {
    /// ISO 4217 currency code used for cost estimates
    pub currency: String,

    /// Gas price in gwei used for cost estimates
    #[serde(rename = "gasPrice")]
    pub gas_price: u64,
}

impl ReporterConfig {
    /// Gas usage reporter in USD at 1 gwei
    pub fn gas_reporter() -> Self {
        Self {
            reporter: "eth-gas-reporter".to_string(),
            reporter_options: ReporterOptions {
                currency: "USD".to_string(),
                gas_price: 1,
            },
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let mut issues = Vec::new();
        check_reporter(self, &mut issues);
        first_failure(issues)
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self::gas_reporter()
    }
}
