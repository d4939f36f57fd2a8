use crate::error::ConfigResult;
use crate::loader::validation::{check_compiler, first_failure};
use serde::{Deserialize, Serialize};

/// Solidity compiler settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SolcConfig {
    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

/// Bytecode optimizer settings. Disabled unless a loaded file enables it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Expected number of contract executions to optimize for
    #[serde(default = "default_runs")]
    pub runs: u32,
}

fn default_runs() -> u32 {
    200
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: default_runs(),
        }
    }
}

impl SolcConfig {
    pub fn optimizer_enabled(&self) -> bool {
        self.optimizer.enabled
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let mut issues = Vec::new();
        check_compiler(self, &mut issues);
        first_failure(issues)
    }
}
