//! Configuration structures and types
pub mod compiler;
pub mod devchain;
pub mod network;
pub mod reporter;

// Re-export main config types
pub use compiler::{OptimizerConfig, SolcConfig};
pub use devchain::DevchainConfig;
pub use network::{NetworkId, NetworkProfile};
pub use reporter::{ReporterConfig, ReporterOptions};
