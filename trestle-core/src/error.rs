// trestle-core/src/error.rs

use crate::domain::error::ConfigurationError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrestleError {
    // --- CONFIGURATION (invariant violations, conflicting interfaces) ---
    #[error(transparent)]
    Config(#[from] ConfigurationError),

    // --- INFRASTRUCTURE (IO, YAML parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- PORT BOUNDARY ---
    // Raised by GraphLoader implementations; propagated unchanged, never retried.
    #[error("Failed to load the transform project graph: {0}")]
    GraphLoad(String),

    // Raised by TaskGraphBuilder implementations; propagated unchanged.
    #[error("Failed to populate the scheduler graph: {0}")]
    GraphBuild(String),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for TrestleError {
    fn from(err: std::io::Error) -> Self {
        TrestleError::Infrastructure(InfrastructureError::Io(err))
    }
}
