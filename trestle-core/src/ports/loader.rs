// trestle-core/src/ports/loader.rs

// The converter prepares a validated, canonical configuration; actually
// parsing the transform project into a node graph happens behind this port.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::config::{ExecutionConfig, ProfileConfig, ProjectConfig, RenderConfig};
use crate::domain::nodes::NodeSet;
use crate::error::TrestleError;

/// Everything a loader may need to parse the project. Paths are guaranteed
/// to be in their final (split) form by the time this is constructed.
pub struct LoadRequest<'a> {
    pub project: &'a ProjectConfig,
    pub render: &'a RenderConfig,
    pub execution: &'a ExecutionConfig,
    pub profile: Option<&'a ProfileConfig>,
    /// Effective variable map after project/operator-arg precedence.
    pub vars: Option<&'a HashMap<String, serde_json::Value>>,
}

#[async_trait]
pub trait GraphLoader: Send + Sync {
    /// Failures are domain-specific loading errors and propagate unchanged;
    /// the converter never retries them.
    async fn load(&self, request: &LoadRequest<'_>) -> Result<NodeSet, TrestleError>;
}
