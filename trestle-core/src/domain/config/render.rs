// trestle-core/src/domain/config/render.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Strategy used by the external loader to turn the project into a node set.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoadMethod {
    #[default]
    Automatic,
    FromManifest,
    ProjectScan,
    Custom,
}

/// Where test tasks land relative to the models they cover.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TestBehavior {
    None,
    #[default]
    AfterEach,
    AfterAll,
}

/// Controls how the project graph is turned into scheduler tasks.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RenderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_dir: Option<PathBuf>,

    #[serde(default)]
    pub select: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,

    // Deprecated duplicate of ProjectConfig.env_vars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_vars: Option<HashMap<String, String>>,

    #[serde(default)]
    pub load_method: LoadMethod,

    #[serde(default = "default_true")]
    pub emit_datasets: bool,

    #[serde(default)]
    pub test_behavior: TestBehavior,
}

fn default_true() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            project_dir: None,
            select: Vec::new(),
            exclude: Vec::new(),
            env_vars: None,
            load_method: LoadMethod::Automatic,
            emit_datasets: true,
            test_behavior: TestBehavior::AfterEach,
        }
    }
}
