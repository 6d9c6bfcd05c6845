// trestle-core/src/domain/task_args.rs

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::domain::config::{InvocationMode, ProfileConfig};

/// The merged argument bundle handed to the external graph builder for every
/// task it creates. Optional fields stay `None` when unset and are skipped
/// on serialization, so an absent setting never turns into a
/// present-but-empty key on the task side.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TaskArgs {
    /// Operator-level arguments passed through untouched.
    pub passthrough: BTreeMap<String, serde_json::Value>,

    pub project_dir: PathBuf,
    pub partial_parse: bool,

    /// Private clone of the caller's profile; the schema override folds into
    /// this copy, never into the caller's object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileConfig>,

    pub emit_datasets: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<HashMap<String, serde_json::Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation_mode: Option<InvocationMode>,
}

impl TaskArgs {
    /// Folds a deprecated schema override into the bundled profile's
    /// argument map. Returns whether a profile mapping was there to amend.
    pub fn apply_schema_override(&mut self, schema: &str) -> bool {
        if let Some(mapping) = self
            .profile
            .as_mut()
            .and_then(|profile| profile.profile_mapping.as_mut())
        {
            mapping
                .profile_args
                .insert("schema".to_string(), serde_json::Value::from(schema));
            true
        } else {
            false
        }
    }
}
