// trestle-core/src/domain/config/operator_args.rs

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Arguments addressed to the underlying task operators, declared statically
/// instead of being fished out of a free-form keyword map.
///
/// `env`, `vars` and `schema` are deprecated channels kept for backward
/// compatibility: the canonical homes are `ProjectConfig.env_vars`,
/// `ProjectConfig.vars` and the profile argument map.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct OperatorArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<HashMap<String, serde_json::Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Passed through untouched to every task the builder creates.
    #[serde(default)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
