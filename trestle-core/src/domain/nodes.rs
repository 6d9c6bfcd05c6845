// trestle-core/src/domain/nodes.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Model,
    Test,
    Snapshot,
    Seed,
    Source,
}

/// One node of the parsed transform project, as produced by the external
/// graph loader and consumed by the external task-graph builder.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TransformNode {
    pub unique_id: String,
    pub resource_type: ResourceType,

    #[serde(default)]
    pub depends_on: Vec<String>,

    pub file_path: PathBuf,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub config: HashMap<String, serde_json::Value>,
}

impl TransformNode {
    /// Trailing segment of the unique id (`model.demo.orders` -> `orders`).
    pub fn name(&self) -> &str {
        self.unique_id
            .rsplit('.')
            .next()
            .unwrap_or(&self.unique_id)
    }
}

/// Node set keyed by unique id.
pub type NodeSet = HashMap<String, TransformNode>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_name_is_last_segment() {
        let node = TransformNode {
            unique_id: "model.revenue.orders".to_string(),
            resource_type: ResourceType::Model,
            depends_on: vec![],
            file_path: PathBuf::from("models/orders.sql"),
            tags: vec![],
            config: HashMap::new(),
        };
        assert_eq!(node.name(), "orders");
    }
}
