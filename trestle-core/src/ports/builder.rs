// trestle-core/src/ports/builder.rs

// Translating the node set into scheduler tasks and wiring their dependency
// edges belongs to the host adapter behind this port.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::config::{ExecutionMode, IndirectSelection, RenderConfig};
use crate::domain::nodes::NodeSet;
use crate::domain::target::{DagRef, TaskGroupRef};
use crate::domain::task_args::TaskArgs;
use crate::error::TrestleError;

/// Test outcome payload the builder reports through the warning callback.
/// Each index in `test_names` corresponds to the same index in `test_results`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestWarning {
    pub test_names: Vec<String>,
    pub test_results: Vec<String>,
}

pub type WarningCallback = Arc<dyn Fn(&TestWarning) + Send + Sync>;

pub struct BuildRequest<'a> {
    pub nodes: &'a NodeSet,
    pub dag: &'a DagRef,
    pub task_group: Option<&'a TaskGroupRef>,
    pub execution_mode: ExecutionMode,
    pub task_args: &'a TaskArgs,
    pub test_indirect_selection: IndirectSelection,
    pub project_name: &'a str,
    pub on_warning: Option<WarningCallback>,
    pub render: &'a RenderConfig,
}

#[async_trait]
pub trait TaskGraphBuilder: Send + Sync {
    /// Side effect is populating the host DAG / task group; the converter
    /// consumes no return value. Failures propagate unchanged.
    async fn build(&self, request: &BuildRequest<'_>) -> Result<(), TrestleError>;
}
