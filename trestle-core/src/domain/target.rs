// trestle-core/src/domain/target.rs

use serde::{Deserialize, Serialize};

/// Handle to a host-scheduler DAG. The scheduler's own object model stays on
/// the host side; the converter only needs a stable identifier.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DagRef {
    pub dag_id: String,
}

impl DagRef {
    pub fn new(dag_id: impl Into<String>) -> Self {
        Self {
            dag_id: dag_id.into(),
        }
    }
}

/// Handle to a named task grouping inside a host DAG. A group always knows
/// its owning DAG, so supplying only a group is enough to resolve a target.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TaskGroupRef {
    pub group_id: String,
    pub dag: DagRef,
}

impl TaskGroupRef {
    pub fn new(group_id: impl Into<String>, dag: DagRef) -> Self {
        Self {
            group_id: group_id.into(),
            dag,
        }
    }
}

/// What the host parser reports it is currently materialising. Threaded in
/// explicitly by the host adapter; never fetched from ambient global state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsingContext {
    /// Unset when not inside a multi-DAG parse pass.
    pub current_dag_id: Option<String>,
}

impl ParsingContext {
    pub fn outside_parse() -> Self {
        Self::default()
    }

    pub fn for_dag(dag_id: impl Into<String>) -> Self {
        Self {
            current_dag_id: Some(dag_id.into()),
        }
    }
}
