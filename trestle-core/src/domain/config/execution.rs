// trestle-core/src/domain/config/execution.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// How a transform task actually runs.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    #[default]
    Local,
    Virtualenv,
    Docker,
    Kubernetes,
    AwsEks,
    AzureContainerInstance,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Local => "local",
            Self::Virtualenv => "virtualenv",
            Self::Docker => "docker",
            Self::Kubernetes => "kubernetes",
            Self::AwsEks => "aws_eks",
            Self::AzureContainerInstance => "azure_container_instance",
        };
        write!(f, "{}", name)
    }
}

impl ExecutionMode {
    /// Containerised modes carry their own warehouse credentials, so a
    /// profile is not mandatory for them.
    pub fn requires_profile(&self) -> bool {
        !matches!(self, Self::Kubernetes | Self::Docker)
    }
}

/// How the transform executable is invoked inside a task.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvocationMode {
    Subprocess,
    InProcess,
}

/// Which tests ride along when a selected node is executed.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IndirectSelection {
    #[default]
    Eager,
    Cautious,
    Buildable,
    Empty,
}

/// Controls how transform tasks run once the graph is built.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ExecutionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_dir: Option<PathBuf>,

    #[serde(default)]
    pub execution_mode: ExecutionMode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation_mode: Option<InvocationMode>,

    #[serde(default)]
    pub test_indirect_selection: IndirectSelection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_requirement_per_mode() {
        assert!(ExecutionMode::Local.requires_profile());
        assert!(ExecutionMode::Virtualenv.requires_profile());
        assert!(ExecutionMode::AwsEks.requires_profile());
        assert!(!ExecutionMode::Kubernetes.requires_profile());
        assert!(!ExecutionMode::Docker.requires_profile());
    }
}
