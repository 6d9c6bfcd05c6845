// trestle-core/src/domain/config/project.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::error::ConfigurationError;

/// Identifies the transform project being converted.
///
/// `project_dir` is the legacy combined path interface: when it is set, the
/// split `RenderConfig.project_dir` / `ExecutionConfig.project_dir` paths
/// must stay unset, and migration copies it into both.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProjectConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_vars: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<HashMap<String, serde_json::Value>>,

    #[serde(default = "default_true")]
    pub partial_parse: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_dir: None,
            manifest_path: None,
            project_name: None,
            env_vars: None,
            vars: None,
            partial_parse: true,
        }
    }
}

impl ProjectConfig {
    pub fn from_project_dir(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: Some(project_dir.into()),
            ..Self::default()
        }
    }

    /// Explicit name, or the final component of the project directory.
    pub fn resolved_name(&self) -> Option<String> {
        self.project_name.clone().or_else(|| {
            self.project_dir
                .as_ref()
                .and_then(|dir| dir.file_name())
                .map(|name| name.to_string_lossy().into_owned())
        })
    }

    /// Structural check run before anything expensive: the project must be
    /// loadable from somewhere, and it must have a resolvable name.
    pub fn validate_project(&self) -> Result<(), ConfigurationError> {
        if self.project_dir.is_none() && self.manifest_path.is_none() {
            return Err(ConfigurationError::MissingProjectSource);
        }
        if self.resolved_name().is_none() {
            return Err(ConfigurationError::UnnamedProject);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_name_derived_from_project_dir() {
        let config = ProjectConfig::from_project_dir("/data/projects/revenue");
        assert_eq!(config.resolved_name().unwrap(), "revenue");
        assert!(config.validate_project().is_ok());
    }

    #[test]
    fn test_explicit_name_wins_over_directory() {
        let config = ProjectConfig {
            project_name: Some("billing".to_string()),
            ..ProjectConfig::from_project_dir("/data/projects/revenue")
        };
        assert_eq!(config.resolved_name().unwrap(), "billing");
    }

    #[test]
    fn test_project_without_any_source_is_rejected() {
        let config = ProjectConfig::default();
        assert!(matches!(
            config.validate_project(),
            Err(ConfigurationError::MissingProjectSource)
        ));
    }

    #[test]
    fn test_manifest_only_project_requires_a_name() {
        let config = ProjectConfig {
            manifest_path: Some(PathBuf::from("/artifacts/manifest.json")),
            ..ProjectConfig::default()
        };
        assert!(matches!(
            config.validate_project(),
            Err(ConfigurationError::UnnamedProject)
        ));

        let named = ProjectConfig {
            project_name: Some("revenue".to_string()),
            ..config
        };
        assert!(named.validate_project().is_ok());
    }

    #[test]
    fn test_partial_parse_defaults_to_true() {
        assert!(ProjectConfig::default().partial_parse);
    }
}
