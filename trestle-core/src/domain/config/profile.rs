// trestle-core/src/domain/config/profile.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use validator::Validate;

use crate::domain::error::ConfigurationError;

/// A profile described in code rather than in a profiles file. Its argument
/// map may be amended with a schema override coming from operator args.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ProfileMapping {
    pub connection_id: String,

    #[serde(default)]
    pub profile_args: HashMap<String, serde_json::Value>,
}

/// Named set of warehouse connection parameters used by executed tasks.
/// Required unless the execution mode is containerised.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
pub struct ProfileConfig {
    #[validate(length(min = 1, message = "profile_name cannot be empty"))]
    pub profile_name: String,

    #[validate(length(min = 1, message = "target_name cannot be empty"))]
    pub target_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_mapping: Option<ProfileMapping>,
}

impl ProfileConfig {
    /// Structural validation: non-empty names and exactly one credential
    /// source. The file-backed half (does the profiles file declare this
    /// profile/target) lives in `infrastructure::profiles`.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        Validate::validate(self).map_err(|e| ConfigurationError::InvalidProfile(e.to_string()))?;
        match (&self.profiles_path, &self.profile_mapping) {
            (Some(_), Some(_)) => Err(ConfigurationError::InvalidProfile(
                "profiles_path and profile_mapping are mutually exclusive".to_string(),
            )),
            (None, None) => Err(ConfigurationError::InvalidProfile(
                "either profiles_path or profile_mapping must be provided".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
