// trestle-core/src/infrastructure/profiles.rs

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use tracing::debug;

use crate::domain::config::ProfileConfig;
use crate::domain::error::ConfigurationError;
use crate::error::TrestleError;
use crate::infrastructure::error::InfrastructureError;

// Minimal view of a profiles file: each profile declares its targets under
// `outputs`. Everything else in the file is the executor's business.
#[derive(Debug, Deserialize)]
struct DeclaredProfile {
    #[serde(default)]
    outputs: HashMap<String, serde_yaml::Value>,
}

/// Checks that the profiles file configured on `profile` exists, parses as
/// YAML and declares the expected profile and target output. Invoked only
/// for execution modes that connect directly to a warehouse.
pub fn verify_declared_profile(profile: &ProfileConfig) -> Result<(), TrestleError> {
    // Mapped profiles carry their arguments in code; there is no file to check.
    let Some(path) = &profile.profiles_path else {
        return Ok(());
    };

    if !path.exists() {
        return Err(InfrastructureError::ProfilesFileMissing(path.clone()).into());
    }

    let content = fs::read_to_string(path).map_err(InfrastructureError::Io)?;
    let declared: HashMap<String, DeclaredProfile> =
        serde_yaml::from_str(&content).map_err(InfrastructureError::YamlError)?;

    let entry =
        declared
            .get(&profile.profile_name)
            .ok_or_else(|| ConfigurationError::ProfileNotDeclared {
                profile: profile.profile_name.clone(),
                path: path.clone(),
            })?;

    if !entry.outputs.contains_key(&profile.target_name) {
        return Err(ConfigurationError::TargetNotDeclared {
            target: profile.target_name.clone(),
            profile: profile.profile_name.clone(),
        }
        .into());
    }

    debug!(
        profile = %profile.profile_name,
        target = %profile.target_name,
        "Profiles file verified"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    const PROFILES_YML: &str = "\
warehouse:
  target: dev
  outputs:
    dev:
      type: postgres
      host: localhost
      schema: analytics
";

    fn file_profile(path: PathBuf) -> ProfileConfig {
        ProfileConfig {
            profile_name: "warehouse".to_string(),
            target_name: "dev".to_string(),
            profiles_path: Some(path),
            profile_mapping: None,
        }
    }

    fn write_profiles(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("profiles.yml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(PROFILES_YML.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_declared_profile_and_target_pass() {
        let dir = tempfile::tempdir().unwrap();
        let profile = file_profile(write_profiles(&dir));
        assert!(verify_declared_profile(&profile).is_ok());
    }

    #[test]
    fn test_missing_file_is_an_infrastructure_error() {
        let profile = file_profile(PathBuf::from("/nonexistent/profiles.yml"));
        assert!(matches!(
            verify_declared_profile(&profile),
            Err(TrestleError::Infrastructure(
                InfrastructureError::ProfilesFileMissing(_)
            ))
        ));
    }

    #[test]
    fn test_undeclared_profile_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let profile = ProfileConfig {
            profile_name: "lakehouse".to_string(),
            ..file_profile(write_profiles(&dir))
        };
        assert!(matches!(
            verify_declared_profile(&profile),
            Err(TrestleError::Config(
                ConfigurationError::ProfileNotDeclared { .. }
            ))
        ));
    }

    #[test]
    fn test_undeclared_target_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let profile = ProfileConfig {
            target_name: "prod".to_string(),
            ..file_profile(write_profiles(&dir))
        };
        assert!(matches!(
            verify_declared_profile(&profile),
            Err(TrestleError::Config(
                ConfigurationError::TargetNotDeclared { .. }
            ))
        ));
    }

    #[test]
    fn test_mapped_profile_skips_the_file_check() {
        let profile = ProfileConfig {
            profile_name: "warehouse".to_string(),
            target_name: "dev".to_string(),
            profiles_path: None,
            profile_mapping: Some(Default::default()),
        };
        assert!(verify_declared_profile(&profile).is_ok());
    }
}
