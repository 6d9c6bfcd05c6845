// trestle-core/src/application/validation.rs

use crate::domain::config::{
    ExecutionConfig, ExecutionMode, OperatorArgs, ProfileConfig, ProjectConfig, RenderConfig,
};
use crate::domain::diagnostics::DiagnosticSink;
use crate::domain::error::ConfigurationError;
use crate::domain::selector;
use crate::domain::task_args::TaskArgs;
use crate::error::TrestleError;
use crate::infrastructure::profiles;

/// Validates the fields as the user set them, before any migration.
///
/// Deprecated channels that are merely present produce a notice; a deprecated
/// channel set alongside its canonical counterpart is fatal.
pub fn validate_initial_user_config(
    execution: &ExecutionConfig,
    profile: Option<&ProfileConfig>,
    project: &ProjectConfig,
    render: &RenderConfig,
    operator_args: &OperatorArgs,
    diagnostics: &mut DiagnosticSink,
) -> Result<(), ConfigurationError> {
    if profile.is_none() && execution.execution_mode.requires_profile() {
        return Err(ConfigurationError::MissingProfile {
            mode: execution.execution_mode,
        });
    }

    // Only one path interface may be in use at a time.
    if project.project_dir.is_some()
        && (render.project_dir.is_some() || execution.project_dir.is_some())
    {
        return Err(ConfigurationError::AmbiguousProjectPath);
    }

    if operator_args.env.is_some() {
        diagnostics.deprecate(
            "operator_args.env",
            "Passing 'env' through operator args is deprecated. Use ProjectConfig.env_vars instead.",
        );
        if project.env_vars.is_some() {
            return Err(ConfigurationError::MutuallyExclusive {
                canonical: "ProjectConfig.env_vars",
                deprecated: "operator_args.env",
            });
        }
    }

    if operator_args.vars.is_some() {
        diagnostics.deprecate(
            "operator_args.vars",
            "Passing 'vars' through operator args is deprecated. Use ProjectConfig.vars instead.",
        );
        if project.vars.is_some() {
            return Err(ConfigurationError::MutuallyExclusive {
                canonical: "ProjectConfig.vars",
                deprecated: "operator_args.vars",
            });
        }
    }

    // RenderConfig.env_vars is a deprecated duplicate channel.
    if render.env_vars.is_some() {
        if project.env_vars.is_some() {
            return Err(ConfigurationError::MutuallyExclusive {
                canonical: "ProjectConfig.env_vars",
                deprecated: "RenderConfig.env_vars",
            });
        }
        diagnostics.deprecate(
            "render_config.env_vars",
            "RenderConfig.env_vars is deprecated. Use ProjectConfig.env_vars instead.",
        );
    }

    Ok(())
}

/// Validates that everything required to render and execute is set, once the
/// path fields are in their final (split) form.
pub fn validate_adapted_user_config(
    execution: &ExecutionConfig,
    project: &ProjectConfig,
    render: &RenderConfig,
) -> Result<(), ConfigurationError> {
    if execution.project_dir.is_none() {
        return Err(ConfigurationError::UnresolvedExecutionPath);
    }

    // The graph must be loadable from a precomputed manifest or a live
    // project directory.
    if project.manifest_path.is_none() && render.project_dir.is_none() {
        return Err(ConfigurationError::MissingRenderSource);
    }

    Ok(())
}

/// Last validation pass, over the assembled task-argument bundle: selector
/// conflicts, the deprecated schema override, and the profile itself for
/// modes that connect directly to a warehouse.
pub fn validate_task_arguments(
    render: &RenderConfig,
    profile: Option<&ProfileConfig>,
    task_args: &mut TaskArgs,
    operator_args: &OperatorArgs,
    execution_mode: ExecutionMode,
    diagnostics: &mut DiagnosticSink,
) -> Result<(), TrestleError> {
    for label in selector::CONFLICT_LABELS {
        let conflicts = selector::conflicting_values(&render.select, &render.exclude, label);
        if !conflicts.is_empty() {
            return Err(ConfigurationError::SelectorConflict {
                label: label.to_string(),
                values: conflicts.into_iter().collect(),
            }
            .into());
        }
    }

    // The override amends the bundled profile clone, not the caller's object.
    if let Some(schema) = &operator_args.schema {
        diagnostics.deprecate(
            "operator_args.schema",
            "Passing 'schema' through operator args is deprecated. Use the profile argument map instead.",
        );
        task_args.apply_schema_override(schema);
    }

    if matches!(
        execution_mode,
        ExecutionMode::Local | ExecutionMode::Virtualenv
    ) && let Some(profile) = profile
    {
        profile.validate()?;
        profiles::verify_declared_profile(profile)?;
    }

    Ok(())
}
