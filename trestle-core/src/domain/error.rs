// trestle-core/src/domain/error.rs

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::config::ExecutionMode;

/// The single error kind of the configuration layer. Every failure here is a
/// build-time configuration mistake, never a transient condition.
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigurationError {
    #[error("Either a dag or a task group must be provided")]
    #[diagnostic(
        code(trestle::config::missing_target),
        help("A task group implies its owning dag; pass at least one of the two.")
    )]
    MissingTarget,

    #[error("The profile configuration is mandatory when using the {mode} execution mode")]
    #[diagnostic(
        code(trestle::config::missing_profile),
        help("Only containerised modes (kubernetes, docker) carry their own credentials.")
    )]
    MissingProfile { mode: ExecutionMode },

    #[error(
        "ProjectConfig.project_dir is mutually exclusive with RenderConfig.project_dir and ExecutionConfig.project_dir"
    )]
    #[diagnostic(
        code(trestle::config::ambiguous_project_path),
        help(
            "When using the split render/execution paths, leave ProjectConfig.project_dir unset."
        )
    )]
    AmbiguousProjectPath,

    #[error("{canonical} and {deprecated} are mutually exclusive and only one can be used")]
    #[diagnostic(code(trestle::config::mutually_exclusive))]
    MutuallyExclusive {
        canonical: &'static str,
        deprecated: &'static str,
    },

    #[error("A project requires at least one of project_dir or manifest_path")]
    #[diagnostic(code(trestle::config::missing_project_source))]
    MissingProjectSource,

    #[error("A project name is required when only a manifest_path is provided")]
    #[diagnostic(
        code(trestle::config::unnamed_project),
        help("The name can only be derived from a project directory.")
    )]
    UnnamedProject,

    #[error("ExecutionConfig.project_dir is required to execute transform tasks in every mode")]
    #[diagnostic(code(trestle::config::unresolved_execution_path))]
    UnresolvedExecutionPath,

    #[error(
        "RenderConfig.project_dir is required to render the scheduler graph when no manifest is provided"
    )]
    #[diagnostic(
        code(trestle::config::missing_render_source),
        help("Set ProjectConfig.manifest_path or RenderConfig.project_dir.")
    )]
    MissingRenderSource,

    #[error("Cannot specify the same {label} in both select and exclude: {values:?}")]
    #[diagnostic(code(trestle::config::selector_conflict))]
    SelectorConflict { label: String, values: Vec<String> },

    #[error("Invalid profile configuration: {0}")]
    #[diagnostic(code(trestle::config::invalid_profile))]
    InvalidProfile(String),

    #[error("Profile '{profile}' is not declared in {path:?}")]
    #[diagnostic(code(trestle::config::profile_not_declared))]
    ProfileNotDeclared { profile: String, path: PathBuf },

    #[error("Target '{target}' is not declared for profile '{profile}'")]
    #[diagnostic(code(trestle::config::target_not_declared))]
    TargetNotDeclared { target: String, profile: String },
}
