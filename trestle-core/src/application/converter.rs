// trestle-core/src/application/converter.rs

use tracing::{info, instrument};

use crate::application::migration::migrate_to_split_interface;
use crate::application::validation::{
    validate_adapted_user_config, validate_initial_user_config, validate_task_arguments,
};
use crate::domain::config::{
    ExecutionConfig, OperatorArgs, ProfileConfig, ProjectConfig, RenderConfig,
};
use crate::domain::diagnostics::{DeprecationNotice, DiagnosticSink};
use crate::domain::error::ConfigurationError;
use crate::domain::target::{DagRef, ParsingContext, TaskGroupRef};
use crate::domain::task_args::TaskArgs;
use crate::error::TrestleError;
use crate::ports::{BuildRequest, GraphLoader, LoadRequest, TaskGraphBuilder, WarningCallback};

/// Everything a host hands over to convert one transform project into tasks
/// inside one DAG or task group. Configs are borrowed: the converter clones
/// before any rewrite and never mutates the caller's objects.
pub struct ConversionRequest<'a> {
    pub project: &'a ProjectConfig,
    pub profile: Option<&'a ProfileConfig>,
    pub execution: Option<&'a ExecutionConfig>,
    pub render: Option<&'a RenderConfig>,
    pub operator_args: Option<&'a OperatorArgs>,
    pub dag: Option<&'a DagRef>,
    pub task_group: Option<&'a TaskGroupRef>,
    pub on_warning: Option<WarningCallback>,
    /// When false (the default), a conversion invoked while the host parser
    /// is materialising a *different* DAG stops before any expensive work.
    pub parse_all_dags: bool,
}

impl<'a> ConversionRequest<'a> {
    pub fn new(project: &'a ProjectConfig) -> Self {
        Self {
            project,
            profile: None,
            execution: None,
            render: None,
            operator_args: None,
            dag: None,
            task_group: None,
            on_warning: None,
            parse_all_dags: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The multi-DAG-parse shortcut fired: nothing was validated or built.
    Skipped,
    /// The scheduler graph was populated from this many project nodes.
    Built { nodes: usize },
}

/// Result of a conversion, carrying the deprecation notices collected along
/// the way for the host to log or ignore.
#[derive(Debug)]
pub struct ConversionReport {
    pub outcome: ConversionOutcome,
    pub deprecations: Vec<DeprecationNotice>,
}

/// Drives one conversion end to end: resolve the target, validate and
/// migrate the configuration, load the project graph and hand the result to
/// the external builder. Any validation error aborts the whole build; no
/// partial graph is ever constructed.
#[instrument(skip_all, fields(project = ?request.project.resolved_name()))]
pub async fn convert<L, B>(
    request: ConversionRequest<'_>,
    parsing_context: &ParsingContext,
    loader: &L,
    builder: &B,
) -> Result<ConversionReport, TrestleError>
where
    L: GraphLoader,
    B: TaskGraphBuilder,
{
    // 1. TARGET RESOLUTION (a task group implies its owning DAG)
    let dag = request
        .dag
        .or(request.task_group.map(|group| &group.dag))
        .ok_or(ConfigurationError::MissingTarget)?;

    // 2. MULTI-DAG PARSE SHORTCUT
    // Hosts instantiate the converter once per candidate DAG file even though
    // only one DAG per file is ultimately materialised.
    if !request.parse_all_dags
        && let Some(current_dag_id) = &parsing_context.current_dag_id
        && current_dag_id != &dag.dag_id
    {
        info!(
            dag_id = %dag.dag_id,
            current = %current_dag_id,
            "Not the DAG being materialised, skipping conversion"
        );
        return Ok(ConversionReport {
            outcome: ConversionOutcome::Skipped,
            deprecations: Vec::new(),
        });
    }

    request.project.validate_project()?;

    // 3. DEFAULT MISSING CONFIGS
    let default_execution = ExecutionConfig::default();
    let default_render = RenderConfig::default();
    let default_operator_args = OperatorArgs::default();
    let execution = request.execution.unwrap_or(&default_execution);
    let render = request.render.unwrap_or(&default_render);
    let operator_args = request.operator_args.unwrap_or(&default_operator_args);

    let mut diagnostics = DiagnosticSink::new();

    validate_initial_user_config(
        execution,
        request.profile,
        request.project,
        render,
        operator_args,
        &mut diagnostics,
    )?;

    // 4. LEGACY INTERFACE MIGRATION
    // Safe now that initial validation confirmed which path interface is in
    // use; works on clones so reused configs never leak state across builds.
    let (execution, render) = if request.project.project_dir.is_some() {
        migrate_to_split_interface(execution, request.project, render)
    } else {
        (execution.clone(), render.clone())
    };

    validate_adapted_user_config(&execution, request.project, &render)?;

    // 5. EFFECTIVE VARIABLES
    // Presence decides precedence: a project-level map wins even when empty.
    let env_vars = request
        .project
        .env_vars
        .clone()
        .or_else(|| operator_args.env.clone());
    let vars = request
        .project
        .vars
        .clone()
        .or_else(|| operator_args.vars.clone());

    // 6. LOAD THE PROJECT GRAPH (failures propagate unchanged)
    let nodes = loader
        .load(&LoadRequest {
            project: request.project,
            render: &render,
            execution: &execution,
            profile: request.profile,
            vars: vars.as_ref(),
        })
        .await?;
    info!(nodes = nodes.len(), "Transform project graph loaded");

    // 7. TASK ARGUMENT BUNDLE
    let project_dir = execution
        .project_dir
        .clone()
        .ok_or(ConfigurationError::UnresolvedExecutionPath)?;
    let mut task_args = TaskArgs {
        passthrough: operator_args.extra.clone(),
        project_dir,
        partial_parse: request.project.partial_parse,
        profile: request.profile.cloned(),
        emit_datasets: render.emit_datasets,
        env: env_vars,
        vars,
        executable_path: execution.executable_path.clone(),
        invocation_mode: execution.invocation_mode,
    };

    validate_task_arguments(
        &render,
        request.profile,
        &mut task_args,
        operator_args,
        execution.execution_mode,
        &mut diagnostics,
    )?;

    // 8. HAND OFF TO THE EXTERNAL BUILDER
    let project_name = request
        .project
        .resolved_name()
        .ok_or(ConfigurationError::UnnamedProject)?;
    builder
        .build(&BuildRequest {
            nodes: &nodes,
            dag,
            task_group: request.task_group,
            execution_mode: execution.execution_mode,
            task_args: &task_args,
            test_indirect_selection: execution.test_indirect_selection,
            project_name: &project_name,
            on_warning: request.on_warning.clone(),
            render: &render,
        })
        .await?;
    info!(dag_id = %dag.dag_id, "Scheduler graph populated");

    Ok(ConversionReport {
        outcome: ConversionOutcome::Built { nodes: nodes.len() },
        deprecations: diagnostics.into_notices(),
    })
}
