// trestle-core/src/application/migration.rs

use crate::domain::config::{ExecutionConfig, ProjectConfig, RenderConfig};

/// Rewrites the legacy combined-path interface into the split one.
///
/// The same configuration objects may back several DAG or task-group
/// definitions in one host process, so the rewrite happens on private clones;
/// the inputs are never touched. Invoked only once initial validation has
/// confirmed no conflicting split paths exist.
pub fn migrate_to_split_interface(
    execution: &ExecutionConfig,
    project: &ProjectConfig,
    render: &RenderConfig,
) -> (ExecutionConfig, RenderConfig) {
    let mut execution = execution.clone();
    let mut render = render.clone();
    execution.project_dir = project.project_dir.clone();
    render.project_dir = project.project_dir.clone();
    (execution, render)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_migration_copies_the_combined_path_into_both_configs() {
        let project = ProjectConfig::from_project_dir("/data/projects/revenue");
        let execution = ExecutionConfig::default();
        let render = RenderConfig::default();

        let (migrated_execution, migrated_render) =
            migrate_to_split_interface(&execution, &project, &render);

        let expected = Some(PathBuf::from("/data/projects/revenue"));
        assert_eq!(migrated_execution.project_dir, expected);
        assert_eq!(migrated_render.project_dir, expected);
    }

    #[test]
    fn test_migration_never_mutates_the_inputs() {
        let project = ProjectConfig::from_project_dir("/data/projects/revenue");
        let execution = ExecutionConfig::default();
        let render = RenderConfig {
            select: vec!["tag:nightly".to_string()],
            ..RenderConfig::default()
        };

        let execution_snapshot = execution.clone();
        let render_snapshot = render.clone();

        let _ = migrate_to_split_interface(&execution, &project, &render);

        assert_eq!(execution, execution_snapshot);
        assert_eq!(render, render_snapshot);
        assert_eq!(render.project_dir, None);
    }
}
