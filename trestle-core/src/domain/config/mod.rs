pub mod execution;
pub mod operator_args;
pub mod profile;
pub mod project;
pub mod render;

pub use execution::{ExecutionConfig, ExecutionMode, IndirectSelection, InvocationMode};
pub use operator_args::OperatorArgs;
pub use profile::{ProfileConfig, ProfileMapping};
pub use project::ProjectConfig;
pub use render::{LoadMethod, RenderConfig, TestBehavior};
