// trestle-core/src/ports/mod.rs

pub mod builder;
pub mod loader;

pub use builder::{BuildRequest, TaskGraphBuilder, TestWarning, WarningCallback};
pub use loader::{GraphLoader, LoadRequest};
