// trestle-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Ports (Interfaces / Traits)
// Contracts for the external collaborators (GraphLoader, TaskGraphBuilder)
pub mod ports;

// 2. Domain (Configuration model & rules)
// Config structs, selector expressions, node model, diagnostics.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// Technical details: profiles file parsing.
// Depends on the Domain.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration: migration, validation, conversion state machine.
// Depends on the Domain, the Infra and the Ports.
pub mod application;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Lets hosts import the essentials directly: use trestle_core::{convert, TrestleError};
pub use application::converter::{ConversionOutcome, ConversionReport, ConversionRequest, convert};
pub use domain::config::{
    ExecutionConfig, ExecutionMode, OperatorArgs, ProfileConfig, ProjectConfig, RenderConfig,
};
pub use domain::target::{DagRef, ParsingContext, TaskGroupRef};
pub use error::TrestleError;
