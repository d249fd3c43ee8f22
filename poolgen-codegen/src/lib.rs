//! Generator plugins and the generation orchestrator for poolgen.
//!
//! This crate defines how generators plug into a run and how their output
//! reaches disk.
//!
//! # Module Organization
//!
//! - [`plugin`] - Capability traits a generator implements (pool, component, blueprint)
//! - [`registry`] - Ordered generator registration with one-time capability classification
//! - [`output`] - Output directory resolution, cleanup and persistence
//! - [`orchestrator`] - Runs registered generators against a data model
//! - [`diagnostic`] - Non-fatal findings collected during a run
//! - [`testing`] - Test utilities (feature-gated)

pub mod diagnostic;
mod error;
pub mod orchestrator;
pub mod output;
pub mod plugin;
pub mod registry;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use diagnostic::Diagnostic;
pub use error::{GenerateError, Result};
pub use orchestrator::{Generation, Orchestrator, generate};
pub use output::{Cleanup, DEFAULT_EXTENSION, GENERATED_DIR_NAME, OutputDir, resolve_safe_path};
pub use plugin::{
    BlueprintCodeGenerator, Capabilities, Capability, CodeGenerator, ComponentCodeGenerator,
    PoolCodeGenerator,
};
pub use registry::GeneratorRegistry;
