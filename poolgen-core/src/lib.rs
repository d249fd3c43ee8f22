//! Core types and utilities for the poolgen code generator.
//!
//! This crate provides the data model shared by every generator (pools,
//! components, blueprints), the [`GeneratedArtifact`] output unit, and the
//! naming conventions generators use to derive identifiers.

mod artifact;
mod model;
pub mod naming;

// Generated output
pub use artifact::{AUTO_GENERATED_HEADER, GeneratedArtifact, provenance_header};
// Data model
pub use model::{ComponentInfo, DataModelProvider, FieldInfo, StaticModel};
// Naming conventions
pub use naming::{
    COMPONENT_SUFFIX, DEFAULT_COMPONENT_LOOKUP_TAG, DEFAULT_POOL_NAME, component_lookup_tag,
    component_lookup_tags, component_type_name, lowercase_first, pool_prefix,
    strip_component_suffix, to_platform_line_endings, to_unix_line_endings, uppercase_first,
};
