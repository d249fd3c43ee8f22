//! poolgen.toml manifest: a declarative [`DataModelProvider`].
//!
//! The manifest lists pools, blueprints and components together with the
//! output settings of a generation run.
//!
//! ```toml
//! pools = ["Enemy"]
//! blueprints = ["Hero"]
//!
//! [output]
//! directory = "Assets/Scripts"
//!
//! [[components]]
//! name = "Position"
//! pools = ["Pool", "Enemy"]
//! fields = [{ name = "x", type = "float" }]
//! ```
//!
//! [`DataModelProvider`]: poolgen_core::DataModelProvider

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod validate;

pub use error::{Error, Result};
pub use file::ManifestFile;
pub use manifest::{MANIFEST_FILE, Manifest, OutputConfig, parse_manifest};
pub use validate::ParseContext;
