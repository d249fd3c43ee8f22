//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Number of pools, the default pool included.
    pub pools: usize,
    /// Number of components.
    pub components: usize,
    /// Number of blueprints.
    pub blueprints: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("  pools", &self.pools.to_string());
        out.key_value("  components", &self.components.to_string());
        out.key_value("  blueprints", &self.blueprints.to_string());
    }
}
