//! Clean command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from removing generated files.
#[derive(Debug)]
pub struct CleanReport {
    /// Resolved output directory.
    pub directory: PathBuf,
    /// Deleted files.
    pub deleted: Vec<PathBuf>,
    /// Files that could not be deleted.
    pub warnings: Vec<String>,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.deleted.is_empty() {
            out.preformatted(&format!(
                "No generated files found in {}",
                self.directory.display()
            ));
            return;
        }

        out.section("Deleted");
        for path in &self.deleted {
            let shown = path.strip_prefix(&self.directory).unwrap_or(path);
            out.removed_item(&shown.display().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_paths_relative_to_directory() {
        let report = CleanReport {
            directory: PathBuf::from("out/Generated"),
            deleted: vec![PathBuf::from("out/Generated/Pools.cs")],
            warnings: Vec::new(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines, vec!["Deleted:", "  - Pools.cs"]);
    }

    #[test]
    fn test_nothing_deleted() {
        let report = CleanReport {
            directory: PathBuf::from("out/Generated"),
            deleted: Vec::new(),
            warnings: Vec::new(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines, vec!["No generated files found in out/Generated"]);
    }
}
