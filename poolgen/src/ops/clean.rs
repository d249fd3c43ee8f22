//! Clean operation - remove generated files without regenerating.

use eyre::{Context, Result};
use poolgen_codegen::OutputDir;

use crate::reports::CleanReport;

/// Execute the clean operation.
///
/// Deletes every file with `extension` below the resolved `Generated`
/// directory. Files that cannot be deleted are reported as warnings.
pub fn clean(directory: &str, extension: &str) -> Result<CleanReport> {
    let output = OutputDir::resolve(directory)?.with_extension(extension);
    let cleanup = output.prepare().wrap_err("Failed to clean output directory")?;

    Ok(CleanReport {
        directory: output.path().to_path_buf(),
        warnings: cleanup.diagnostics.iter().map(ToString::to_string).collect(),
        deleted: cleanup.deleted,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_removes_only_matching_extension() {
        let temp = TempDir::new().unwrap();
        let generated = temp.path().join("Generated");
        fs::create_dir_all(&generated).unwrap();
        fs::write(generated.join("Pools.cs"), "x").unwrap();
        fs::write(generated.join("notes.txt"), "keep").unwrap();

        let report = clean(temp.path().to_str().unwrap(), "cs").unwrap();

        assert_eq!(report.deleted, vec![generated.join("Pools.cs")]);
        assert!(report.warnings.is_empty());
        assert!(generated.join("notes.txt").exists());
    }

    #[test]
    fn test_empty_directory_is_rejected() {
        assert!(clean("  ", "cs").is_err());
    }
}
