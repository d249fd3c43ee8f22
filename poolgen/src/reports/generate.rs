//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of generators that ran.
    pub generator_count: usize,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Resolved output directory.
    pub directory: PathBuf,
    /// Written file names, in generation order.
    pub files: Vec<String>,
    /// Number of stale files removed first.
    pub deleted: usize,
    /// Non-fatal findings of the run.
    pub warnings: Vec<String>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the target directory.
    pub path: String,
    /// Full file content, header included.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => {
                for warning in &written.warnings {
                    out.warning(warning);
                }

                out.section(&format!("Generated ({})", written.files.len()));
                for file in &written.files {
                    out.added_item(file);
                }
                out.newline();
                out.key_value("Output", &written.directory.display().to_string());
                out.key_value("Generators", &self.generator_count.to_string());
                if written.deleted > 0 {
                    out.key_value("Replaced", &written.deleted.to_string());
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }

                out.divider("Summary");
                out.preformatted(&format!(
                    "{} file{} would be generated",
                    files.len(),
                    if files.len() == 1 { "" } else { "s" }
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_written_lists_files_and_warnings() {
        let report = GenerateReport {
            generator_count: 2,
            result: GenerationResult::Written(WrittenResult {
                directory: PathBuf::from("Assets/Generated"),
                files: vec!["Pools.cs".into(), "ComponentIds.cs".into()],
                deleted: 0,
                warnings: vec!["warning[component]: duplicate".into()],
            }),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "warning: warning[component]: duplicate");
        assert_eq!(out.lines[1], "Generated (2):");
        assert_eq!(out.lines[2], "  + Pools.cs");
        assert!(!out.lines.iter().any(|l| l.starts_with("Replaced")));
    }

    #[test]
    fn test_preview_summary() {
        let report = GenerateReport {
            generator_count: 1,
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "Generated/Pools.cs".into(),
                content: "class Pools {}".into(),
            }]),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "── Generated/Pools.cs ──",
                "class Pools {}",
                "── Summary ──",
                "1 file would be generated",
            ]
        );
    }
}
