//! Generate operation - run the selected generators against the manifest.

use eyre::{Context, Result};
use poolgen_codegen::{GENERATED_DIR_NAME, Orchestrator};
use poolgen_model::ManifestFile;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Target directory, overriding the manifest.
    pub output: Option<&'a str>,
    /// Generator keys, overriding the manifest.
    pub generators: Option<&'a [String]>,
    /// Whether to preview without writing.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(file: &ManifestFile, opts: GenerateOptions) -> Result<GenerateReport> {
    let output = &file.manifest().output;
    let names = opts.generators.or(output.generators.as_deref());
    let registry = poolgen_generators::registry(names)?;
    let generator_count = registry.len();
    let orchestrator = Orchestrator::new(registry).with_extension(output.extension.as_str());

    let result = if opts.dry_run {
        let files = orchestrator
            .preview(file.manifest())
            .wrap_err("Failed to generate code")?
            .into_iter()
            .map(|artifact| PreviewFile {
                path: format!(
                    "{}/{}",
                    GENERATED_DIR_NAME,
                    artifact.file_name(&output.extension)
                ),
                content: artifact.render(),
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let directory = opts
            .output
            .map(str::to_string)
            .unwrap_or_else(|| file.output_directory());
        let generation = orchestrator
            .generate(file.manifest(), &directory)
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            files: generation
                .artifacts
                .iter()
                .map(|a| a.file_name(&output.extension))
                .collect(),
            deleted: generation.deleted.len(),
            warnings: generation.warnings().map(ToString::to_string).collect(),
            directory: generation.directory,
        })
    };

    Ok(GenerateReport {
        generator_count,
        result,
    })
}
