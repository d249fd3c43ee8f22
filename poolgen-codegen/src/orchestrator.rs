//! Generation orchestrator.
//!
//! A run resolves the output directory, clears stale artifacts, then invokes
//! the registered generators phase by phase:
//!
//! 1. pool generators, with the pool names
//! 2. component generators, with all components
//! 3. blueprint generators, with the blueprint names
//!
//! Within a phase generators run in registration order. The artifacts of
//! each invocation are written before the next generator runs, so a failing
//! generator leaves the output of earlier generators on disk.

use std::path::PathBuf;

use indexmap::IndexMap;
use poolgen_core::{DataModelProvider, GeneratedArtifact};
use tracing::{debug, info, warn};

use crate::{
    Diagnostic, GenerateError, GeneratorRegistry, Result,
    output::{DEFAULT_EXTENSION, OutputDir},
    plugin::{Capability, CodeGenerator},
};

/// The outcome of a successful run.
#[derive(Debug, Default)]
pub struct Generation {
    /// The resolved output directory.
    pub directory: PathBuf,
    /// All artifacts, in invocation order.
    pub artifacts: Vec<GeneratedArtifact>,
    /// Stale artifacts removed before generating.
    pub deleted: Vec<PathBuf>,
    /// Non-fatal findings of the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl Generation {
    /// Check if any warnings have been recorded.
    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Get all warnings, in the order they were recorded.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

/// Runs registered generators against a data model.
///
/// # Example
///
/// ```ignore
/// let orchestrator = Orchestrator::new(
///     GeneratorRegistry::new()
///         .generator(PoolsGenerator)
///         .generator(ComponentIndicesGenerator),
/// );
///
/// let generation = orchestrator.generate(&manifest, "Assets/Scripts")?;
/// for warning in generation.warnings() {
///     eprintln!("{}", warning);
/// }
/// ```
#[derive(Debug)]
pub struct Orchestrator {
    registry: GeneratorRegistry,
    extension: String,
}

impl Orchestrator {
    /// Create an orchestrator writing files with the default extension.
    pub fn new(registry: GeneratorRegistry) -> Self {
        Self {
            registry,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Use a different file extension (without dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Generate all artifacts into `directory` (resolved to its `Generated`
    /// subdirectory) and return them.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::EmptyTargetDirectory`] before touching the disk
    /// - [`GenerateError::Generator`] if a generator fails
    /// - [`GenerateError::CreateDir`] / [`GenerateError::Write`] on I/O failure
    ///
    /// Artifacts written before the error remain on disk.
    pub fn generate(
        &self,
        provider: &dyn DataModelProvider,
        directory: &str,
    ) -> Result<Generation> {
        let output = OutputDir::resolve(directory)?.with_extension(self.extension.as_str());
        info!(
            directory = %output.path().display(),
            generators = self.registry.len(),
            "generating"
        );

        let cleanup = output.prepare()?;
        let mut generation = Generation {
            directory: output.path().to_path_buf(),
            artifacts: Vec::new(),
            deleted: cleanup.deleted,
            diagnostics: cleanup.diagnostics,
        };

        // file name -> generator that wrote it
        let mut written: IndexMap<String, String> = IndexMap::new();

        self.dispatch(provider, |capability, artifacts| {
            output.persist(&artifacts)?;

            for artifact in &artifacts {
                let file_name = artifact.file_name(output.extension());
                let generator = artifact.generator_name().to_string();
                if let Some(previous) = written.insert(file_name.clone(), generator) {
                    warn!(file = %file_name, %previous, "artifact overwritten within one run");
                    generation.diagnostics.push(
                        Diagnostic::warning(
                            capability.phase_name(),
                            format!(
                                "{} overwrote an artifact previously written by {}",
                                artifact.generator_name(),
                                previous
                            ),
                        )
                        .at(file_name),
                    );
                }
            }

            generation.artifacts.extend(artifacts);
            Ok(())
        })?;

        info!(artifacts = generation.artifacts.len(), "generation finished");
        Ok(generation)
    }

    /// Run all generators without touching the disk.
    pub fn preview(&self, provider: &dyn DataModelProvider) -> Result<Vec<GeneratedArtifact>> {
        let mut artifacts = Vec::new();
        self.dispatch(provider, |_, batch| {
            artifacts.extend(batch);
            Ok(())
        })?;
        Ok(artifacts)
    }

    /// Invoke every generator once per capability it implements, in
    /// dispatch order, handing each batch to `sink` before moving on.
    fn dispatch<F>(&self, provider: &dyn DataModelProvider, mut sink: F) -> Result<()>
    where
        F: FnMut(Capability, Vec<GeneratedArtifact>) -> Result<()>,
    {
        for capability in Capability::ALL {
            for generator in self.registry.with_capability(capability) {
                debug!(phase = %capability, generator = generator.name(), "running generator");
                let artifacts = run_generator(generator, capability, provider)?;
                sink(capability, artifacts)?;
            }
        }
        Ok(())
    }
}

/// Invoke a single capability of a generator with its model slice.
fn run_generator(
    generator: &dyn CodeGenerator,
    capability: Capability,
    provider: &dyn DataModelProvider,
) -> Result<Vec<GeneratedArtifact>> {
    let result = match capability {
        Capability::Pool => generator
            .as_pool_generator()
            .map(|g| g.generate(provider.pool_names())),
        Capability::Component => generator
            .as_component_generator()
            .map(|g| g.generate(provider.component_infos())),
        Capability::Blueprint => generator
            .as_blueprint_generator()
            .map(|g| g.generate(provider.blueprint_names())),
    };

    match result {
        Some(artifacts) => artifacts.map_err(|e| GenerateError::generator(generator.name(), e)),
        None => Ok(Vec::new()),
    }
}

/// Run `registry` against `provider`, writing into `directory`.
///
/// Shorthand for [`Orchestrator::generate`] with the default extension.
pub fn generate(
    provider: &dyn DataModelProvider,
    directory: &str,
    registry: GeneratorRegistry,
) -> Result<Generation> {
    Orchestrator::new(registry).generate(provider, directory)
}
