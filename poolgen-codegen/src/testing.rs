//! Test utilities for generators and runs.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    collections::BTreeMap,
    path::Path,
    sync::{Arc, Mutex},
};

use eyre::{Result, eyre};
use poolgen_core::{ComponentInfo, FieldInfo, GeneratedArtifact, StaticModel, uppercase_first};

use crate::plugin::{
    BlueprintCodeGenerator, Capabilities, Capability, CodeGenerator, ComponentCodeGenerator,
    PoolCodeGenerator,
};

/// Model with pools `Pool` and `Enemy`, a `Position` component in both,
/// and a `Hero` blueprint.
pub fn sample_model() -> StaticModel {
    StaticModel::new()
        .pool("Enemy")
        .blueprint("Hero")
        .component(
            ComponentInfo::new("Position")
                .with_pools(["Pool", "Enemy"])
                .with_field(FieldInfo::new("x", "float"))
                .with_field(FieldInfo::new("y", "float")),
        )
}

/// Shared record of generator invocations, as `"<name>:<phase>"`.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    /// Invocations so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.0.lock().expect("call log poisoned").clone()
    }

    fn record(&self, generator: &str, capability: Capability) {
        self.0
            .lock()
            .expect("call log poisoned")
            .push(format!("{}:{}", generator, capability.phase_name()));
    }
}

/// Generator that records each invocation and emits one artifact per call.
///
/// The artifact is named `<name><Phase>` (e.g. `PoolsPool`) and lists the
/// names it received, one per line.
pub struct RecordingGenerator {
    name: String,
    capabilities: Capabilities,
    log: CallLog,
}

impl RecordingGenerator {
    /// Create a generator with a fresh call log.
    pub fn new(name: &str, capabilities: &[Capability]) -> (Self, CallLog) {
        Self::with_log(name, capabilities, &CallLog::default())
    }

    /// Create a generator sharing an existing call log.
    pub fn with_log(name: &str, capabilities: &[Capability], log: &CallLog) -> (Self, CallLog) {
        let generator = Self {
            name: name.to_string(),
            capabilities: Capabilities::from_slice(capabilities),
            log: log.clone(),
        };
        (generator, log.clone())
    }

    fn emit<'a>(
        &self,
        capability: Capability,
        names: impl Iterator<Item = &'a str>,
    ) -> Vec<GeneratedArtifact> {
        self.log.record(&self.name, capability);
        let content: String = names.map(|n| format!("{}\n", n)).collect();
        let artifact_name = format!("{}{}", self.name, uppercase_first(capability.phase_name()));
        vec![GeneratedArtifact::new(artifact_name, &self.name, content)]
    }
}

impl CodeGenerator for RecordingGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_pool_generator(&self) -> Option<&dyn PoolCodeGenerator> {
        self.capabilities
            .contains(Capability::Pool)
            .then_some(self as &dyn PoolCodeGenerator)
    }

    fn as_component_generator(&self) -> Option<&dyn ComponentCodeGenerator> {
        self.capabilities
            .contains(Capability::Component)
            .then_some(self as &dyn ComponentCodeGenerator)
    }

    fn as_blueprint_generator(&self) -> Option<&dyn BlueprintCodeGenerator> {
        self.capabilities
            .contains(Capability::Blueprint)
            .then_some(self as &dyn BlueprintCodeGenerator)
    }
}

impl PoolCodeGenerator for RecordingGenerator {
    fn generate(&self, pool_names: &[String]) -> Result<Vec<GeneratedArtifact>> {
        Ok(self.emit(Capability::Pool, pool_names.iter().map(String::as_str)))
    }
}

impl ComponentCodeGenerator for RecordingGenerator {
    fn generate(&self, components: &[ComponentInfo]) -> Result<Vec<GeneratedArtifact>> {
        Ok(self.emit(
            Capability::Component,
            components.iter().map(|c| c.name.as_str()),
        ))
    }
}

impl BlueprintCodeGenerator for RecordingGenerator {
    fn generate(&self, blueprint_names: &[String]) -> Result<Vec<GeneratedArtifact>> {
        Ok(self.emit(
            Capability::Blueprint,
            blueprint_names.iter().map(String::as_str),
        ))
    }
}

/// Generator that implements no capability.
pub struct InertGenerator {
    name: String,
}

impl InertGenerator {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl CodeGenerator for InertGenerator {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Generator whose single capability always fails.
pub struct FailingGenerator {
    name: String,
    capability: Capability,
}

impl FailingGenerator {
    pub fn new(name: &str, capability: Capability) -> Self {
        Self {
            name: name.to_string(),
            capability,
        }
    }

    fn fail(&self) -> Result<Vec<GeneratedArtifact>> {
        Err(eyre!("{} failed in the {} phase", self.name, self.capability))
    }
}

impl CodeGenerator for FailingGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_pool_generator(&self) -> Option<&dyn PoolCodeGenerator> {
        (self.capability == Capability::Pool).then_some(self as &dyn PoolCodeGenerator)
    }

    fn as_component_generator(&self) -> Option<&dyn ComponentCodeGenerator> {
        (self.capability == Capability::Component).then_some(self as &dyn ComponentCodeGenerator)
    }

    fn as_blueprint_generator(&self) -> Option<&dyn BlueprintCodeGenerator> {
        (self.capability == Capability::Blueprint).then_some(self as &dyn BlueprintCodeGenerator)
    }
}

impl PoolCodeGenerator for FailingGenerator {
    fn generate(&self, _pool_names: &[String]) -> Result<Vec<GeneratedArtifact>> {
        self.fail()
    }
}

impl ComponentCodeGenerator for FailingGenerator {
    fn generate(&self, _components: &[ComponentInfo]) -> Result<Vec<GeneratedArtifact>> {
        self.fail()
    }
}

impl BlueprintCodeGenerator for FailingGenerator {
    fn generate(&self, _blueprint_names: &[String]) -> Result<Vec<GeneratedArtifact>> {
        self.fail()
    }
}

/// Read every file directly below `dir` into a map of file name to content.
pub fn read_dir_contents(dir: &Path) -> Result<BTreeMap<String, String>> {
    let mut files = BTreeMap::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.path().is_file() {
            let name = entry.file_name().to_string_lossy().into_owned();
            files.insert(name, std::fs::read_to_string(entry.path())?);
        }
    }
    Ok(files)
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}
