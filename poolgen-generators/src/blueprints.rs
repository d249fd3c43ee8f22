use eyre::Result;
use poolgen_codegen::{BlueprintCodeGenerator, CodeGenerator};
use poolgen_core::GeneratedArtifact;

use crate::CodeWriter;

/// Emits the `Blueprints` class: one name constant per blueprint.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlueprintsGenerator;

impl BlueprintsGenerator {
    pub const NAME: &'static str = "BlueprintsGenerator";
}

impl CodeGenerator for BlueprintsGenerator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn as_blueprint_generator(&self) -> Option<&dyn BlueprintCodeGenerator> {
        Some(self)
    }
}

impl BlueprintCodeGenerator for BlueprintsGenerator {
    fn generate(&self, blueprint_names: &[String]) -> Result<Vec<GeneratedArtifact>> {
        if blueprint_names.is_empty() {
            return Ok(Vec::new());
        }

        let mut w = CodeWriter::new();
        w.block("public static class Blueprints", |w| {
            for name in blueprint_names {
                w.line(format!("public const string {} = \"{}\";", name, name));
            }
            w.blank();
            w.string_array(
                "public static readonly string[] all",
                blueprint_names.iter().map(String::as_str),
            );
        });

        Ok(vec![GeneratedArtifact::new(
            "Blueprints",
            Self::NAME,
            w.build(),
        )])
    }
}
