use eyre::Result;
use poolgen_codegen::{CodeGenerator, ComponentCodeGenerator};
use poolgen_core::{COMPONENT_SUFFIX, ComponentInfo, GeneratedArtifact, component_type_name};

use crate::CodeWriter;

/// Emits one `<Name>Component` class per component, with a public member per field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentsGenerator;

impl ComponentsGenerator {
    pub const NAME: &'static str = "ComponentsGenerator";
}

impl CodeGenerator for ComponentsGenerator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn as_component_generator(&self) -> Option<&dyn ComponentCodeGenerator> {
        Some(self)
    }
}

impl ComponentCodeGenerator for ComponentsGenerator {
    fn generate(&self, components: &[ComponentInfo]) -> Result<Vec<GeneratedArtifact>> {
        Ok(components
            .iter()
            .map(|component| {
                let class_name =
                    format!("{}{}", component_type_name(&component.name), COMPONENT_SUFFIX);

                let mut w = CodeWriter::new();
                w.block(
                    format!("public sealed class {} : Entitas.IComponent", class_name),
                    |w| {
                        for field in &component.fields {
                            w.line(format!("public {} {};", field.type_name, field.name));
                        }
                    },
                );

                GeneratedArtifact::new(class_name, Self::NAME, w.build())
            })
            .collect())
    }
}
