//! Component index lookups, one per pool.
//!
//! Each pool gets a static class named after its lookup tag (`ComponentIds`
//! for the default pool, `<Pool>ComponentIds` otherwise) that assigns every
//! component in the pool a dense index. Indices follow the alphabetical order
//! of component names, so reordering declarations does not renumber them.

use eyre::Result;
use poolgen_codegen::{CodeGenerator, ComponentCodeGenerator};
use poolgen_core::{
    ComponentInfo, GeneratedArtifact, component_lookup_tags, component_type_name,
};

use crate::CodeWriter;

#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentIndicesGenerator;

impl ComponentIndicesGenerator {
    pub const NAME: &'static str = "ComponentIndicesGenerator";
}

impl CodeGenerator for ComponentIndicesGenerator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn as_component_generator(&self) -> Option<&dyn ComponentCodeGenerator> {
        Some(self)
    }
}

impl ComponentCodeGenerator for ComponentIndicesGenerator {
    fn generate(&self, components: &[ComponentInfo]) -> Result<Vec<GeneratedArtifact>> {
        Ok(group_by_lookup_tag(components)
            .into_iter()
            .map(|(tag, mut names)| {
                names.sort();
                GeneratedArtifact::new(tag.clone(), Self::NAME, render_lookup(&tag, &names))
            })
            .collect())
    }
}

/// Component type names per lookup tag, tags in order of first appearance.
fn group_by_lookup_tag(components: &[ComponentInfo]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for component in components {
        let name = component_type_name(&component.name);
        for tag in component_lookup_tags(component) {
            match groups.iter_mut().find(|(t, _)| *t == tag) {
                Some((_, names)) => names.push(name.clone()),
                None => groups.push((tag, vec![name.clone()])),
            }
        }
    }
    groups
}

fn render_lookup(tag: &str, names: &[String]) -> String {
    let mut w = CodeWriter::new();
    w.block(format!("public static class {}", tag), |w| {
        for (index, name) in names.iter().enumerate() {
            w.line(format!("public const int {} = {};", name, index));
        }
        w.blank();
        w.line(format!("public const int TotalComponents = {};", names.len()));
        w.blank();
        w.string_array(
            "public static readonly string[] componentNames",
            names.iter().map(String::as_str),
        );
    });
    w.build()
}
