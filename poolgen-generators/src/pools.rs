use eyre::Result;
use poolgen_codegen::{CodeGenerator, PoolCodeGenerator};
use poolgen_core::{GeneratedArtifact, lowercase_first};

use crate::CodeWriter;

/// Emits the `Pools` class with one lazily created pool per pool name.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoolsGenerator;

impl PoolsGenerator {
    pub const NAME: &'static str = "PoolsGenerator";
}

impl CodeGenerator for PoolsGenerator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn as_pool_generator(&self) -> Option<&dyn PoolCodeGenerator> {
        Some(self)
    }
}

impl PoolCodeGenerator for PoolsGenerator {
    fn generate(&self, pool_names: &[String]) -> Result<Vec<GeneratedArtifact>> {
        if pool_names.is_empty() {
            return Ok(Vec::new());
        }

        let properties: Vec<String> = pool_names.iter().map(|p| lowercase_first(p)).collect();

        let mut w = CodeWriter::new();
        w.block("public static class Pools", |w| {
            w.line("static Entitas.Pool[] _allPools;").blank();
            lazy_property(
                w,
                "Entitas.Pool[]",
                "allPools",
                &format!("new[] {{ {} }}", properties.join(", ")),
            );

            for (pool, property) in pool_names.iter().zip(&properties) {
                w.blank();
                w.line(format!("static Entitas.Pool _{};", property)).blank();
                lazy_property(
                    w,
                    "Entitas.Pool",
                    property,
                    &format!("new Entitas.Pool(\"{}\")", pool),
                );
            }
        });

        Ok(vec![GeneratedArtifact::new("Pools", Self::NAME, w.build())])
    }
}

/// Static property that creates its backing field `_<name>` on first access.
fn lazy_property(w: &mut CodeWriter, type_name: &str, name: &str, initializer: &str) {
    w.block(format!("public static {} {}", type_name, name), |w| {
        w.block("get", |w| {
            w.block(format!("if (_{} == null)", name), |w| {
                w.line(format!("_{} = {};", name, initializer));
            });
            w.line(format!("return _{};", name));
        });
    });
}
