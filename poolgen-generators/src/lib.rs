//! Built-in C# generators for poolgen.
//!
//! Every generator is addressable by a short key (see [`BUILTIN_NAMES`]),
//! which is what `poolgen.toml` and the `--generator` flag refer to.
//!
//! | key                 | capability | artifacts                          |
//! |---------------------|------------|------------------------------------|
//! | `pools`             | pool       | `Pools`                            |
//! | `components`        | component  | `<Name>Component` per component    |
//! | `component_indices` | component  | `ComponentIds`, `<Pool>ComponentIds` |
//! | `blueprints`        | blueprint  | `Blueprints`                       |

mod blueprints;
mod code_writer;
mod component_indices;
mod components;
mod pools;

pub use blueprints::BlueprintsGenerator;
pub use code_writer::CodeWriter;
pub use component_indices::ComponentIndicesGenerator;
pub use components::ComponentsGenerator;
pub use pools::PoolsGenerator;

use eyre::{Result, bail};
use poolgen_codegen::{CodeGenerator, GeneratorRegistry};

/// Keys of the built-in generators, in default registration order.
pub const BUILTIN_NAMES: &[&str] = &["pools", "components", "component_indices", "blueprints"];

/// Look up a built-in generator by key.
pub fn by_name(name: &str) -> Result<Box<dyn CodeGenerator>> {
    let generator: Box<dyn CodeGenerator> = match name {
        "pools" => Box::new(PoolsGenerator),
        "components" => Box::new(ComponentsGenerator),
        "component_indices" => Box::new(ComponentIndicesGenerator),
        "blueprints" => Box::new(BlueprintsGenerator),
        _ => bail!(
            "unknown generator '{}' (available: {})",
            name,
            BUILTIN_NAMES.join(", ")
        ),
    };
    Ok(generator)
}

/// Every built-in generator, in default registration order.
pub fn builtin() -> Vec<Box<dyn CodeGenerator>> {
    vec![
        Box::new(PoolsGenerator),
        Box::new(ComponentsGenerator),
        Box::new(ComponentIndicesGenerator),
        Box::new(BlueprintsGenerator),
    ]
}

/// Build a registry from generator keys.
///
/// `None` registers every built-in. Keys register in the given order; a
/// repeated key is registered once.
pub fn registry<S: AsRef<str>>(names: Option<&[S]>) -> Result<GeneratorRegistry> {
    let Some(names) = names else {
        return Ok(builtin().into_iter().collect());
    };

    let mut registry = GeneratorRegistry::new();
    let mut seen: Vec<&str> = Vec::new();
    for name in names {
        let name = name.as_ref();
        if seen.contains(&name) {
            tracing::debug!(generator = name, "skipping repeated generator");
            continue;
        }
        seen.push(name);
        registry.register(by_name(name)?);
    }
    Ok(registry)
}
