//! Manifest types and parsing for poolgen.toml files.

use std::str::FromStr;

use poolgen_core::{ComponentInfo, DEFAULT_POOL_NAME, DataModelProvider};
use serde::Deserialize;

use crate::{Error, Result, error::SourceContext, validate::ParseContext};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "poolgen.toml";

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Target directory; artifacts land in its `Generated` subdirectory.
    pub directory: String,
    /// Extension of generated files, without dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Generators to run, by name. `None` runs every built-in generator.
    #[serde(default)]
    pub generators: Option<Vec<String>>,
}

fn default_extension() -> String {
    "cs".to_string()
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    output: OutputConfig,
    #[serde(default)]
    pools: Vec<String>,
    #[serde(default)]
    blueprints: Vec<String>,
    #[serde(default)]
    components: Vec<ComponentInfo>,
}

/// Root manifest for poolgen.toml
///
/// The default pool is always present and listed first, whether or not the
/// file declares it.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub output: OutputConfig,
    pools: Vec<String>,
    blueprints: Vec<String>,
    components: Vec<ComponentInfo>,
}

impl Manifest {
    /// Parse a poolgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }

    /// Components belonging to `pool`, in declaration order.
    pub fn components_in_pool<'a>(
        &'a self,
        pool: &'a str,
    ) -> impl Iterator<Item = &'a ComponentInfo> + 'a {
        self.components
            .iter()
            .filter(move |c| c.pools.iter().any(|p| p == pool))
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl DataModelProvider for Manifest {
    fn pool_names(&self) -> &[String] {
        &self.pools
    }

    fn blueprint_names(&self) -> &[String] {
        &self.blueprints
    }

    fn component_infos(&self) -> &[ComponentInfo] {
        &self.components
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawManifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    let ctx = ParseContext::new(content, filename);
    validate_manifest(&raw, &ctx)?;

    let mut pools = vec![DEFAULT_POOL_NAME.to_string()];
    pools.extend(raw.pools.into_iter().filter(|p| p != DEFAULT_POOL_NAME));

    Ok(Manifest {
        output: raw.output,
        pools,
        blueprints: raw.blueprints,
        components: raw.components,
    })
}

/// Validate the manifest after parsing.
fn validate_manifest(raw: &RawManifest, ctx: &ParseContext<'_>) -> Result<()> {
    let source = ctx.source_context();

    if raw.output.directory.trim().is_empty() {
        return Err(source.validation_error(
            "output directory must not be empty",
            ctx.find_span(&raw.output.directory),
        ));
    }
    let extension = &raw.output.extension;
    if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(source.validation_error(
            format!(
                "invalid output extension '{}': use letters and digits only, without a dot",
                extension
            ),
            ctx.find_span(extension),
        ));
    }

    ctx.validate_unique_names(raw.pools.iter().map(String::as_str), "pool")?;
    ctx.validate_unique_names(raw.blueprints.iter().map(String::as_str), "blueprint")?;
    ctx.validate_unique_names(raw.components.iter().map(|c| c.name.as_str()), "component")?;
    ctx.validate_unique_type_names(raw.components.iter().map(|c| c.name.as_str()))?;

    for component in &raw.components {
        let component_ctx = ctx.push(&component.name);
        component_ctx
            .validate_unique_names(component.fields.iter().map(|f| f.name.as_str()), "field")?;

        for pool in &component.pools {
            let known = pool == DEFAULT_POOL_NAME || raw.pools.contains(pool);
            if !known {
                return Err(source.unknown_pool_error(pool, &component.name, ctx.find_span(pool)));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        pools = ["Enemy"]
        blueprints = ["Hero"]

        [output]
        directory = "Assets/Scripts"

        [[components]]
        name = "Position"
        pools = ["Pool", "Enemy"]
        fields = [{ name = "x", type = "float" }, { name = "y", type = "float" }]

        [[components]]
        name = "Movable"
    "#;

    fn parse(content: &str) -> Result<Manifest> {
        Manifest::from_str(content)
    }

    #[test]
    fn test_parse_sample() {
        let manifest = parse(SAMPLE).unwrap();

        assert_eq!(manifest.output.directory, "Assets/Scripts");
        assert_eq!(manifest.output.extension, "cs");
        assert!(manifest.output.generators.is_none());
        assert_eq!(manifest.pool_names(), ["Pool", "Enemy"]);
        assert_eq!(manifest.blueprint_names(), ["Hero"]);
        assert_eq!(manifest.component_infos().len(), 2);
        assert_eq!(manifest.component_infos()[1].name, "Movable");
        assert_eq!(manifest.component_infos()[1].pools, vec!["Pool"]);
    }

    #[test]
    fn test_default_pool_is_not_duplicated() {
        let manifest = parse(
            r#"
            pools = ["Enemy", "Pool"]
            [output]
            directory = "out"
            "#,
        )
        .unwrap();
        assert_eq!(manifest.pool_names(), ["Pool", "Enemy"]);
    }

    #[test]
    fn test_components_in_pool() {
        let manifest = parse(SAMPLE).unwrap();
        let enemy: Vec<_> = manifest
            .components_in_pool("Enemy")
            .map(|c| c.name.as_str())
            .collect();
        let default: Vec<_> = manifest
            .components_in_pool("Pool")
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(enemy, vec!["Position"]);
        assert_eq!(default, vec!["Position", "Movable"]);
    }

    #[test]
    fn test_generators_and_extension() {
        let manifest = parse(
            r#"
            [output]
            directory = "out"
            extension = "txt"
            generators = ["pools"]
            "#,
        )
        .unwrap();
        assert_eq!(manifest.output.extension, "txt");
        assert_eq!(manifest.output.generators, Some(vec!["pools".to_string()]));
    }

    #[test]
    fn test_missing_output_is_parse_error() {
        let err = parse(r#"pools = ["Enemy"]"#).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = parse(
            r#"
            [output]
            directory = "out"
            colour = "blue"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_directory_rejected() {
        let err = parse(
            r#"
            [output]
            directory = ""
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_invalid_extension_rejected() {
        let err = parse(
            r#"
            [output]
            directory = "out"
            extension = ".cs"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_unknown_pool_rejected() {
        let err = parse(
            r#"
            [output]
            directory = "out"

            [[components]]
            name = "Position"
            pools = ["Ghost"]
            "#,
        )
        .unwrap_err();
        match *err {
            Error::UnknownPool {
                pool,
                component,
                span,
                ..
            } => {
                assert_eq!(pool, "Ghost");
                assert_eq!(component, "Position");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_component_rejected() {
        let err = parse(
            r#"
            [output]
            directory = "out"

            [[components]]
            name = "Position"

            [[components]]
            name = "Position"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Duplicate { ref kind, .. } if kind == "component"));
    }

    #[test]
    fn test_colliding_component_type_names_rejected() {
        let content = r#"
            [output]
            directory = "out"

            [[components]]
            name = "Position"

            [[components]]
            name = "PositionComponent"
            "#;
        let err = parse(content).unwrap_err();
        match *err {
            Error::Duplicate {
                name, kind, span, ..
            } => {
                assert_eq!(name, "Position");
                assert_eq!(kind, "component type");
                let offset = content.find("\"PositionComponent\"").unwrap() + 1;
                assert_eq!(span.map(|s| s.offset()), Some(offset));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lowercase_component_collides_with_capitalized() {
        let err = parse(
            r#"
            [output]
            directory = "out"

            [[components]]
            name = "Health"

            [[components]]
            name = "health"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Duplicate { ref kind, .. } if kind == "component type"));
    }

    #[test]
    fn test_invalid_names_rejected() {
        let err = parse(
            r#"
            blueprints = ["my-hero"]
            [output]
            directory = "out"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));

        let err = parse(
            r#"
            [output]
            directory = "out"

            [[components]]
            name = "Position"
            fields = [{ name = "int", type = "int" }]
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }
}
