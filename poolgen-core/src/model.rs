//! Data model consumed by generators.

use serde::Deserialize;

use crate::DEFAULT_POOL_NAME;

/// A field of a component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldInfo {
    pub name: String,
    /// Type name in the target language, passed through verbatim.
    #[serde(rename = "type")]
    pub type_name: String,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Describes one component of the data model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentInfo {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldInfo>,
    /// Pools this component is associated with, in declaration order.
    #[serde(default = "default_pools")]
    pub pools: Vec<String>,
}

fn default_pools() -> Vec<String> {
    vec![DEFAULT_POOL_NAME.to_string()]
}

impl ComponentInfo {
    /// Create a component without fields that belongs to the default pool.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            pools: default_pools(),
        }
    }

    pub fn with_field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    /// Replace the pool association.
    pub fn with_pools<I, S>(mut self, pools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pools = pools.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the component has no fields (a flag component).
    pub fn is_flag(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Source of the data model for a generation run.
///
/// Implementations are populated before a run and only read during it.
pub trait DataModelProvider {
    /// All pool names. Includes [`DEFAULT_POOL_NAME`].
    fn pool_names(&self) -> &[String];

    /// All blueprint names.
    fn blueprint_names(&self) -> &[String];

    /// All components, in declaration order.
    fn component_infos(&self) -> &[ComponentInfo];
}

/// In-memory [`DataModelProvider`].
#[derive(Debug, Clone, Default)]
pub struct StaticModel {
    pub pools: Vec<String>,
    pub blueprints: Vec<String>,
    pub components: Vec<ComponentInfo>,
}

impl StaticModel {
    /// Create a model containing only the default pool.
    pub fn new() -> Self {
        Self {
            pools: default_pools(),
            ..Self::default()
        }
    }

    pub fn pool(mut self, name: impl Into<String>) -> Self {
        self.pools.push(name.into());
        self
    }

    pub fn blueprint(mut self, name: impl Into<String>) -> Self {
        self.blueprints.push(name.into());
        self
    }

    pub fn component(mut self, component: ComponentInfo) -> Self {
        self.components.push(component);
        self
    }
}

impl DataModelProvider for StaticModel {
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
