//! Generator plugin contracts.
//!
//! A generator is a [`CodeGenerator`] that opts into one or more capabilities
//! by returning itself from the matching accessor. Each capability receives
//! only the slice of the data model it needs.
//!
//! # Example
//!
//! ```
//! use poolgen_codegen::{CodeGenerator, PoolCodeGenerator};
//! use poolgen_core::{GeneratedArtifact, uppercase_first};
//!
//! struct PoolNames;
//!
//! impl CodeGenerator for PoolNames {
//!     fn name(&self) -> &str {
//!         "PoolNames"
//!     }
//!
//!     fn as_pool_generator(&self) -> Option<&dyn PoolCodeGenerator> {
//!         Some(self)
//!     }
//! }
//!
//! impl PoolCodeGenerator for PoolNames {
//!     fn generate(&self, pool_names: &[String]) -> eyre::Result<Vec<GeneratedArtifact>> {
//!         let body = pool_names.iter().map(|p| uppercase_first(p) + "\n").collect::<String>();
//!         Ok(vec![GeneratedArtifact::new("PoolNames", self.name(), body)])
//!     }
//! }
//! ```

use eyre::Result;
use poolgen_core::{ComponentInfo, GeneratedArtifact};

/// A capability a generator can implement.
///
/// The declaration order is the dispatch order of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// Receives the pool names.
    Pool,
    /// Receives every component.
    Component,
    /// Receives the blueprint names.
    Blueprint,
}

impl Capability {
    /// All capabilities, in dispatch order.
    pub const ALL: [Capability; 3] = [Capability::Pool, Capability::Component, Capability::Blueprint];

    /// Name used for diagnostics and logging.
    pub fn phase_name(&self) -> &'static str {
        match self {
            Capability::Pool => "pool",
            Capability::Component => "component",
            Capability::Blueprint => "blueprint",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.phase_name())
    }
}

/// The set of capabilities a generator implements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pool: bool,
    component: bool,
    blueprint: bool,
}

impl Capabilities {
    /// Classify a generator by querying its capability accessors.
    pub fn of(generator: &dyn CodeGenerator) -> Self {
        Self {
            pool: generator.as_pool_generator().is_some(),
            component: generator.as_component_generator().is_some(),
            blueprint: generator.as_blueprint_generator().is_some(),
        }
    }

    /// Build a set from a list of capabilities.
    pub fn from_slice(capabilities: &[Capability]) -> Self {
        let mut set = Self::default();
        for capability in capabilities {
            match capability {
                Capability::Pool => set.pool = true,
                Capability::Component => set.component = true,
                Capability::Blueprint => set.blueprint = true,
            }
        }
        set
    }

    pub fn contains(&self, capability: Capability) -> bool {
        match capability {
            Capability::Pool => self.pool,
            Capability::Component => self.component,
            Capability::Blueprint => self.blueprint,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.pool || self.component || self.blueprint)
    }

    /// Iterate the contained capabilities in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + use<> {
        let set = *self;
        Capability::ALL.into_iter().filter(move |c| set.contains(*c))
    }
}

/// Root trait of every generator plugin.
///
/// The capability accessors default to `None`; a generator overrides the
/// ones it implements to return `Some(self)`. A generator that overrides
/// none of them is accepted but never invoked.
pub trait CodeGenerator: Send + Sync {
    /// Name of this generator, written into the provenance header.
    fn name(&self) -> &str;

    fn as_pool_generator(&self) -> Option<&dyn PoolCodeGenerator> {
        None
    }

    fn as_component_generator(&self) -> Option<&dyn ComponentCodeGenerator> {
        None
    }

    fn as_blueprint_generator(&self) -> Option<&dyn BlueprintCodeGenerator> {
        None
    }
}

/// Generates artifacts from the pool names, typically one per pool.
pub trait PoolCodeGenerator {
    fn generate(&self, pool_names: &[String]) -> Result<Vec<GeneratedArtifact>>;
}

/// Generates artifacts from the components.
///
/// Usually one artifact per component, optionally with aggregate artifacts
/// spanning all of them (e.g. a lookup index).
pub trait ComponentCodeGenerator {
    fn generate(&self, components: &[ComponentInfo]) -> Result<Vec<GeneratedArtifact>>;
}

/// Generates artifacts from the blueprint names.
pub trait BlueprintCodeGenerator {
    fn generate(&self, blueprint_names: &[String]) -> Result<Vec<GeneratedArtifact>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inert;

    impl CodeGenerator for Inert {
        fn name(&self) -> &str {
            "Inert"
        }
    }

    struct PoolAndBlueprint;

    impl CodeGenerator for PoolAndBlueprint {
        fn name(&self) -> &str {
            "PoolAndBlueprint"
        }

        fn as_pool_generator(&self) -> Option<&dyn PoolCodeGenerator> {
            Some(self)
        }

        fn as_blueprint_generator(&self) -> Option<&dyn BlueprintCodeGenerator> {
            Some(self)
        }
    }

    impl PoolCodeGenerator for PoolAndBlueprint {
        fn generate(&self, _pool_names: &[String]) -> Result<Vec<GeneratedArtifact>> {
            Ok(Vec::new())
        }
    }

    impl BlueprintCodeGenerator for PoolAndBlueprint {
        fn generate(&self, _blueprint_names: &[String]) -> Result<Vec<GeneratedArtifact>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_capabilities_of_inert_generator() {
        let caps = Capabilities::of(&Inert);
        assert!(caps.is_empty());
        assert_eq!(caps.iter().count(), 0);
    }

    #[test]
    fn test_capabilities_of_multi_capability_generator() {
        let caps = Capabilities::of(&PoolAndBlueprint);
        assert!(caps.contains(Capability::Pool));
        assert!(!caps.contains(Capability::Component));
        assert!(caps.contains(Capability::Blueprint));
        assert_eq!(
            caps.iter().collect::<Vec<_>>(),
            vec![Capability::Pool, Capability::Blueprint]
        );
    }

    #[test]
    fn test_capabilities_from_slice() {
        let caps = Capabilities::from_slice(&[Capability::Blueprint, Capability::Component]);
        assert_eq!(
            caps.iter().collect::<Vec<_>>(),
            vec![Capability::Component, Capability::Blueprint]
        );
    }

    #[test]
    fn test_dispatch_order() {
        assert!(Capability::Pool < Capability::Component);
        assert!(Capability::Component < Capability::Blueprint);
        assert_eq!(Capability::Component.to_string(), "component");
    }
}
