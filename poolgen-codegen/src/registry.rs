//! Ordered registration of generator plugins.
//!
//! Each generator is classified into its [`Capabilities`] exactly once, when
//! it is registered. The orchestrator later walks the registry phase by phase
//! without inspecting generators again.
//!
//! # Example
//!
//! ```ignore
//! let registry = GeneratorRegistry::new()
//!     .generator(PoolsGenerator)
//!     .generator(ComponentIndicesGenerator);
//!
//! let orchestrator = Orchestrator::new(registry);
//! ```

use tracing::debug;

use crate::plugin::{Capabilities, Capability, CodeGenerator};

/// A registered generator together with its capabilities.
struct Entry {
    generator: Box<dyn CodeGenerator>,
    capabilities: Capabilities,
}

/// Generators in registration order.
///
/// Registering the same kind of generator twice is allowed; each entry runs.
#[derive(Default)]
pub struct GeneratorRegistry {
    entries: Vec<Entry>,
}

impl GeneratorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a generator (builder style).
    pub fn generator(mut self, generator: impl CodeGenerator + 'static) -> Self {
        self.register(Box::new(generator));
        self
    }

    /// Add a boxed generator.
    pub fn register(&mut self, generator: Box<dyn CodeGenerator>) {
        let capabilities = Capabilities::of(generator.as_ref());
        if capabilities.is_empty() {
            debug!(generator = generator.name(), "generator implements no capability");
        }
        self.entries.push(Entry {
            generator,
            capabilities,
        });
    }

    /// Add several boxed generators, keeping their order.
    pub fn register_all(&mut self, generators: impl IntoIterator<Item = Box<dyn CodeGenerator>>) {
        for generator in generators {
            self.register(generator);
        }
    }

    /// Generators implementing `capability`, in registration order.
    pub fn with_capability(
        &self,
        capability: Capability,
    ) -> impl Iterator<Item = &dyn CodeGenerator> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.capabilities.contains(capability))
            .map(|e| e.generator.as_ref())
    }

    /// Names and capabilities of all registered generators.
    pub fn describe(&self) -> impl Iterator<Item = (&str, Capabilities)> + '_ {
        self.entries
            .iter()
            .map(|e| (e.generator.name(), e.capabilities))
    }

    /// Get the number of registered generators.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Box<dyn CodeGenerator>> for GeneratorRegistry {
    fn from_iter<T: IntoIterator<Item = Box<dyn CodeGenerator>>>(iter: T) -> Self {
        let mut registry = Self::new();
        registry.register_all(iter);
        registry
    }
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.generator.name()))
            .finish()
    }
}
