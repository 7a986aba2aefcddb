//! Globally registered view components and the combined UI-plugin
//! configuration.
//!
//! The registry is the only surface through which other code may reference
//! a component by name, so registered names are a public contract.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use leptos::prelude::AnyView;

use crate::error::ConfigurationError;
use crate::ui::breakpoints::BreakpointTable;

/// A mountable view constructor.
///
/// Route entries and the registry hold these as plain function pointers:
/// non-owning, `Copy`, with component lifetime managed by the defining
/// module.
pub type ViewFn = fn() -> AnyView;

/// Ordered mapping from component name to view constructor.
///
/// Built once during configuration; read-only after the application mounts.
#[derive(Clone, Debug, Default)]
pub struct ComponentRegistry {
    entries: Vec<(String, ViewFn)>,
}

impl ComponentRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under a globally unique name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateComponent`] when `name` is
    /// already registered.
    pub fn register(
        mut self,
        name: impl Into<String>,
        view: ViewFn,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if self.entries.iter().any(|(n, _)| *n == name) {
            return Err(ConfigurationError::DuplicateComponent(name));
        }
        self.entries.push((name, view));
        Ok(self)
    }

    /// Look up a component by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ViewFn> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, view)| *view)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The full UI-plugin configuration applied during bootstrap: the global
/// component registry plus the responsive breakpoint table.
///
/// Pure configuration data; both parts are validated before this value can
/// exist, so combining them cannot fail.
#[derive(Clone, Debug)]
pub struct UiPluginConfig {
    components: ComponentRegistry,
    breakpoints: BreakpointTable,
}

impl UiPluginConfig {
    /// Combine a component registry and a breakpoint table.
    #[must_use]
    pub fn new(components: ComponentRegistry, breakpoints: BreakpointTable) -> Self {
        Self {
            components,
            breakpoints,
        }
    }

    /// The global component registry.
    #[must_use]
    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    /// The responsive breakpoint table.
    #[must_use]
    pub fn breakpoints(&self) -> &BreakpointTable {
        &self.breakpoints
    }
}
