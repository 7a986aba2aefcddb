//! Path resolution and programmatic navigation.
//!
//! DESIGN
//! ======
//! The router is a value built once from a validated [`RouteTable`] and a
//! history mode fixed for its lifetime. Resolution is exact-literal-first:
//! a literal hit anywhere in the table beats every pattern, then the first
//! pattern in table order wins. After mounting, the router is
//! read-mostly shared state consulted by navigation events.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::error::NavigationMiss;
use crate::routing::table::{RouteEntry, RouteTable};
use crate::util::dom;

/// How navigation interacts with the host environment, chosen once at
/// router construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// Push entries onto the browser history stack.
    #[default]
    Browser,
    /// Keep the current path in memory only (native builds and tests).
    Memory,
}

/// A successfully resolved route: the matched entry plus any bound
/// `:param` segments.
#[derive(Clone, Debug)]
pub struct Resolved<'a> {
    /// The matched route entry.
    pub entry: &'a RouteEntry,
    /// `(name, value)` pairs bound by pattern segments, in path order.
    pub params: Vec<(String, String)>,
}

impl Resolved<'_> {
    /// Value bound for a named pattern segment.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Resolves URL paths against the route table.
#[derive(Clone, Debug)]
pub struct Router {
    table: RouteTable,
    mode: HistoryMode,
}

impl Router {
    /// Wrap a validated table with a fixed history mode.
    #[must_use]
    pub fn new(table: RouteTable, mode: HistoryMode) -> Self {
        Self { table, mode }
    }

    /// The history mode chosen at construction.
    #[must_use]
    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// The underlying route table.
    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolve a requested path to a route entry.
    ///
    /// An exact literal match anywhere in the table wins first; otherwise
    /// the first entry (in table order) whose pattern matches wins.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationMiss`] when no entry matches. Callers decide
    /// whether that renders the not-found view; the router never aborts.
    pub fn resolve(&self, path: &str) -> Result<Resolved<'_>, NavigationMiss> {
        if let Some(entry) = self.table.entries().iter().find(|e| e.path == path) {
            return Ok(Resolved {
                entry,
                params: Vec::new(),
            });
        }

        for entry in self.table.entries() {
            if let Some(params) = entry.matches(path) {
                return Ok(Resolved { entry, params });
            }
        }

        Err(NavigationMiss {
            path: path.to_owned(),
        })
    }

    /// Look up a route entry by symbolic name.
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> Option<&RouteEntry> {
        self.table.by_name(name)
    }

    /// Build the navigation handle views use to change the current path.
    /// The handle snapshots the table's name-to-path mapping, so it stays
    /// cheap to clone into event closures.
    #[must_use]
    pub fn navigator(&self, initial_path: impl Into<String>) -> Navigator {
        let names = self
            .table
            .entries()
            .iter()
            .map(|e| (e.name.clone(), e.path.clone()))
            .collect();
        Navigator {
            path: RwSignal::new(initial_path.into()),
            mode: self.mode,
            names: Arc::new(names),
        }
    }
}

/// Clonable navigation handle provided to views via context.
///
/// The current path lives in a reactive signal; route rendering re-runs
/// whenever it changes.
#[derive(Clone)]
pub struct Navigator {
    path: RwSignal<String>,
    mode: HistoryMode,
    names: Arc<Vec<(String, String)>>,
}

impl Navigator {
    /// The current path.
    #[must_use]
    pub fn current(&self) -> String {
        self.path.get()
    }

    /// The reactive current-path signal, for views that track it directly.
    #[must_use]
    pub fn path(&self) -> RwSignal<String> {
        self.path
    }

    /// Navigate to a path. In [`HistoryMode::Browser`] this also pushes a
    /// browser history entry.
    pub fn push(&self, path: &str) {
        if self.mode == HistoryMode::Browser {
            dom::push_history(path);
        }
        self.path.set(path.to_owned());
    }

    /// Update the current path without touching history. Used when the
    /// host environment already moved (popstate).
    pub fn replace(&self, path: impl Into<String>) {
        self.path.set(path.into());
    }

    /// Navigate to the route registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationMiss`] (carrying the requested name) when no
    /// route has that name.
    pub fn push_name(&self, name: &str) -> Result<(), NavigationMiss> {
        let Some((_, path)) = self.names.iter().find(|(n, _)| n == name) else {
            return Err(NavigationMiss {
                path: name.to_owned(),
            });
        };
        let path = path.clone();
        self.push(&path);
        Ok(())
    }
}
