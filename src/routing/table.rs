//! The ordered route table consulted by the router.
//!
//! DESIGN
//! ======
//! Entry order is part of the public contract: resolution is
//! first-match-wins, so reordering entries changes observable navigation
//! behavior. The table validates its structural invariants once at
//! construction and is immutable afterwards.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::error::ConfigurationError;
use crate::ui::registry::ViewFn;

/// One path-to-view mapping.
///
/// Pattern syntax: path segments beginning with `:` bind the matched
/// segment under the name after the colon; all other segments are literal.
#[derive(Clone, Debug)]
pub struct RouteEntry {
    /// Path pattern, unique across the table.
    pub path: String,
    /// Symbolic name for programmatic navigation, unique across the table.
    pub name: String,
    /// Non-owning reference to the view component rendered for this route.
    pub view: ViewFn,
}

impl RouteEntry {
    /// Build an entry from a `(path, name, view)` triple.
    #[must_use]
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: ViewFn) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    /// Match `path` against this entry's pattern, binding `:param`
    /// segments. Empty segments are ignored, so a single trailing slash
    /// does not defeat a match.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<Vec<(String, String)>> {
        let pattern: Vec<&str> = segments(&self.path);
        let requested: Vec<&str> = segments(path);
        if pattern.len() != requested.len() {
            return None;
        }

        let mut params = Vec::new();
        for (pat, seg) in pattern.iter().zip(&requested) {
            if let Some(param) = pat.strip_prefix(':') {
                params.push(((*param).to_owned(), (*seg).to_owned()));
            } else if pat != seg {
                return None;
            }
        }
        Some(params)
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Ordered, validated sequence of route entries.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Validate and freeze a route table.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::DuplicateRoutePath`] or
    /// [`ConfigurationError::DuplicateRouteName`] when two entries collide,
    /// and [`ConfigurationError::MissingRootRoute`] when no entry can
    /// resolve the root path `/`.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, ConfigurationError> {
        for (i, entry) in entries.iter().enumerate() {
            for earlier in &entries[..i] {
                if earlier.path == entry.path {
                    return Err(ConfigurationError::DuplicateRoutePath(entry.path.clone()));
                }
                if earlier.name == entry.name {
                    return Err(ConfigurationError::DuplicateRouteName(entry.name.clone()));
                }
            }
        }

        if !entries.iter().any(|e| e.path == "/" || e.matches("/").is_some()) {
            return Err(ConfigurationError::MissingRootRoute);
        }

        Ok(Self { entries })
    }

    /// Entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Look up an entry by its symbolic name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}
