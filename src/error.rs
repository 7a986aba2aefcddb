//! Error taxonomy for configuration, mounting, and navigation.
//!
//! DESIGN
//! ======
//! Three kinds with distinct recovery policies: [`ConfigurationError`] and
//! [`MountError`] abort startup entirely, while [`NavigationMiss`] is a
//! normal outcome the rendering layer handles by showing the not-found view.

use crate::bootstrap::Phase;
use crate::ui::breakpoints::SizeClass;

/// Structural invariant violation in the UI-plugin configuration or the
/// route table. Not recoverable in-process; surfaces as a startup failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// A component name was registered twice.
    #[error("duplicate component name `{0}` in registry")]
    DuplicateComponent(String),
    /// Two route entries share the same path.
    #[error("duplicate route path `{0}`")]
    DuplicateRoutePath(String),
    /// Two route entries share the same symbolic name.
    #[error("duplicate route name `{0}`")]
    DuplicateRouteName(String),
    /// No entry in the table matches the root path, so navigation to the
    /// application's base URL could never resolve.
    #[error("route table has no entry matching the root path `/`")]
    MissingRootRoute,
    /// A size-class name that is not one of the canonical classes.
    #[error("unknown size class `{0}`")]
    UnknownSizeClass(String),
    /// The same size class was declared twice in a breakpoint table.
    #[error("size class `{0}` declared twice in breakpoint table")]
    DuplicateSizeClass(SizeClass),
    /// Thresholds decrease when read in canonical small-to-large order.
    #[error(
        "breakpoint thresholds out of order: `{larger}` ({larger_px}px) is below `{smaller}` ({smaller_px}px)"
    )]
    NonMonotonicThresholds {
        /// The smaller size class.
        smaller: SizeClass,
        /// Threshold declared for the smaller class.
        smaller_px: u32,
        /// The larger size class.
        larger: SizeClass,
        /// Threshold declared for the larger class.
        larger_px: u32,
    },
    /// The `mobile` alias names a size class the table does not declare.
    #[error("mobile alias `{0}` does not name a declared size class")]
    UndeclaredMobileAlias(SizeClass),
    /// A breakpoint table with no declared size classes.
    #[error("breakpoint table declares no size classes")]
    EmptyBreakpointTable,
}

/// Failure attaching the application to the host page. Not recoverable;
/// surfaces as a startup failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// The mount target could not be resolved in the host page.
    #[error("mount target `{0}` not found in host page")]
    TargetNotFound(String),
    /// The mount target already hosts a mounted application.
    #[error("mount target `{0}` already has a mounted application")]
    AlreadyMounted(String),
}

/// A [`MountError`] together with the phase the application value was left
/// in. Mounting consumes the application, so a failed mount is terminal for
/// the process run; the phase records how far the bootstrap got.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{error} (application left in `{phase}` phase)")]
pub struct MountFailure {
    /// The underlying mount error.
    #[source]
    pub error: MountError,
    /// Terminal phase of the consumed application value.
    pub phase: Phase,
}

/// Outcome of resolving a path (or route name) that no route entry matches.
/// Recoverable: callers render the designated not-found view.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no route matches `{path}`")]
pub struct NavigationMiss {
    /// The requested path, or the symbolic name for by-name navigation.
    pub path: String,
}

/// Umbrella for everything that can abort startup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    /// A leaf configuration value failed validation.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The assembled application failed to mount.
    #[error(transparent)]
    Mount(#[from] MountFailure),
}
