//! Application bootstrap: a typestate chain over construction, UI-plugin
//! installation, router installation, and mounting.
//!
//! DESIGN
//! ======
//! The bootstrap sequence is single-shot and strictly ordered. Each step is
//! a by-value transition to a new type, so skipping or reordering steps is
//! a compile error rather than a runtime discipline. Mounting consumes the
//! application; a failed mount is terminal for the process run and reports
//! the phase the instance was left in.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::error::{MountError, MountFailure};
use crate::routing::router::Router;
use crate::ui::registry::UiPluginConfig;

/// Lifecycle phase of the application value. Transitions run strictly
/// left to right: `Constructed` → `UiInstalled` → `RouterInstalled` →
/// `Mounted`, with `Mounted` terminal until process teardown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Constructed,
    UiInstalled,
    RouterInstalled,
    Mounted,
}

impl Phase {
    /// Phase name as shown in failure messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Constructed => "constructed",
            Self::UiInstalled => "ui-installed",
            Self::RouterInstalled => "router-installed",
            Self::Mounted => "mounted",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the application attaches in the host page.
#[derive(Clone, Debug)]
pub enum MountTarget {
    /// A CSS selector resolved against the live document at mount time.
    Selector(String),
    /// An in-memory host for native builds and tests.
    Virtual(VirtualHost),
}

impl MountTarget {
    /// Target a host-page element by CSS selector.
    #[must_use]
    pub fn selector(selector: impl Into<String>) -> Self {
        Self::Selector(selector.into())
    }

    /// Target a fresh in-memory host.
    #[must_use]
    pub fn virtual_host() -> Self {
        Self::Virtual(VirtualHost::new())
    }

    fn describe(&self) -> String {
        match self {
            Self::Selector(selector) => selector.clone(),
            Self::Virtual(_) => "virtual host".to_owned(),
        }
    }
}

/// In-memory stand-in for a host element. Clones share occupancy, so two
/// application instances aimed at clones of one host contend for the same
/// slot, exactly like two mounts against one DOM element.
#[derive(Clone, Debug)]
pub struct VirtualHost {
    present: bool,
    occupied: Rc<Cell<bool>>,
}

impl VirtualHost {
    /// A present, unoccupied host.
    #[must_use]
    pub fn new() -> Self {
        Self {
            present: true,
            occupied: Rc::new(Cell::new(false)),
        }
    }

    /// A host that does not exist in the page, for exercising the
    /// missing-target failure path.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            present: false,
            occupied: Rc::new(Cell::new(false)),
        }
    }

    /// Whether an application is currently mounted on this host.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupied.get()
    }
}

impl Default for VirtualHost {
    fn default() -> Self {
        Self::new()
    }
}

/// A freshly constructed application with nothing installed and no visible
/// output. Explicitly owned; tests may build as many as they like.
#[derive(Debug, Default)]
pub struct App {
    _priv: (),
}

impl App {
    /// Construct the application value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::Constructed
    }

    /// Install the UI-plugin configuration. The configuration is validated
    /// at construction, so installation itself cannot fail.
    #[must_use]
    pub fn with_ui(self, ui: UiPluginConfig) -> AppWithUi {
        AppWithUi { ui }
    }
}

/// Application with the UI plugin installed.
#[derive(Debug)]
pub struct AppWithUi {
    ui: UiPluginConfig,
}

impl AppWithUi {
    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::UiInstalled
    }

    /// Install the router.
    #[must_use]
    pub fn with_router(self, router: Router) -> AppWithRouter {
        AppWithRouter {
            ui: self.ui,
            router,
        }
    }
}

/// Fully configured application, ready to mount.
#[derive(Debug)]
pub struct AppWithRouter {
    ui: UiPluginConfig,
    router: Router,
}

impl AppWithRouter {
    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::RouterInstalled
    }

    /// The installed UI-plugin configuration.
    #[must_use]
    pub fn ui(&self) -> &UiPluginConfig {
        &self.ui
    }

    /// The installed router.
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Attach the application to the host page, exactly once.
    ///
    /// # Errors
    ///
    /// [`MountError::TargetNotFound`] when the target cannot be resolved
    /// and [`MountError::AlreadyMounted`] when it already hosts an
    /// application. The application value is consumed either way; the
    /// returned [`MountFailure`] records that it stopped in the
    /// `router-installed` phase.
    pub fn mount(self, target: &MountTarget) -> Result<MountedApp, MountFailure> {
        let description = target.describe();
        match target {
            MountTarget::Virtual(host) => {
                if !host.present {
                    return Err(fail(MountError::TargetNotFound(description)));
                }
                if host.occupied.get() {
                    return Err(fail(MountError::AlreadyMounted(description)));
                }
                host.occupied.set(true);
            }
            MountTarget::Selector(selector) => {
                #[cfg(feature = "csr")]
                {
                    let Some(host) = crate::util::dom::query(selector) else {
                        return Err(fail(MountError::TargetNotFound(description)));
                    };
                    if crate::util::dom::is_marked(&host) {
                        return Err(fail(MountError::AlreadyMounted(description)));
                    }
                    crate::util::dom::mark(&host);

                    let ui = self.ui.clone();
                    let router = self.router.clone();
                    // The application lives until page teardown; leak the
                    // unmount handle instead of dropping the UI tree.
                    leptos::mount::mount_to(host, move || {
                        use crate::app::AppRoot;
                        use leptos::prelude::*;
                        leptos::view! { <AppRoot ui=ui router=router/> }
                    })
                    .forget();
                }
                #[cfg(not(feature = "csr"))]
                {
                    // There is no document to resolve a selector against
                    // outside the browser.
                    let _ = selector;
                    return Err(fail(MountError::TargetNotFound(description)));
                }
            }
        }

        Ok(MountedApp {
            ui: self.ui,
            router: self.router,
            target: description,
        })
    }
}

fn fail(error: MountError) -> MountFailure {
    MountFailure {
        error,
        phase: Phase::RouterInstalled,
    }
}

/// The mounted application. Terminal state; the UI-plugin registry and the
/// router are shared read-only state from here on.
#[derive(Debug)]
pub struct MountedApp {
    ui: UiPluginConfig,
    router: Router,
    target: String,
}

impl MountedApp {
    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::Mounted
    }

    /// The installed UI-plugin configuration.
    #[must_use]
    pub fn ui(&self) -> &UiPluginConfig {
        &self.ui
    }

    /// The installed router.
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Description of where the application mounted.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Run the full bootstrap sequence in its fixed order: construct, install
/// the UI plugin, install the router, mount.
///
/// # Errors
///
/// Forwards the [`MountFailure`] from the mount step; the configuration
/// arguments are validated at construction and cannot fail here.
pub fn bootstrap(
    ui: UiPluginConfig,
    router: Router,
    target: &MountTarget,
) -> Result<MountedApp, MountFailure> {
    App::new().with_ui(ui).with_router(router).mount(target)
}
