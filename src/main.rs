//! Browser entry point: assemble the shipped configuration and mount onto
//! `#app`. Startup failures log the error and replace the page with a
//! minimal static failure surface — there is no partial UI.

#[cfg(feature = "csr")]
fn main() {
    use hangar::util::dom;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hangar starting");

    if let Err(err) = start() {
        log::error!("startup failed: {err}");
        dom::render_startup_failure(&err.to_string());
    }
}

#[cfg(feature = "csr")]
fn start() -> Result<(), hangar::error::BootstrapError> {
    use leptos::prelude::IntoAny;

    use hangar::bootstrap::{MountTarget, bootstrap};
    use hangar::pages::vehicles::VehiclesPage;
    use hangar::routing::router::{HistoryMode, Router};
    use hangar::routing::table::{RouteEntry, RouteTable};
    use hangar::ui::breakpoints::BreakpointTable;
    use hangar::ui::registry::{ComponentRegistry, UiPluginConfig};

    let components =
        ComponentRegistry::new().register("vehicle-list", || VehiclesPage().into_any())?;
    let ui = UiPluginConfig::new(components, BreakpointTable::default());

    let table = RouteTable::new(vec![RouteEntry::new("/", "home", || {
        VehiclesPage().into_any()
    })])?;
    let router = Router::new(table, HistoryMode::Browser);

    bootstrap(ui, router, &MountTarget::selector("#app"))?;
    Ok(())
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("hangar is a browser application; build for wasm with `--features csr`");
}
