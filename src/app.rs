//! Root application component.
//!
//! ARCHITECTURE
//! ============
//! The bootstrap hands the validated UI-plugin configuration and router to
//! this component. It provides them (plus the navigation handle) via
//! context for every view below it, then renders whichever view the router
//! resolves for the current path — or the not-found page on a miss, never
//! a blank surface.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::not_found::NotFoundPage;
#[cfg(feature = "csr")]
use crate::routing::router::Navigator;
use crate::routing::router::Router;
use crate::ui::registry::UiPluginConfig;
use crate::util::dom;

/// Root component mounted onto the host element.
#[component]
pub fn AppRoot(ui: UiPluginConfig, router: Router) -> impl IntoView {
    provide_meta_context();

    let initial = dom::current_path().unwrap_or_else(|| "/".to_owned());
    let nav = router.navigator(initial);

    provide_context(ui.breakpoints().clone());
    provide_context(ui.components().clone());
    provide_context(nav.clone());

    #[cfg(feature = "csr")]
    wire_popstate(nav.clone());

    let path = nav.path();
    view! {
        <Title text="Hangar"/>

        {move || match router.resolve(&path.get()) {
            Ok(resolved) => (resolved.entry.view)(),
            Err(_) => view! { <NotFoundPage/> }.into_any(),
        }}
    }
}

/// Keep the path signal in sync with browser back/forward navigation.
#[cfg(feature = "csr")]
fn wire_popstate(nav: Navigator) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::<dyn FnMut()>::new(move || {
        if let Some(path) = dom::current_path() {
            nav.replace(path);
        }
    });
    window.set_onpopstate(Some(callback.as_ref().unchecked_ref()));
    // The listener lives for the page lifetime.
    callback.forget();
}
