//! Browser DOM and history helpers.
//!
//! Requires a browser environment; every entry point degrades to a no-op
//! (or `None`) on native builds so library code stays callable from tests.

#[cfg(feature = "csr")]
const MOUNT_MARKER: &str = "data-hangar-mounted";

/// Resolve a CSS selector against the live document.
#[cfg(feature = "csr")]
#[must_use]
pub fn query(selector: &str) -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let element = document.query_selector(selector).ok().flatten()?;
    element.dyn_into::<web_sys::HtmlElement>().ok()
}

/// Whether an application is already mounted on `element`.
#[cfg(feature = "csr")]
#[must_use]
pub fn is_marked(element: &web_sys::HtmlElement) -> bool {
    element.has_attribute(MOUNT_MARKER)
}

/// Mark `element` as hosting the mounted application.
#[cfg(feature = "csr")]
pub fn mark(element: &web_sys::HtmlElement) {
    let _ = element.set_attribute(MOUNT_MARKER, "true");
}

/// The current location's path, e.g. `/vehicles/42`.
#[must_use]
pub fn current_path() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.location().pathname().ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Push a path onto the browser history stack.
pub fn push_history(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}

/// The viewport width in pixels.
#[must_use]
pub fn viewport_width() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
        Some(width.max(0.0) as u32)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Replace the document body with a minimal static startup-failure surface.
/// The full UI cannot render without a mounted application, so this is the
/// user-visible end of a `ConfigurationError` or `MountError`.
pub fn render_startup_failure(message: &str) {
    #[cfg(feature = "csr")]
    {
        let escaped = message.replace('&', "&amp;").replace('<', "&lt;");
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            body.set_inner_html(&format!(
                "<div class=\"startup-failure\">\
                 <h1>Application failed to start</h1>\
                 <pre>{escaped}</pre>\
                 </div>"
            ));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
