//! Designated view for navigation misses.
//!
//! A miss is a normal, recoverable outcome: the application stays mounted
//! and renders this page instead of a blank surface.

use leptos::prelude::*;

use crate::routing::router::Navigator;

/// Shown whenever the router cannot resolve the current path.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let nav = use_context::<Navigator>();

    view! {
        <section class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"Nothing is routed at this address."</p>
            {nav.map(|nav| {
                view! {
                    <button
                        class="not-found-page__home"
                        on:click=move |_| nav.push("/")
                    >
                        "Back to the hangar"
                    </button>
                }
            })}
        </section>
    }
}
