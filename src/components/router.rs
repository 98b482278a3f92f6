//! Application router component.
//!
//! Handles URL-based routing with hash history. The navigation graph is
//! built from the page registry; rendering is dispatched through a single
//! match on the page variant so every destination stays auditable in one
//! place.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: Navigation state is derived from `#/<segment>`
//! - **The shell never re-renders on navigation**: only the page body swaps
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::home::HomePage;
use crate::components::navbar::NavBar;
use crate::components::pages::{
    LogsPage, ManagePage, NewPatchPage, RepoPage, SelectAppsPage, SettingsPage,
};
use crate::models::{AppRoute, Page};

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
///
/// Derives the current route from the URL hash and renders the matching
/// page body above the bottom navigation bar.
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    view! {
        <div class=css::screen>
            <main class=css::content>
                {move || page_body(route_memo.get())}
            </main>
            <NavBar route=route_memo />
        </div>
    }
}

/// Central dispatch from a route to its rendered page body.
///
/// An argument validated by the route decoder is read back here; its
/// absence would mean the decoder let an invalid route through, which is
/// a bug, not a recoverable condition.
fn page_body(route: AppRoute) -> AnyView {
    match route.page {
        Page::Repo => view! { <RepoPage /> }.into_any(),
        Page::Manage => view! { <ManagePage /> }.into_any(),
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Logs => view! { <LogsPage /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
        Page::NewPatch => view! { <NewPatchPage /> }.into_any(),
        Page::SelectApps => {
            let multi_select = route
                .args
                .bool_arg("multiSelect")
                .expect("multiSelect is required and validated by the route decoder");
            view! { <SelectAppsPage multi_select=multi_select /> }.into_any()
        }
    }
}
