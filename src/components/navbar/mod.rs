//! Bottom navigation bar.
//!
//! Built from the page registry's tab destinations; the active tab shows
//! its selected-state icon.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons;
use crate::models::{AppRoute, Page};

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// Bottom navigation bar over the registry's five tab destinations.
#[component]
pub fn NavBar(route: Memo<AppRoute>) -> impl IntoView {
    view! {
        <nav class=css::bar>
            {Page::tabs()
                .map(|page| view! { <NavTab page=page route=route /> })
                .collect::<Vec<_>>()}
        </nav>
    }
}

#[component]
fn NavTab(page: Page, route: Memo<AppRoute>) -> impl IntoView {
    let active = Memo::new(move |_| route.get().page == page);
    let class = move || {
        if active.get() {
            format!("{} {}", css::tab, css::tabActive)
        } else {
            css::tab.to_string()
        }
    };

    view! {
        <button class=class title=page.title() on:click=move |_| AppRoute::new(page).push()>
            <span class=css::tabIcon>
                {move || {
                    let pair = icons::for_page(page).expect("tab pages carry an icon pair");
                    let icon = if active.get() { pair.selected } else { pair.unselected };
                    view! { <Icon icon=icon /> }
                }}
            </span>
            <span class=css::tabLabel>{page.title()}</span>
        </button>
    }
}
