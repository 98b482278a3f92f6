//! Secondary page components.
//!
//! Every registry destination besides Home renders from here. The tab
//! pages are placeholders pending their backing services; the two
//! action-only destinations carry the new-patch flow.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{AppRoute, Page};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
fn PageScaffold(page: Page, children: Children) -> impl IntoView {
    view! {
        <div class=css::page>
            <header class=css::topBar>
                <h1 class=css::title>{page.title()}</h1>
            </header>
            {children()}
        </div>
    }
}

#[component]
pub fn RepoPage() -> impl IntoView {
    view! {
        <PageScaffold page=Page::Repo>
            <p class=css::empty>"The module repository is not connected yet."</p>
        </PageScaffold>
    }
}

/// Patched-app management. The list is empty until the patch engine
/// reports installed patches; the action button starts a new patch.
#[component]
pub fn ManagePage() -> impl IntoView {
    view! {
        <PageScaffold page=Page::Manage>
            <p class=css::empty>"No patched apps yet."</p>
            <button class=css::fab on:click=move |_| AppRoute::new(Page::NewPatch).push()>
                <Icon icon=ic::ADD />
            </button>
        </PageScaffold>
    }
}

#[component]
pub fn LogsPage() -> impl IntoView {
    view! {
        <PageScaffold page=Page::Logs>
            <p class=css::empty>"Nothing has been logged in this session."</p>
        </PageScaffold>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <PageScaffold page=Page::Settings>
            <p class=css::empty>"No configurable options yet."</p>
        </PageScaffold>
    }
}

/// Entry point of the patching flow: pick the target app, or the set of
/// modules to embed alongside it.
#[component]
pub fn NewPatchPage() -> impl IntoView {
    view! {
        <PageScaffold page=Page::NewPatch>
            <button class=css::action on:click=move |_| AppRoute::select_apps(false).push()>
                <Icon icon=ic::APP_LIST />
                <span>"Choose the app to patch"</span>
            </button>
            <button class=css::action on:click=move |_| AppRoute::select_apps(true).push()>
                <Icon icon=ic::APP_LIST />
                <span>"Choose modules to embed"</span>
            </button>
        </PageScaffold>
    }
}

/// Installed-app picker. `multi_select` comes from the route's declared
/// `multiSelect` argument.
#[component]
pub fn SelectAppsPage(multi_select: bool) -> impl IntoView {
    let hint = if multi_select {
        "Select one or more apps."
    } else {
        "Select a single app."
    };

    view! {
        <PageScaffold page=Page::SelectApps>
            <p class=css::hint>{hint}</p>
            <p class=css::empty>"The installed app list requires the helper service."</p>
        </PageScaffold>
    }
}
