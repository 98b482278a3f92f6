//! Home page.
//!
//! Composes the capability card (Shizuku gate), the copyable device/version
//! info card, and the support card under a centered app-title top bar.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config;
use crate::core::shizuku;
use crate::models::{CapabilityState, clipboard_text, info_summary};
use crate::utils::dom;
use crate::utils::strings::{StringId, resolve};

stylance::import_crate_style!(css, "src/components/home/home.module.css");

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::page>
            <header class=css::topBar>
                <h1 class=css::title>{resolve(StringId::AppName)}</h1>
            </header>
            <CapabilityCard />
            <InfoCard />
            <SupportCard />
            {move || {
                ctx.snackbar.message().get().map(|text| view! { <div class=css::snackbar>{text}</div> })
            }}
        </div>
    }
}

// ============================================================================
// Capability Card
// ============================================================================

/// Availability/grant card for the privileged helper.
///
/// The permission-result listener is scoped to the card: it is installed
/// on mount and the guard is dropped on every teardown path, so a result
/// arriving after the card is gone is never delivered to a dead view.
#[component]
fn CapabilityCard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let listener = StoredValue::new_local(None::<shizuku::PermissionListener>);
    if let Ok(guard) = shizuku::add_permission_result_listener(move |code, granted| {
        ctx.capability.update(|c| c.permission_result(code, granted));
    }) {
        listener.set_value(Some(guard));
    }
    on_cleanup(move || listener.set_value(None));

    let state = Signal::derive(move || ctx.capability.with(|c| c.state()));
    let helper_version = Memo::new(move |_| {
        ctx.capability.track();
        shizuku::get_version()
    });

    let request = move |_| {
        let code = config::PERMISSION_REQUEST_CODE;
        let mut forwarded = false;
        ctx.capability.update(|c| forwarded = c.begin_request(code));
        // No-op in any state but AvailableNotGranted.
        if forwarded {
            let _ = shizuku::request_permission(code);
        }
    };

    let class = move || {
        if ctx.capability.with(|c| c.granted()) {
            format!("{} {}", css::card, css::cardPositive)
        } else {
            format!("{} {}", css::card, css::cardWarning)
        }
    };

    view! {
        <div class=class role="button" on:click=request>
            {move || match state.get() {
                CapabilityState::AvailableGranted => {
                    let api = helper_version.get().map(|v| format!("API {}", v)).unwrap_or_default();
                    view! {
                        <div class=css::cardRow>
                            <span class=css::cardIcon><Icon icon=ic::CHECK_CIRCLE /></span>
                            <div>
                                <p class=css::cardTitle>{resolve(StringId::ShizukuAvailable)}</p>
                                <p class=css::cardText>{api}</p>
                            </div>
                        </div>
                    }
                    .into_any()
                }
                CapabilityState::AvailableNotGranted => {
                    view! {
                        <div class=css::cardRow>
                            <span class=css::cardIcon><Icon icon=ic::WARNING /></span>
                            <div>
                                <p class=css::cardTitle>{resolve(StringId::ShizukuAvailable)}</p>
                                <p class=css::cardText>{resolve(StringId::ShizukuNotGranted)}</p>
                            </div>
                        </div>
                    }
                    .into_any()
                }
                CapabilityState::Unavailable => {
                    view! {
                        <div class=css::cardRow>
                            <span class=css::cardIcon><Icon icon=ic::WARNING /></span>
                            <div>
                                <p class=css::cardTitle>{resolve(StringId::ShizukuUnavailable)}</p>
                                <p class=css::cardText>{resolve(StringId::ShizukuWarning)}</p>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

// ============================================================================
// Info Card
// ============================================================================

/// Copyable device/version summary.
#[component]
fn InfoCard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let rows = Signal::derive(move || ctx.system.with(info_summary));

    let copy = move |_| {
        let text = clipboard_text(&rows.get_untracked());
        let snackbar = ctx.snackbar;
        spawn_local(async move {
            // Clipboard writes are treated as always succeeding; the
            // acknowledgement is shown unconditionally.
            let _ = dom::copy_text(&text).await;
            snackbar.show(resolve(StringId::InfoCopied));
        });
    };

    view! {
        <div class=css::card>
            {move || {
                rows.get()
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class=css::infoEntry>
                            <span class=css::infoLabel>{label}</span>
                            <span class=css::infoValue>{value}</span>
                        </div>
                    })
                    .collect::<Vec<_>>()
            }}
            <div class=css::cardActions>
                <button class=css::textButton on:click=copy>
                    <Icon icon=ic::COPY />
                    <span>{resolve(StringId::Copy)}</span>
                </button>
            </div>
        </div>
    }
}

// ============================================================================
// Support Card
// ============================================================================

#[component]
fn SupportCard() -> impl IntoView {
    view! {
        <div class=css::card>
            <p class=css::cardTitle>{resolve(StringId::Support)}</p>
            <p class=css::cardText>{resolve(StringId::SupportDescription)}</p>
            <div class=css::supportLinks>
                <a class=css::link href=config::GITHUB_URL target="_blank" rel="noreferrer">
                    <Icon icon=ic::GITHUB />
                    <span>"GitHub"</span>
                </a>
                <a class=css::link href=config::TELEGRAM_URL target="_blank" rel="noreferrer">
                    <Icon icon=ic::TELEGRAM />
                    <span>"Telegram"</span>
                </a>
            </div>
        </div>
    }
}
