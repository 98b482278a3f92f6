//! Root application module.
//!
//! Contains the main App component, AppContext definition, SnackbarState,
//! and application-level setup logic following Leptos conventions.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AppRouter;
use crate::config::SNACKBAR_DISMISS_MS;
use crate::core::shizuku;
use crate::models::{Capability, SystemInfo};

// ============================================================================
// SnackbarState
// ============================================================================

/// Transient acknowledgement message state.
///
/// A shown message dismisses itself after [`SNACKBAR_DISMISS_MS`] on a
/// fire-and-forget UI task. Showing a new message supersedes the pending
/// dismissal of the previous one.
#[derive(Clone, Copy)]
pub struct SnackbarState {
    message: RwSignal<Option<String>>,
    epoch: StoredValue<u64>,
}

impl SnackbarState {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            epoch: StoredValue::new(0),
        }
    }

    /// Currently displayed message, if any.
    pub fn message(&self) -> RwSignal<Option<String>> {
        self.message
    }

    /// Show a message and schedule its dismissal.
    pub fn show(&self, text: impl Into<String>) {
        let shown = self.begin_show(text.into());

        let state = *self;
        spawn_local(async move {
            TimeoutFuture::new(SNACKBAR_DISMISS_MS).await;
            state.dismiss_if_current(shown);
        });
    }

    /// Display a message and return the epoch identifying this showing.
    fn begin_show(&self, text: String) -> u64 {
        self.epoch.update_value(|e| *e += 1);
        self.message.set(Some(text));
        self.epoch.get_value()
    }

    /// Dismiss the message, unless a newer one has replaced it.
    fn dismiss_if_current(&self, shown: u64) {
        if self.epoch.get_value() == shown {
            self.message.set(None);
        }
    }
}

impl Default for SnackbarState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The [`AppContext`] separates concerns into independent domains:
/// - **Capability state**: Helper availability and permission grant
/// - **System info**: Device properties reported by the helper
/// - **Snackbar**: Transient user-visible acknowledgements
///
/// All fields are Leptos signals, so the context is cheap to copy and
/// every read is reactive. Mutation only ever happens on the UI thread,
/// where the hosting framework delivers bridge callbacks.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Privileged helper availability/grant state.
    pub capability: RwSignal<Capability>,

    /// System properties for the info card.
    pub system: RwSignal<SystemInfo>,

    /// Transient acknowledgement messages.
    pub snackbar: SnackbarState,
}

impl AppContext {
    /// Creates a new application context with default state.
    ///
    /// The capability starts `Unavailable` and the system info starts as
    /// placeholders; both are refreshed once the bridge reports in.
    pub fn new() -> Self {
        Self {
            capability: RwSignal::new(Capability::new()),
            system: RwSignal::new(SystemInfo::default()),
            snackbar: SnackbarState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Bridge Observers
// ============================================================================

/// Install the process-lifetime binder availability observers.
///
/// These observers outlive every page, so unlike the permission-result
/// listener they are registered once here and never removed.
fn setup_bridge_events(ctx: AppContext) {
    if !shizuku::is_available() {
        web_sys::console::warn_1(
            &"shizuku bridge not injected; helper features stay unavailable".into(),
        );
        return;
    }

    let ctx_on_alive = ctx;
    let _ = shizuku::on_binder_received(move || {
        ctx_on_alive.capability.update(|c| c.binder_received());
        if let Some(info) = shizuku::system_info() {
            ctx_on_alive.system.set(info);
        }
    });

    let ctx_on_dead = ctx;
    let _ = shizuku::on_binder_dead(move || {
        ctx_on_dead.capability.update(|c| c.binder_died());
    });

    // The binder may have arrived before the observers were installed.
    if shizuku::ping_binder() {
        ctx.capability.update(|c| c.binder_received());
        if let Some(info) = shizuku::system_info() {
            ctx.system.set(info);
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Installs the binder availability observers
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    // Create and provide application context
    let ctx = AppContext::new();
    provide_context(ctx);

    setup_bridge_events(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                ">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_sets_message_and_advances_epoch() {
        let snackbar = SnackbarState::new();
        assert_eq!(snackbar.message().get_untracked(), None);

        let first = snackbar.begin_show("copied".to_string());
        assert_eq!(
            snackbar.message().get_untracked(),
            Some("copied".to_string())
        );

        let second = snackbar.begin_show("again".to_string());
        assert!(second > first);
    }

    #[test]
    fn test_superseded_dismissal_leaves_newer_message() {
        let snackbar = SnackbarState::new();
        let first = snackbar.begin_show("copied".to_string());
        let second = snackbar.begin_show("again".to_string());

        // The first showing's scheduled dismissal must not clear the
        // message that replaced it.
        snackbar.dismiss_if_current(first);
        assert_eq!(
            snackbar.message().get_untracked(),
            Some("again".to_string())
        );

        snackbar.dismiss_if_current(second);
        assert_eq!(snackbar.message().get_untracked(), None);
    }
}
