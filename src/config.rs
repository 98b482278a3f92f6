//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Manager version shown on the home info card.
pub const VERSION_NAME: &str = "0.1.0";

/// Monotonic manager version code.
pub const VERSION_CODE: u32 = 1;

/// Version of the patch API the manager speaks with patched apps.
pub const API_CODE: u32 = 93;

/// Version of the embedded patching core shipped inside the manager.
pub const CORE_VERSION_NAME: &str = "1.9.2";

/// Monotonic version code of the embedded patching core.
pub const CORE_VERSION_CODE: u32 = 7024;

// =============================================================================
// Privileged Helper Configuration
// =============================================================================

/// Request code attached to the Shizuku permission request so the
/// asynchronous result callback can be matched to this application.
pub const PERMISSION_REQUEST_CODE: u32 = 114514;

// =============================================================================
// External Links
// =============================================================================

/// Project source repository.
pub const GITHUB_URL: &str = "https://github.com/patchman-app/patchman";

/// Community chat.
pub const TELEGRAM_URL: &str = "https://t.me/patchman_app";

// =============================================================================
// UI Configuration
// =============================================================================

/// How long the transient snackbar acknowledgement stays visible.
pub const SNACKBAR_DISMISS_MS: u32 = 3000;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
