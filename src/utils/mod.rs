//! Utility modules for web, DOM, and display operations.
//!
//! Provides:
//! - [`dom`] - Window, hash navigation, and clipboard access
//! - [`format`] - Display formatting helpers
//! - [`strings`] - Localized string resources

pub mod dom;
pub mod format;
pub mod strings;
