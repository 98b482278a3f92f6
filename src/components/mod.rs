//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`home`] - Home page: capability, info, and support cards
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`navbar`] - Bottom navigation built from the page registry
//! - [`pages`] - Secondary page components

pub mod home;
pub mod icons;
pub mod navbar;
pub mod pages;
pub mod router;

pub use router::AppRouter;
