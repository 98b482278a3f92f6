//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Page`] - The closed page registry and its argument contracts
//! - [`AppRoute`] - Hash-based navigation over the registry
//! - [`Capability`], [`CapabilityState`] - Privileged helper availability/grant state
//! - [`SystemInfo`] - Device and version identifiers for the info card

mod capability;
mod device;
mod page;
mod route;

pub use capability::{Capability, CapabilityState};
pub use device::{SystemInfo, clipboard_text, info_summary};
pub use page::{ArgType, Page};
pub use route::AppRoute;
