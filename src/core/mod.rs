//! Core integration logic for the manager.
//!
//! This module provides:
//! - [`error`] - Structured error types for the interop layers
//! - [`shizuku`] - The injected privileged helper bridge

pub mod error;
pub mod shizuku;
