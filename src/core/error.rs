//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`BridgeError`] - Shizuku helper bridge interop errors
//! - [`RouteError`] - Navigation route decoding errors

use std::fmt;

use crate::models::ArgType;

/// Errors raised by the injected Shizuku helper bridge.
///
/// The UI never surfaces these to the user; an unreachable bridge is
/// represented as capability state, not as an error.
#[derive(Debug, Clone)]
pub enum BridgeError {
    /// Browser window not available
    NoWindow,
    /// Helper bridge object not injected into the page
    NotInstalled,
    /// A bridge function was missing or threw
    CallFailed(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::NotInstalled => write!(f, "Shizuku bridge not available in this page"),
            Self::CallFailed(name) => write!(f, "Shizuku bridge call failed: {}", name),
        }
    }
}

impl std::error::Error for BridgeError {}

/// Errors raised while decoding a URL hash into a navigation route.
///
/// A route built programmatically from the page registry can never
/// produce these; they only describe hand-typed address bar input.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteError {
    /// The path segment names no registered page
    UnknownPage(String),
    /// A required argument was not supplied
    MissingArgument(&'static str),
    /// An argument value did not parse as its declared type
    TypeMismatch {
        name: &'static str,
        expected: ArgType,
    },
    /// The query named an argument the page does not declare
    UnknownArgument(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPage(segment) => write!(f, "unknown page: {}", segment),
            Self::MissingArgument(name) => write!(f, "missing required argument: {}", name),
            Self::TypeMismatch { name, expected } => {
                write!(f, "argument {} is not a valid {:?}", name, expected)
            }
            Self::UnknownArgument(name) => write!(f, "undeclared argument: {}", name),
        }
    }
}

impl std::error::Error for RouteError {}
