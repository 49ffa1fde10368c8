//! Utility modules for web, DOM, and path operations.
//!
//! Provides:
//! - [`dom`] - Window access and native dialogs
//! - [`path`] - Storage path parent/breadcrumb helpers
//! - [`url`] - Endpoint URLs with `encodeURIComponent`-compatible encoding

pub mod dom;
pub mod path;
pub mod url;
