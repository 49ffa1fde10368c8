//! Core logic of the directory browser.
//!
//! This module provides:
//! - [`Controller`] with the browser operations and its [`BrowserView`] seam
//! - [`api::FileApi`] and the HTTP implementation [`HttpApi`]
//! - [`build_rows`] turning a listing into rendered rows

pub mod api;
mod controller;
pub mod error;
mod listing;

pub use api::HttpApi;
pub use controller::{BrowserView, Controller};
pub use listing::{ListRow, RowAction, RowGlyph, build_rows};
