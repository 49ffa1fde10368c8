//! UI components built with Leptos.
//!
//! - [`Browser`] - Directory browser (main entry point)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;

pub use browser::Browser;
