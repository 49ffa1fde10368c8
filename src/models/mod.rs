//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`DirectoryEntry`], [`EntryKind`], [`Listing`] - Backend directory listings
//! - [`ImagePreview`] - Preview overlay content

mod entry;
mod preview;

pub use entry::{DirectoryEntry, EntryKind, Listing};
pub use preview::ImagePreview;
