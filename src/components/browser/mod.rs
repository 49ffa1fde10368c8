//! Directory browser UI components.
//!
//! Components:
//! - [`Browser`] - Main browser view
//! - [`Breadcrumb`] - Clickable path of the current directory
//! - [`Toolbar`] - Create-folder and upload forms
//! - [`StatusMessage`] - Transient status line
//! - [`FileList`] - Rows for the current directory
//! - [`PreviewModal`] - Image preview overlay

mod breadcrumb;
#[allow(clippy::module_inception)]
mod browser;
mod file_list;
mod message;
mod preview;
mod toolbar;

pub use breadcrumb::Breadcrumb;
pub use browser::Browser;
pub use file_list::FileList;
pub use message::StatusMessage;
pub use preview::PreviewModal;
pub use toolbar::Toolbar;
