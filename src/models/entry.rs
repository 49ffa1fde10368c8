//! Directory listing types returned by the backend.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::IMAGE_EXTENSIONS;

/// Case-insensitive match on the image extensions from config.
///
/// Unicode mode is disabled so ASCII case folding works without the
/// `unicode-case` regex feature.
static IMAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i-u)\.(?:{})$", IMAGE_EXTENSIONS.join("|"));
    Regex::new(&pattern).expect("image extension pattern is valid")
});

/// Check whether a file name looks like a previewable image.
pub fn is_image_name(name: &str) -> bool {
    IMAGE_NAME.is_match(name)
}

/// One file or directory record from `/api/list`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectoryEntry {
    /// Base name shown in the list
    pub name: String,
    /// Path relative to the storage root (used for every action)
    pub path: String,
    /// Directory flag
    pub is_dir: bool,
    /// Human-readable size, formatted server-side
    #[serde(default)]
    pub size: String,
}

impl DirectoryEntry {
    /// Classify this entry for icon and action selection.
    pub fn kind(&self) -> EntryKind {
        if self.is_dir {
            EntryKind::Folder
        } else if is_image_name(&self.name) {
            EntryKind::Image
        } else {
            EntryKind::File
        }
    }
}

/// Entry classification used by the list view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    Image,
    File,
}

/// A directory listing as confirmed by the server.
///
/// `current` is the server-normalized path, which may differ from the
/// path that was requested.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    pub current: String,
    pub items: Vec<DirectoryEntry>,
}
