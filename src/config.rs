//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "filedock";

// =============================================================================
// Backend Configuration
// =============================================================================

/// Prefix prepended to every backend endpoint.
///
/// Empty when the UI is served by the same origin as the API.
pub const API_BASE: &str = "";

/// Backend endpoint paths.
pub mod endpoints {
    /// Directory listing (`GET ?path=`).
    pub const LIST: &str = "/api/list";
    /// Folder creation (`POST`, form-encoded).
    pub const CREATE_FOLDER: &str = "/api/create-folder";
    /// File upload (`POST`, multipart).
    pub const UPLOAD: &str = "/api/upload";
    /// Entry deletion (`POST`, form-encoded).
    pub const DELETE: &str = "/api/delete";
    /// Raw file content, followed by `/<encoded path>`.
    pub const OPEN: &str = "/open";
}

/// Form field names expected by the backend.
pub mod fields {
    pub const PATH: &str = "path";
    pub const FOLDER: &str = "folder";
    pub const FILE: &str = "file";
}

// =============================================================================
// Browser Configuration
// =============================================================================

/// How long a transient message stays on screen, in milliseconds.
pub const MESSAGE_TIMEOUT_MS: u32 = 3000;

/// File extensions (lowercase) treated as previewable images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg"];

/// User-facing status texts.
pub mod messages {
    pub const FOLDER_CREATED: &str = "Folder created";
    pub const UPLOADED: &str = "Uploaded";
    pub const DELETED: &str = "Deleted";

    pub const LOAD_FAILED: &str = "Failed to load";
    pub const CREATE_FAILED: &str = "Create failed";
    pub const UPLOAD_FAILED: &str = "Upload failed";
    pub const DELETE_FAILED: &str = "Delete failed";

    pub const FOLDER_NAME_REQUIRED: &str = "Folder name required";
    pub const NO_FILE_SELECTED: &str = "No selected file";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
