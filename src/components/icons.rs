//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::core::RowGlyph;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUp as Parent, LuChevronRight as ChevronRight, LuExternalLink as ExternalLink,
        LuEye as Preview, LuFile as File, LuFolder as Folder, LuFolderPlus as NewFolder,
        LuHardDrive as Storage, LuImage as FileImage, LuTrash2 as Trash, LuUpload as Upload,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowUp as Parent, BsBoxArrowUpRight as ExternalLink, BsChevronRight as ChevronRight,
        BsEye as Preview, BsFileEarmark as File, BsFileEarmarkImage as FileImage,
        BsFolderFill as Folder, BsFolderPlus as NewFolder, BsHddStack as Storage,
        BsTrash as Trash, BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(FILE, File);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FOLDER, Folder);
themed_icon!(NEW_FOLDER, NewFolder);
themed_icon!(PARENT, Parent);
themed_icon!(PREVIEW, Preview);
themed_icon!(STORAGE, Storage);
themed_icon!(TRASH, Trash);
themed_icon!(UPLOAD, Upload);

/// Icon for a list row glyph.
pub fn glyph(glyph: RowGlyph) -> Icon {
    match glyph {
        RowGlyph::Parent => PARENT,
        RowGlyph::Folder => FOLDER,
        RowGlyph::Image => FILE_IMAGE,
        RowGlyph::File => FILE,
    }
}
