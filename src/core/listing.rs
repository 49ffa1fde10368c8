//! List rows derived from a directory listing.
//!
//! Rendering is split in two: [`build_rows`] decides what each row shows and
//! which controls it offers, the `FileList` component only draws it.

use crate::models::{DirectoryEntry, EntryKind};
use crate::utils::path::parent_path;
use crate::utils::url::open_url;

/// Icon shown at the start of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowGlyph {
    Parent,
    Folder,
    Image,
    File,
}

impl From<EntryKind> for RowGlyph {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Folder => Self::Folder,
            EntryKind::Image => Self::Image,
            EntryKind::File => Self::File,
        }
    }
}

/// A control attached to a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    /// Browse into a directory
    Navigate { path: String },
    /// Raw-content link, opened in a new tab
    OpenRaw { url: String },
    /// Show the image in the preview modal
    Preview { path: String, name: String },
    /// Delete after confirmation
    Delete { path: String, is_dir: bool },
}

impl RowAction {
    /// Button/link caption.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Navigate { .. } | Self::OpenRaw { .. } => "Open",
            Self::Preview { .. } => "Preview",
            Self::Delete { .. } => "Delete",
        }
    }
}

/// One rendered row of the file list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRow {
    pub glyph: RowGlyph,
    pub name: String,
    pub meta: String,
    pub actions: Vec<RowAction>,
}

impl ListRow {
    fn parent(current_path: &str) -> Self {
        Self {
            glyph: RowGlyph::Parent,
            name: "..".to_string(),
            meta: "Parent".to_string(),
            actions: vec![RowAction::Navigate {
                path: parent_path(current_path),
            }],
        }
    }

    fn entry(entry: &DirectoryEntry) -> Self {
        let kind = entry.kind();

        let mut actions = Vec::with_capacity(3);
        match kind {
            EntryKind::Folder => actions.push(RowAction::Navigate {
                path: entry.path.clone(),
            }),
            EntryKind::Image | EntryKind::File => {
                actions.push(RowAction::OpenRaw {
                    url: open_url(&entry.path),
                });
                if kind == EntryKind::Image {
                    actions.push(RowAction::Preview {
                        path: entry.path.clone(),
                        name: entry.name.clone(),
                    });
                }
            }
        }
        actions.push(RowAction::Delete {
            path: entry.path.clone(),
            is_dir: entry.is_dir,
        });

        let meta = if entry.is_dir {
            format!("{} • folder", entry.size)
        } else {
            entry.size.clone()
        };

        Self {
            glyph: kind.into(),
            name: entry.name.clone(),
            meta,
            actions,
        }
    }
}

/// Build the rows for `entries` shown at `current_path`.
///
/// A parent row comes first unless `current_path` is the root.
pub fn build_rows(current_path: &str, entries: &[DirectoryEntry]) -> Vec<ListRow> {
    let parent = (!current_path.is_empty()).then(|| ListRow::parent(current_path));
    parent
        .into_iter()
        .chain(entries.iter().map(ListRow::entry))
        .collect()
}
