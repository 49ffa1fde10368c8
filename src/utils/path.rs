//! Slash-separated path helpers for storage paths.
//!
//! Storage paths are relative to the backend root: `""` is the root,
//! `"docs/img"` is a nested directory. They never start with `/`.

/// Parent of a storage path (`""` for top-level entries and the root).
pub fn parent_path(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((parent, _)) => parent.to_string(),
        None => String::new(),
    }
}

/// Breadcrumb text for a storage path (`/` + path).
pub fn breadcrumb_text(path: &str) -> String {
    format!("/{}", path)
}

/// One clickable piece of the breadcrumb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    /// Label shown for the segment
    pub label: String,
    /// Navigation target (None for the current directory)
    pub target: Option<String>,
    /// Whether a `/` separator is drawn before the label
    pub separated: bool,
}

/// Split a storage path into breadcrumb segments.
///
/// The first crumb is always the root `/`. Every crumb except the last one
/// targets the path prefix ending at that segment. Segments after the first
/// are separated by `/`, so the crumbs read as `/` + path.
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut crumbs = Vec::with_capacity(segments.len() + 1);
    crumbs.push(Crumb {
        label: "/".to_string(),
        target: (!segments.is_empty()).then(String::new),
        separated: false,
    });

    for (idx, segment) in segments.iter().enumerate() {
        let is_last = idx == segments.len() - 1;
        crumbs.push(Crumb {
            label: segment.to_string(),
            target: (!is_last).then(|| segments[..=idx].join("/")),
            separated: idx > 0,
        });
    }

    crumbs
}
