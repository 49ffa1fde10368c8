//! Image preview overlay state.

/// Content of the preview modal while it is showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePreview {
    /// Raw-content URL used as the image source
    pub src: String,
    /// File name, followed by the directory when not at the root
    pub caption: String,
}

impl ImagePreview {
    pub fn new(src: String, name: &str, current_path: &str) -> Self {
        let caption = if current_path.is_empty() {
            name.to_string()
        } else {
            format!("{} • {}", name, current_path)
        };
        Self { src, caption }
    }
}
