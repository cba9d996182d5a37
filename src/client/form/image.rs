use std::rc::Rc;

use crate::client::form::preview::{PreviewUrl, PreviewUrlFactory};

/// A local file picked in the form's image input.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedImage {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl SelectedImage {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.filter(|ct| !ct.is_empty()),
            bytes,
        }
    }

    /// MIME type reported by the browser, or guessed from the file extension.
    pub fn mime_type(&self) -> &str {
        if let Some(content_type) = &self.content_type {
            return content_type;
        }

        let extension = self
            .name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("svg") => "image/svg+xml",
            _ => "application/octet-stream",
        }
    }
}

/// Selected files, each paired with the preview generated for it.
///
/// Pairing keeps the two sequences the same length by construction.
#[derive(Default)]
pub struct ImageSelection {
    entries: Vec<(SelectedImage, PreviewUrl)>,
}

impl ImageSelection {
    /// Replace the whole selection, generating one preview per file in
    /// order.
    ///
    /// An empty list, as sent when the file picker is cancelled, leaves the
    /// current selection untouched and returns `false`. Previews of replaced
    /// files are released.
    pub fn replace(
        &mut self,
        files: Vec<SelectedImage>,
        factory: &Rc<dyn PreviewUrlFactory>,
    ) -> bool {
        if files.is_empty() {
            return false;
        }

        self.entries = files
            .into_iter()
            .map(|file| {
                let preview = PreviewUrl::acquire(&file, factory);
                (file, preview)
            })
            .collect();

        true
    }

    pub fn files(&self) -> impl Iterator<Item = &SelectedImage> {
        self.entries.iter().map(|(file, _)| file)
    }

    pub fn previews(&self) -> impl Iterator<Item = &PreviewUrl> {
        self.entries.iter().map(|(_, preview)| preview)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
