//! State behind the orphanage registration form.
//!
//! [`DraftOrphanage`] is plain data mutated by the form's event handlers and
//! serialized into a [`MultipartForm`](crate::client::api::MultipartForm) on
//! submit. It is never persisted and is dropped with the form, which releases
//! every image preview it still holds.

pub mod draft;
pub mod image;
pub mod preview;

pub use draft::{Coordinates, DraftOrphanage, TextField, MAX_TEXT_LENGTH};
pub use image::{ImageSelection, SelectedImage};
pub use preview::{default_preview_factory, DataUrlFactory, PreviewUrl, PreviewUrlFactory};

/// Progress of the current submission, shown by the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}
