use std::rc::Rc;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::client::form::image::SelectedImage;

/// Creates and releases the temporary URLs used to preview selected images.
pub trait PreviewUrlFactory {
    fn create(&self, image: &SelectedImage) -> String;
    fn release(&self, url: &str);
}

/// A preview URL that is released through its factory when dropped.
pub struct PreviewUrl {
    url: String,
    factory: Rc<dyn PreviewUrlFactory>,
}

impl PreviewUrl {
    pub fn acquire(image: &SelectedImage, factory: &Rc<dyn PreviewUrlFactory>) -> Self {
        Self {
            url: factory.create(image),
            factory: Rc::clone(factory),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        self.factory.release(&self.url);
    }
}

impl std::fmt::Debug for PreviewUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PreviewUrl").field(&self.url).finish()
    }
}

/// Inlines the image as a `data:` URL; nothing to release.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataUrlFactory;

impl PreviewUrlFactory for DataUrlFactory {
    fn create(&self, image: &SelectedImage) -> String {
        format!(
            "data:{};base64,{}",
            image.mime_type(),
            STANDARD.encode(&image.bytes)
        )
    }

    fn release(&self, _url: &str) {}
}

/// Browser object URLs (`URL.createObjectURL`), revoked on release.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectUrlFactory;

#[cfg(target_arch = "wasm32")]
impl PreviewUrlFactory for ObjectUrlFactory {
    fn create(&self, image: &SelectedImage) -> String {
        let url = crate::client::api::web::image_blob(image).and_then(|blob| {
            web_sys::Url::create_object_url_with_blob(&blob)
                .map_err(|e| crate::client::error::ClientError::Build(format!("{:?}", e)))
        });

        match url {
            Ok(url) => url,
            Err(err) => {
                dioxus_logger::tracing::warn!("Falling back to data URL preview: {}", err);
                DataUrlFactory.create(image)
            }
        }
    }

    fn release(&self, url: &str) {
        if url.starts_with("blob:") {
            let _ = web_sys::Url::revoke_object_url(url);
        }
    }
}

pub fn default_preview_factory() -> Rc<dyn PreviewUrlFactory> {
    #[cfg(target_arch = "wasm32")]
    return Rc::new(ObjectUrlFactory);

    #[cfg(not(target_arch = "wasm32"))]
    return Rc::new(DataUrlFactory);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_embeds_mime_and_bytes() {
        let image = SelectedImage::new("dot.png", None, b"png".to_vec());

        assert_eq!(DataUrlFactory.create(&image), "data:image/png;base64,cG5n");
    }
}
