use reqwasm::http::Request;
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::client::{
    api::{
        request::{FormPart, HttpRequest, HttpResponse, Method, MultipartForm, RequestBody},
        transport::Transport,
    },
    error::ClientError,
    form::SelectedImage,
};

/// Browser `fetch` transport.
#[derive(Clone, Debug, Default)]
pub struct WebTransport;

impl Transport for WebTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        // The browser sets the multipart boundary header itself
        if let RequestBody::Multipart(form) = request.body {
            builder = builder.body(to_form_data(form)?);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

fn to_form_data(form: MultipartForm) -> Result<FormData, ClientError> {
    let data = FormData::new().map_err(|e| ClientError::Build(format!("{:?}", e)))?;

    for (name, part) in form.into_parts() {
        let appended = match part {
            FormPart::Text(value) => data.append_with_str(&name, &value),
            FormPart::File(image) => {
                data.append_with_blob_and_filename(&name, &image_blob(&image)?, &image.name)
            }
        };
        appended.map_err(|e| ClientError::Build(format!("{:?}", e)))?;
    }

    Ok(data)
}

/// Copies a selected image into a JS `Blob` carrying its MIME type.
pub fn image_blob(image: &SelectedImage) -> Result<Blob, ClientError> {
    let bytes = js_sys::Uint8Array::from(image.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(image.mime_type());

    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| ClientError::Build(format!("{:?}", e)))
}
