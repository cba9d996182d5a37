use reqwest::multipart::{Form, Part};

use crate::client::{
    api::{
        request::{FormPart, HttpRequest, HttpResponse, Method, MultipartForm, RequestBody},
        transport::Transport,
    },
    error::ClientError,
};

/// `reqwest` transport for desktop builds and tests.
#[derive(Clone, Debug, Default)]
pub struct NativeTransport {
    client: reqwest::Client,
}

impl NativeTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for NativeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Multipart(form) => builder.multipart(to_multipart(form)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn to_multipart(form: MultipartForm) -> Result<Form, ClientError> {
    let mut multipart = Form::new();

    for (name, part) in form.into_parts() {
        multipart = match part {
            FormPart::Text(value) => multipart.text(name, value),
            FormPart::File(image) => {
                let mime = image.mime_type().to_string();
                let part = Part::bytes(image.bytes)
                    .file_name(image.name)
                    .mime_str(&mime)
                    .map_err(|e| ClientError::Build(e.to_string()))?;

                multipart.part(name, part)
            }
        };
    }

    Ok(multipart)
}
