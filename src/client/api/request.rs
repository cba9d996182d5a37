use serde::de::DeserializeOwned;

use crate::{
    client::{error::ClientError, form::SelectedImage},
    model::api::ErrorDto,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormPart {
    Text(String),
    File(SelectedImage),
}

/// An ordered `multipart/form-data` body.
///
/// Names may repeat; parts are sent in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartForm {
    parts: Vec<(String, FormPart)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, name: &str, value: impl Into<String>) {
        self.parts
            .push((name.to_string(), FormPart::Text(value.into())));
    }

    pub fn push_file(&mut self, name: &str, image: SelectedImage) {
        self.parts.push((name.to_string(), FormPart::File(image)));
    }

    pub fn parts(&self) -> &[(String, FormPart)] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<(String, FormPart)> {
        self.parts
    }

    /// First text value stored under `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(key, part)| match part {
            FormPart::Text(value) if key == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Every file stored under `name`, in insertion order.
    pub fn files(&self, name: &str) -> Vec<&SelectedImage> {
        self.parts
            .iter()
            .filter_map(|(key, part)| match part {
                FormPart::File(image) if key == name => Some(image),
                _ => None,
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Multipart(MultipartForm),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn get(url: String) -> Self {
        Self {
            method: Method::Get,
            url,
            body: RequestBody::Empty,
        }
    }

    pub fn post_multipart(url: String, form: MultipartForm) -> Self {
        Self {
            method: Method::Post,
            url,
            body: RequestBody::Multipart(form),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-success response into [`ClientError::Status`], using the
    /// API's [`ErrorDto`] message when the body carries one.
    pub fn error_for_status(self) -> Result<Self, ClientError> {
        if self.is_success() {
            return Ok(self);
        }

        let message = match serde_json::from_slice::<ErrorDto>(&self.body) {
            Ok(error_dto) => error_dto.error,
            Err(_) => {
                let text = String::from_utf8_lossy(&self.body).trim().to_string();
                if text.is_empty() {
                    "Unknown error".to_string()
                } else {
                    text
                }
            }
        };

        Err(ClientError::Status {
            status: self.status,
            message,
        })
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
