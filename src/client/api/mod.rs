//! HTTP client for the orphanage REST API.
//!
//! [`ApiClient`] owns the base URL and turns each endpoint into an
//! [`HttpRequest`]; a [`Transport`] performs the network call. Browser builds
//! use [`WebTransport`], every other target uses [`NativeTransport`]. There is
//! no retry, timeout, or caching: each call is exactly one request.

pub mod request;
pub mod transport;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

use dioxus_logger::tracing;

#[cfg(not(target_arch = "wasm32"))]
pub use native::NativeTransport;
pub use request::{FormPart, HttpRequest, HttpResponse, Method, MultipartForm, RequestBody};
pub use transport::Transport;
#[cfg(target_arch = "wasm32")]
pub use web::WebTransport;

use crate::{
    client::{config::ClientConfig, error::ClientError},
    model::orphanage::{OrphanageDto, OrphanageSummaryDto},
};

#[cfg(target_arch = "wasm32")]
pub type PlatformTransport = WebTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTransport = NativeTransport;

pub const ORPHANAGES_PATH: &str = "/orphanages";

#[derive(Clone, Debug)]
pub struct ApiClient<T = PlatformTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<PlatformTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.api_base_url, PlatformTransport::default())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Retrieve every registered orphanage.
    pub async fn list_orphanages(&self) -> Result<Vec<OrphanageSummaryDto>, ClientError> {
        let response = self.send(HttpRequest::get(self.url(ORPHANAGES_PATH))).await?;

        response.json()
    }

    /// Retrieve one orphanage, including its images.
    pub async fn get_orphanage(&self, id: i32) -> Result<OrphanageDto, ClientError> {
        let url = self.url(&format!("{}/{}", ORPHANAGES_PATH, id));
        let response = self.send(HttpRequest::get(url)).await?;

        response.json()
    }

    /// Register a new orphanage from a multipart form.
    ///
    /// The created record in the response body is not needed by the client,
    /// only whether the request succeeded.
    pub async fn create_orphanage(&self, form: MultipartForm) -> Result<(), ClientError> {
        let request = HttpRequest::post_multipart(self.url(ORPHANAGES_PATH), form);
        self.send(request).await?;

        Ok(())
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        tracing::debug!("{} {}", request.method, request.url);

        self.transport.send(request).await?.error_for_status()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    /// Answers every request with a canned response and keeps what it was sent.
    #[derive(Clone)]
    struct StubTransport {
        response: HttpResponse,
        sent: Rc<RefCell<Vec<HttpRequest>>>,
    }

    impl StubTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                response: HttpResponse {
                    status,
                    body: body.as_bytes().to_vec(),
                },
                sent: Rc::default(),
            }
        }
    }

    impl Transport for StubTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
            self.sent.borrow_mut().push(request);
            Ok(self.response.clone())
        }
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = ApiClient::new("http://localhost:3333/", StubTransport::new(200, "[]"));

        assert_eq!(client.base_url(), "http://localhost:3333");
        assert_eq!(client.url("/orphanages"), "http://localhost:3333/orphanages");
    }

    #[tokio::test]
    async fn gets_orphanage_by_id() {
        let transport = StubTransport::new(
            200,
            r#"{"id":7,"name":"Lar","latitude":-23.5,"longitude":-46.8,"about":"","instructions":"","opening_hours":"8h","open_on_weekends":false}"#,
        );
        let client = ApiClient::new("http://api", transport.clone());

        let orphanage = client.get_orphanage(7).await.unwrap();

        assert_eq!(orphanage.id, 7);
        assert!(orphanage.images.is_empty());
        let sent = transport.sent.borrow();
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "http://api/orphanages/7");
    }

    #[tokio::test]
    async fn posts_form_once() {
        let transport = StubTransport::new(201, "{}");
        let client = ApiClient::new("http://api", transport.clone());
        let mut form = MultipartForm::new();
        form.push_text("name", "Lar");

        client.create_orphanage(form.clone()).await.unwrap();

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].body, RequestBody::Multipart(form));
    }

    #[tokio::test]
    async fn maps_server_error() {
        let client = ApiClient::new(
            "http://api",
            StubTransport::new(500, r#"{"error":"Internal server error"}"#),
        );

        let result = client.list_orphanages().await;

        assert_eq!(
            result,
            Err(ClientError::Status {
                status: 500,
                message: "Internal server error".to_string()
            })
        );
    }
}
