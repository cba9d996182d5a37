use crate::client::{
    api::request::{HttpRequest, HttpResponse},
    error::ClientError,
};

/// Sends a fully built request and hands back the raw response.
///
/// Implementations only report transport failures; status handling stays in
/// [`ApiClient`](crate::client::api::ApiClient).
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}
