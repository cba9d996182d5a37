//! Tests for the orphanage API client.
//!
//! Each test runs [`ApiClient`] over the native transport against a mockito
//! server standing in for the orphanage backend.

mod create_orphanage;
mod get_orphanage;
mod list_orphanages;

use happy::client::api::{ApiClient, NativeTransport};
use happy_test_utils::prelude::*;

fn api_client(test: &TestSetup) -> ApiClient<NativeTransport> {
    ApiClient::new(&test.url(), NativeTransport::default())
}
