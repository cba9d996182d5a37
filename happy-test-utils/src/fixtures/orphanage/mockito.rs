//! Orphanage API mock endpoint creation utilities.
//!
//! Endpoints are registered with the setup's mockito server and can verify
//! they were called the expected number of times.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{constant::ORPHANAGES_PATH, fixtures::orphanage::OrphanageFixtures};

impl<'a> OrphanageFixtures<'a> {
    /// Create a mock GET endpoint for the orphanage collection.
    ///
    /// # Arguments
    /// - `orphanages` - JSON entries to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_list_endpoint(&mut self, orphanages: Vec<Value>, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", ORPHANAGES_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(orphanages).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock GET endpoint at `/orphanages/{id}`.
    pub fn create_detail_endpoint(
        &mut self,
        id: i32,
        orphanage: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("{}/{}", ORPHANAGES_PATH, id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(orphanage.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock POST endpoint for orphanage creation.
    ///
    /// The endpoint only answers multipart requests whose body matches every
    /// matcher in `body`; anything else falls through to mockito's 501.
    ///
    /// # Arguments
    /// - `body` - Matchers applied to the raw multipart body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_post_endpoint(&mut self, body: Vec<Matcher>, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", ORPHANAGES_PATH)
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".to_string()),
            )
            .match_body(Matcher::AllOf(body))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(json!({ "id": 1 }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering `method path` with an API error body.
    pub fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        message: &str,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": message }).to_string())
            .create()
    }
}

/// Matches a text part `name` whose value is exactly `value`.
pub fn text_part(name: &str, value: &str) -> Matcher {
    Matcher::Regex(format!(
        "name=\"{}\"\r\n\r\n{}\r\n",
        regex_escape(name),
        regex_escape(value)
    ))
}

/// Matches file parts named `name` carrying `file_names`, in that order.
pub fn file_parts_in_order(name: &str, file_names: &[&str]) -> Matcher {
    let parts: Vec<String> = file_names
        .iter()
        .map(|file| {
            format!(
                "name=\"{}\"; filename=\"{}\"",
                regex_escape(name),
                regex_escape(file)
            )
        })
        .collect();

    Matcher::Regex(format!("(?s){}", parts.join(".*")))
}

fn regex_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if "\\.+*?()|[]{}^$#&-~".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
