use serde::{Deserialize, Serialize};

/// The response body the orphanage API sends when a request fails
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
