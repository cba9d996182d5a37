//! Mock HTTP endpoints and JSON payloads for the orphanage API.
//!
//! - `orphanage` - collection, detail, and creation endpoints

pub mod orphanage;
