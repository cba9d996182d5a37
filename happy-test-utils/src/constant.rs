//! Shared values for the orphanage fixtures.

/// Path of the orphanage collection endpoint on the mock server.
pub static ORPHANAGES_PATH: &str = "/orphanages";

/// Centre of the default map view, used as the location of mock orphanages.
pub static TEST_LATITUDE: f64 = -23.5346662;
pub static TEST_LONGITUDE: f64 = -46.819679;
