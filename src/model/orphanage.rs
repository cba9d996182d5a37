use serde::{Deserialize, Serialize};

use crate::client::map::LatLng;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageDto {
    pub id: i32,
    pub path: String,
}

/// Entry returned by the orphanage collection endpoint.
///
/// Only the fields needed to place a marker are read, extra fields in the
/// payload are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrphanageSummaryDto {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrphanageDto {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub about: String,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
    #[serde(default)]
    pub images: Vec<ImageDto>,
}

impl OrphanageSummaryDto {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

impl OrphanageDto {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}
