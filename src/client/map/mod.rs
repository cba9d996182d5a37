//! Slippy map geometry used by the `MapView` component.
//!
//! Everything here is plain math over Web Mercator tiles so it can be tested
//! without a browser. The component only measures its container, feeds mouse
//! positions in, and renders what the [`Viewport`] hands back.

pub mod drag;
pub mod geo;
pub mod projection;
pub mod tile;

pub use drag::DragState;
pub use geo::LatLng;
pub use projection::{Viewport, WorldPoint};
pub use tile::{TilePlacement, TileUrl};

/// Initial map centre used by every view.
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: -23.5346662,
    lng: -46.819679,
};

pub const MIN_ZOOM: u8 = 3;
pub const MAX_ZOOM: u8 = 18;

/// Clamp a zoom level to what the tile provider serves.
pub fn clamp_zoom(zoom: i16) -> u8 {
    zoom.clamp(MIN_ZOOM as i16, MAX_ZOOM as i16) as u8
}

/// Google Maps link with driving directions to `destination`.
pub fn directions_url(destination: LatLng) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        destination.lat, destination.lng
    )
}
