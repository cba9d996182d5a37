//! Web Mercator projection at integer zoom levels.
//!
//! World coordinates are pixels on the full map at a given zoom: `(0, 0)` is
//! the north-west corner and the world is `256 * 2^zoom` pixels wide.

use std::f64::consts::PI;

use crate::client::map::{
    geo::{LatLng, MAX_LATITUDE},
    tile::TilePlacement,
};

pub const TILE_SIZE: f64 = 256.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

/// Width and height of the whole world in pixels at `zoom`.
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom)
}

pub fn project(position: LatLng, zoom: u8) -> WorldPoint {
    let size = world_size(zoom);
    let lat = position.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    WorldPoint {
        x: (position.lng + 180.0) / 360.0 * size,
        y: (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size,
    }
}

pub fn unproject(point: WorldPoint, zoom: u8) -> LatLng {
    let size = world_size(zoom);
    let n = PI - 2.0 * PI * point.y / size;

    LatLng::new(n.sinh().atan().to_degrees(), point.x / size * 360.0 - 180.0)
}

/// The rectangle of the map currently on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: u8, width: f64, height: f64) -> Self {
        Self {
            center,
            zoom,
            width,
            height,
        }
    }

    /// World position of the top-left screen pixel.
    pub fn origin(&self) -> WorldPoint {
        let center = project(self.center, self.zoom);

        WorldPoint {
            x: center.x - self.width / 2.0,
            y: center.y - self.height / 2.0,
        }
    }

    /// Screen position of `position`, relative to the top-left corner.
    pub fn to_screen(&self, position: LatLng) -> (f64, f64) {
        let origin = self.origin();
        let point = project(position, self.zoom);

        (point.x - origin.x, point.y - origin.y)
    }

    /// Geographic position under the screen pixel `(x, y)`.
    pub fn to_latlng(&self, x: f64, y: f64) -> LatLng {
        let origin = self.origin();
        let point = WorldPoint {
            x: origin.x + x,
            y: origin.y + y,
        };

        unproject(point, self.zoom).wrapped()
    }

    /// Centre after moving the map content by `(dx, dy)` screen pixels.
    ///
    /// Dragging the content right moves the centre west, so callers pass the
    /// pointer delta negated.
    pub fn panned(&self, dx: f64, dy: f64) -> LatLng {
        let center = project(self.center, self.zoom);
        let point = WorldPoint {
            x: center.x + dx,
            y: (center.y + dy).clamp(0.0, world_size(self.zoom)),
        };

        unproject(point, self.zoom).wrapped()
    }

    /// Every tile that intersects the viewport.
    ///
    /// Columns wrap around the antimeridian, rows outside the world are
    /// skipped.
    pub fn tiles(&self) -> Vec<TilePlacement> {
        let origin = self.origin();
        let tiles_per_side = 1i64 << self.zoom;

        let first_column = (origin.x / TILE_SIZE).floor() as i64;
        let last_column = ((origin.x + self.width) / TILE_SIZE).ceil() as i64 - 1;
        let first_row = (origin.y / TILE_SIZE).floor() as i64;
        let last_row = ((origin.y + self.height) / TILE_SIZE).ceil() as i64 - 1;

        let mut tiles = Vec::new();
        for row in first_row.max(0)..=last_row.min(tiles_per_side - 1) {
            for column in first_column..=last_column {
                tiles.push(TilePlacement {
                    x: column.rem_euclid(tiles_per_side) as u32,
                    y: row as u32,
                    z: self.zoom,
                    column,
                    left: column as f64 * TILE_SIZE - origin.x,
                    top: row as f64 * TILE_SIZE - origin.y,
                });
            }
        }

        tiles
    }
}
