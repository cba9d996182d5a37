/// Subdomains rotated into `{s}` so browsers spread tile requests.
const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

/// A tile positioned relative to the viewport's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilePlacement {
    pub x: u32,
    pub y: u32,
    pub z: u8,
    /// Column before wrapping, distinct for repeated copies of the world.
    pub column: i64,
    pub left: f64,
    pub top: f64,
}

impl TilePlacement {
    pub fn key(&self) -> String {
        format!("{}/{}/{}", self.z, self.column, self.y)
    }
}

/// Tile server URL template such as `https://a.tile.openstreetmap.org/{z}/{x}/{y}.png`.
#[derive(Clone, Debug, PartialEq)]
pub struct TileUrl {
    template: String,
}

impl TileUrl {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn url(&self, tile: &TilePlacement) -> String {
        let subdomain = SUBDOMAINS[((tile.x + tile.y) as usize) % SUBDOMAINS.len()];

        self.template
            .replace("{s}", subdomain)
            .replace("{z}", &tile.z.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
    }
}
