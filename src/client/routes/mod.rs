pub mod create_orphanage;
pub mod not_found;
pub mod orphanage;
pub mod orphanages_map;

pub use create_orphanage::CreateOrphanage;
pub use not_found::NotFound;
pub use orphanage::Orphanage;
pub use orphanages_map::OrphanagesMap;

/// Zoom of the map listing every orphanage.
pub const LIST_ZOOM: u8 = 14;
/// Zoom of the registration form's location picker.
pub const FORM_ZOOM: u8 = 15;
/// Zoom of the detail page map.
pub const DETAIL_ZOOM: u8 = 16;
