pub mod map_view;
pub mod page;
pub mod sidebar;
pub mod weekend_box;

pub use map_view::{MapMarker, MapView};
pub use page::MessagePage;
pub use sidebar::{Sidebar, SidebarLayout};
pub use weekend_box::WeekendOpeningBox;
