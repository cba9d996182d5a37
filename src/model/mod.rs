pub mod api;
pub mod orphanage;
