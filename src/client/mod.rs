pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod form;
pub mod map;
pub mod router;
pub mod routes;
pub mod task;
pub mod util;

pub use app::App;
