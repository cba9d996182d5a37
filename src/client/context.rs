use std::rc::Rc;

use crate::client::{
    api::ApiClient,
    config::ClientConfig,
    form::{default_preview_factory, PreviewUrlFactory},
    map::TileUrl,
};

/// Shared by every route through Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient,
    pub config: Rc<ClientConfig>,
    pub previews: Rc<dyn PreviewUrlFactory>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            api: ApiClient::from_config(&config),
            config: Rc::new(config),
            previews: default_preview_factory(),
        }
    }

    pub fn tile_url(&self) -> TileUrl {
        TileUrl::new(self.config.tile_url_template.as_str())
    }
}
