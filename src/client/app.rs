use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::MessagePage, config::ClientConfig, context::AppContext, router::Route,
};

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        let config = ClientConfig::from_env();
        if let Err(err) = &config {
            tracing::error!("Configuration error: {}", err);
        }
        config
    });

    rsx!(
        Title { "Happy" }
        Meta {
            name: "description",
            content: "Leve felicidade para o mundo visitando orfanatos."
        }
        {match config {
            Ok(config) => rsx!(Shell { config }),
            Err(err) => rsx!(ConfigErrorPage { message: err.to_string() }),
        }}
    )
}

#[component]
fn Shell(config: ClientConfig) -> Element {
    use_context_provider(|| AppContext::new(config.clone()));

    rsx!(Router::<Route> {})
}

#[component]
fn ConfigErrorPage(message: String) -> Element {
    rsx!(
        MessagePage {
            title: "Happy is not configured".to_string(),
            tone: "border border-error",
            p { role: "alert", class: "text-error", "{message}" }
        }
    )
}
