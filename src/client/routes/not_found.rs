use dioxus::prelude::*;

use crate::client::{components::MessagePage, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        MessagePage { title: "Página não encontrada".to_string(),
            p { class: "text-sm opacity-70", "/{path}" }
            Link {
                to: Route::OrphanagesMap {},
                class: "btn btn-primary",
                "Voltar para o mapa"
            }
        }
    )
}
