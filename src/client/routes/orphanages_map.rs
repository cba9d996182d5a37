use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaLocationDot, FaPlus};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::{MapMarker, MapView},
    context::AppContext,
    map::DEFAULT_CENTER,
    router::Route,
    routes::LIST_ZOOM,
    task::use_lifetime_token,
};

#[component]
pub fn OrphanagesMap() -> Element {
    let ctx = use_context::<AppContext>();
    let token = use_lifetime_token();

    // Retrieve orphanages once on mount
    let orphanages = use_resource(move || {
        let api = ctx.api.clone();
        let token = token.clone();

        async move {
            let result = token.guard(api.list_orphanages()).await;
            if let Some(Err(err)) = &result {
                tracing::error!("Failed to load orphanages: {}", err);
            }
            result
        }
    });

    let (markers, error) = match &*orphanages.read_unchecked() {
        Some(Some(Ok(list))) => {
            let markers: Vec<MapMarker> = list
                .iter()
                .map(|orphanage| {
                    MapMarker::new(orphanage.id, orphanage.position()).with_popup(
                        orphanage.name.clone(),
                        Route::Orphanage { id: orphanage.id },
                    )
                })
                .collect();
            (markers, None)
        }
        Some(Some(Err(err))) => (Vec::new(), Some(err.to_string())),
        _ => (Vec::new(), None),
    };

    rsx!(
        Title { "Orfanatos | Happy" }
        div { class: "h-screen flex",
            aside {
                class: "w-96 shrink-0 bg-primary text-primary-content p-12 flex flex-col justify-between",
                header { class: "flex flex-col gap-6",
                    Icon {
                        width: 48,
                        height: 48,
                        icon: FaLocationDot
                    }
                    h2 { class: "text-4xl font-extrabold leading-tight",
                        "Escolha um orfanato no mapa"
                    }
                    p { class: "text-lg",
                        "Muitas crianças estão esperando a sua visita :)"
                    }
                }
                footer { class: "flex flex-col",
                    strong { "Osasco" }
                    span { "São Paulo" }
                }
            }
            div { class: "relative flex-1",
                MapView {
                    center: DEFAULT_CENTER,
                    zoom: LIST_ZOOM,
                    markers: markers,
                    class: "w-full h-full",
                }
                if let Some(error) = error {
                    div { role: "alert", class: "alert alert-error absolute top-4 left-4 right-4 z-30",
                        span { "Não foi possível carregar os orfanatos: {error}" }
                    }
                }
                Link {
                    to: Route::CreateOrphanage {},
                    class: "btn btn-primary btn-square btn-lg absolute bottom-10 right-10 z-30",
                    Icon {
                        width: 32,
                        height: 32,
                        icon: FaPlus
                    }
                }
            }
        }
    )
}
