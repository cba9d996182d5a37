use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaGoogle;
use dioxus_free_icons::icons::fa_solid_icons::FaClock;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{MapMarker, MapView, SidebarLayout, WeekendOpeningBox},
        context::AppContext,
        map::directions_url,
        routes::DETAIL_ZOOM,
        task::use_lifetime_token,
        util::ImageGallery,
    },
    model::orphanage::OrphanageDto,
};

#[component]
pub fn Orphanage(id: i32) -> Element {
    let ctx = use_context::<AppContext>();
    let token = use_lifetime_token();
    // Kept across id changes, only a remount starts over at the first image
    let gallery = use_signal(ImageGallery::default);

    let orphanage = use_resource(use_reactive((&id,), move |(id,)| {
        let api = ctx.api.clone();
        let token = token.clone();

        async move {
            let result = token.guard(api.get_orphanage(id)).await;
            if let Some(Err(err)) = &result {
                tracing::error!("Failed to load orphanage {}: {}", id, err);
            }
            result
        }
    }));

    let content = match &*orphanage.read_unchecked() {
        Some(Some(Ok(orphanage))) => rsx!(OrphanageDetails {
            orphanage: orphanage.clone(),
            gallery: gallery
        }),
        Some(Some(Err(err))) => rsx!(
            div { role: "alert", class: "alert alert-error h-fit max-w-3xl",
                span { "Não foi possível carregar o orfanato: {err}" }
            }
        ),
        _ => rsx!(p { "Carregando..." }),
    };

    rsx!(
        SidebarLayout {
            {content}
        }
    )
}

#[component]
fn OrphanageDetails(orphanage: OrphanageDto, mut gallery: Signal<ImageGallery>) -> Element {
    let config = use_context::<AppContext>().config;

    let image_count = orphanage.images.len();
    let active_src = gallery
        .read()
        .active_image(&orphanage.images)
        .map(|image| config.image_url(&image.path));
    let position = orphanage.position();
    let directions = directions_url(position);
    let name = orphanage.name.clone();

    rsx!(
        Title { "{name} | Happy" }
        div { class: "card bg-base-100 shadow-sm w-full max-w-3xl h-fit overflow-hidden",
            if let Some(src) = active_src {
                figure {
                    img {
                        class: "w-full h-80 object-cover",
                        src: "{src}",
                        alt: "{name}",
                    }
                }
            }
            div { class: "grid grid-cols-6 gap-4 px-8 pt-6",
                {orphanage.images.iter().enumerate().map(|(index, image)| {
                    let key = image.id;
                    let src = config.image_url(&image.path);
                    let alt = format!("{} - {}", name, image.id);
                    let state = if gallery.read().is_active(index, image_count) {
                        "opacity-100 ring-2 ring-primary"
                    } else {
                        "opacity-60"
                    };

                    rsx! {
                        button {
                            key: "{key}",
                            r#type: "button",
                            class: "rounded-box overflow-hidden {state}",
                            onclick: move |_| {
                                gallery.write().select(index, image_count);
                            },
                            img {
                                class: "h-20 w-full object-cover",
                                src: "{src}",
                                alt: "{alt}",
                            }
                        }
                    }
                })}
            }
            div { class: "card-body px-8",
                h1 { class: "card-title text-4xl", "{name}" }
                p { class: "text-lg", "{orphanage.about}" }

                div { class: "rounded-box overflow-hidden border border-base-300 mt-8",
                    MapView {
                        center: position,
                        zoom: DETAIL_ZOOM,
                        markers: vec![MapMarker::new(orphanage.id, position)],
                        class: "h-72",
                    }
                    footer { class: "bg-base-200",
                        a {
                            class: "btn btn-ghost w-full",
                            href: "{directions}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon {
                                width: 16,
                                height: 16,
                                icon: FaGoogle
                            }
                            "Ver rotas no Google Maps"
                        }
                    }
                }

                div { class: "divider" }

                h2 { class: "text-2xl font-bold", "Instruções para visita" }
                p { class: "text-lg", "{orphanage.instructions}" }

                div { class: "grid grid-cols-2 gap-4 mt-6",
                    div { class: "alert alert-info alert-soft",
                        Icon {
                            width: 32,
                            height: 32,
                            icon: FaClock
                        }
                        span { "{orphanage.opening_hours}" }
                    }
                    WeekendOpeningBox { open_on_weekends: orphanage.open_on_weekends }
                }
            }
        }
    )
}
