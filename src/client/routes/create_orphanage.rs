use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::{MapMarker, MapView, SidebarLayout},
    context::AppContext,
    form::{DraftOrphanage, SelectedImage, SubmitStatus, TextField},
    map::{LatLng, DEFAULT_CENTER},
    router::Route,
    routes::FORM_ZOOM,
    task::use_lifetime_token,
};

#[component]
pub fn CreateOrphanage() -> Element {
    let ctx = use_context::<AppContext>();
    let token = use_lifetime_token();
    let mut draft = use_signal(DraftOrphanage::default);
    let mut status = use_signal(SubmitStatus::default);

    let previews = ctx.previews.clone();
    let onchange_images = move |evt: FormEvent| {
        let previews = previews.clone();

        async move {
            let mut selected = Vec::new();
            for file in evt.files() {
                let name = file.name();
                match file.read_bytes().await {
                    Ok(bytes) => {
                        selected.push(SelectedImage::new(name, file.content_type(), bytes.to_vec()))
                    }
                    Err(err) => tracing::warn!("Failed to read selected file {}: {:?}", name, err),
                }
            }

            // A cancelled picker yields no files and leaves the selection as is
            draft.write().select_images(selected, &previews);
        }
    };

    let api = ctx.api.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let token = token.clone();

        async move {
            if status.peek().is_submitting() {
                return;
            }
            status.set(SubmitStatus::Submitting);

            let form = draft.read().to_multipart();
            match token.guard(api.create_orphanage(form)).await {
                Some(Ok(())) => {
                    tracing::info!("Registered new orphanage");
                    navigator().push(Route::OrphanagesMap {});
                }
                Some(Err(err)) => {
                    tracing::error!("Failed to register orphanage: {}", err);
                    status.set(SubmitStatus::Failed(err.to_string()));
                }
                // The form was closed while the request was in flight
                None => (),
            }
        }
    };

    let (markers, preview_urls, open_on_weekends) = {
        let draft = draft.read();
        let markers: Vec<MapMarker> = draft
            .coordinates()
            .position()
            .map(|position| vec![MapMarker::new(0, position)])
            .unwrap_or_default();
        let preview_urls: Vec<String> = draft
            .images()
            .previews()
            .map(|preview| preview.as_str().to_string())
            .collect();

        (markers, preview_urls, draft.open_on_weekends())
    };
    let yes_class = if open_on_weekends { "btn-success" } else { "" };
    let no_class = if open_on_weekends { "" } else { "btn-error" };
    let submitting = status.read().is_submitting();
    let name = draft.read().text(TextField::Name).to_string();

    rsx!(
        Title { "Cadastrar orfanato | Happy" }
        SidebarLayout {
            form {
                class: "card bg-base-100 shadow-sm w-full max-w-3xl h-fit p-16 flex flex-col gap-10",
                onsubmit: onsubmit,

                fieldset { class: "fieldset gap-4",
                    legend { class: "fieldset-legend text-3xl w-full border-b border-base-300 pb-4 mb-4",
                        "Dados"
                    }

                    div { class: "rounded-box overflow-hidden border border-base-300",
                        MapView {
                            center: DEFAULT_CENTER,
                            zoom: FORM_ZOOM,
                            interactive: true,
                            markers: markers,
                            onpick: move |position: LatLng| {
                                draft.write().set_coordinates(position.lat, position.lng);
                            },
                            class: "h-72",
                        }
                        p { class: "text-center text-sm py-3 bg-base-200",
                            "Clique no mapa para adicionar a localização"
                        }
                    }

                    DraftTextInput { draft: draft, field: TextField::Name, label: "Nome" }
                    DraftTextInput {
                        draft: draft,
                        field: TextField::About,
                        label: "Sobre",
                        hint: "Máximo de 300 caracteres",
                        multiline: true,
                    }

                    div { class: "flex flex-col gap-2",
                        label { class: "label", r#for: "image[]", "Fotos" }
                        div { class: "grid grid-cols-5 gap-4",
                            {preview_urls.iter().map(|src| rsx! {
                                img {
                                    key: "{src}",
                                    class: "w-full h-24 object-cover rounded-box",
                                    src: "{src}",
                                    alt: "{name}",
                                }
                            })}
                            label {
                                r#for: "image[]",
                                class: "h-24 rounded-box border border-dashed border-primary flex items-center justify-center cursor-pointer text-primary",
                                Icon {
                                    width: 24,
                                    height: 24,
                                    icon: FaPlus
                                }
                            }
                        }
                        input {
                            id: "image[]",
                            class: "hidden",
                            r#type: "file",
                            multiple: true,
                            accept: "image/*",
                            onchange: onchange_images,
                        }
                    }
                }

                fieldset { class: "fieldset gap-4",
                    legend { class: "fieldset-legend text-3xl w-full border-b border-base-300 pb-4 mb-4",
                        "Visitação"
                    }

                    DraftTextInput {
                        draft: draft,
                        field: TextField::Instructions,
                        label: "Instruções",
                        multiline: true,
                    }
                    DraftTextInput {
                        draft: draft,
                        field: TextField::OpeningHours,
                        label: "Horário de atendimento",
                    }

                    div { class: "flex flex-col gap-2",
                        label { class: "label", "Atende fim de semana" }
                        div { class: "join w-full",
                            button {
                                r#type: "button",
                                class: "btn join-item flex-1 {yes_class}",
                                onclick: move |_| draft.write().set_open_on_weekends(true),
                                "Sim"
                            }
                            button {
                                r#type: "button",
                                class: "btn join-item flex-1 {no_class}",
                                onclick: move |_| draft.write().set_open_on_weekends(false),
                                "Não"
                            }
                        }
                    }
                }

                if let SubmitStatus::Failed(message) = status() {
                    div { role: "alert", class: "alert alert-error",
                        span { "Não foi possível cadastrar o orfanato: {message}" }
                    }
                }

                button {
                    r#type: "submit",
                    class: "btn btn-success btn-lg w-full",
                    disabled: submitting,
                    if submitting {
                        span { class: "loading loading-spinner" }
                    }
                    "Cadastrar"
                }
            }
        }
    )
}

/// Labelled input bound to one text field of the draft.
#[component]
fn DraftTextInput(
    mut draft: Signal<DraftOrphanage>,
    field: TextField,
    label: &'static str,
    hint: Option<&'static str>,
    #[props(default)] multiline: bool,
) -> Element {
    let id = field.key();
    let value = draft.read().text(field).to_string();
    let maxlength = field.max_length().map(|len| len as i64);

    rsx!(
        div { class: "flex flex-col gap-2",
            label { class: "label", r#for: "{id}",
                "{label}"
                if let Some(hint) = hint {
                    span { class: "text-xs opacity-70", "{hint}" }
                }
            }
            if multiline {
                textarea {
                    id: "{id}",
                    class: "textarea w-full h-32",
                    maxlength: maxlength,
                    value: "{value}",
                    oninput: move |evt| draft.write().set_text(field, evt.value()),
                }
            } else {
                input {
                    id: "{id}",
                    class: "input w-full",
                    maxlength: maxlength,
                    value: "{value}",
                    oninput: move |evt| draft.write().set_text(field, evt.value()),
                }
            }
        }
    )
}
