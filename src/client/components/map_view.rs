use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowRight, FaLocationDot, FaMinus, FaPlus};
use dioxus_free_icons::Icon;

use crate::client::{
    context::AppContext,
    map::{clamp_zoom, projection::TILE_SIZE, DragState, LatLng, Viewport},
    router::Route,
};

/// Size assumed until the container has been measured.
const FALLBACK_SIZE: (f64, f64) = (640.0, 280.0);

#[derive(Clone, Debug, PartialEq)]
pub struct MapMarker {
    pub id: i32,
    pub position: LatLng,
    /// Popup text shown when hovering the marker.
    pub label: Option<String>,
    pub link: Option<Route>,
}

impl MapMarker {
    pub fn new(id: i32, position: LatLng) -> Self {
        Self {
            id,
            position,
            label: None,
            link: None,
        }
    }

    pub fn with_popup(mut self, label: String, link: Route) -> Self {
        self.label = Some(label);
        self.link = Some(link);
        self
    }
}

/// Tile map with markers.
///
/// Non-interactive maps stay on `center` and `zoom`. Interactive maps start
/// there, pan by dragging, zoom with the on-map buttons, and report clicks
/// through `onpick`.
#[component]
pub fn MapView(
    center: LatLng,
    zoom: u8,
    #[props(default)] interactive: bool,
    #[props(default)] markers: Vec<MapMarker>,
    onpick: Option<EventHandler<LatLng>>,
    class: Option<&'static str>,
) -> Element {
    let tile_url = use_context::<AppContext>().tile_url();
    let mut size = use_signal(|| FALLBACK_SIZE);
    let mut camera = use_signal(|| (center, zoom));
    let mut drag = use_signal(DragState::default);

    let class: &str = if let Some(class) = class { class } else { "h-72" };
    let cursor = if interactive { "cursor-crosshair" } else { "" };

    let (view_center, view_zoom) = if interactive {
        camera()
    } else {
        (center, zoom)
    };
    let (width, height) = size();
    let viewport = Viewport::new(view_center, view_zoom, width, height);

    rsx! {
        div {
            class: "relative overflow-hidden select-none bg-base-300 {cursor} {class}",
            onmounted: move |evt: MountedEvent| async move {
                if let Ok(rect) = evt.get_client_rect().await {
                    size.set((rect.width(), rect.height()));
                }
            },
            onmousedown: move |evt: MouseEvent| {
                if interactive {
                    let point = evt.client_coordinates();
                    drag.write().press(point.x, point.y);
                }
            },
            onmousemove: move |evt: MouseEvent| {
                if !interactive || !drag.peek().is_pressed() {
                    return;
                }

                let point = evt.client_coordinates();
                let delta = drag.write().move_to(point.x, point.y);
                if let Some((dx, dy)) = delta {
                    let (center, zoom) = camera();
                    let moved = Viewport::new(center, zoom, width, height).panned(-dx, -dy);
                    camera.set((moved, zoom));
                }
            },
            onmouseup: move |_| drag.write().release(),
            onmouseleave: move |_| drag.write().release(),
            onclick: move |evt: MouseEvent| {
                if !interactive || !drag.write().take_click() {
                    return;
                }

                if let Some(onpick) = onpick {
                    // Tiles and markers ignore pointer events, so coordinates
                    // are relative to this container
                    let point = evt.element_coordinates();
                    onpick.call(viewport.to_latlng(point.x, point.y));
                }
            },

            {viewport.tiles().into_iter().map(|tile| {
                let key = tile.key();
                let src = tile_url.url(&tile);
                let left = tile.left;
                let top = tile.top;
                let tile_size = TILE_SIZE;

                rsx! {
                    img {
                        key: "{key}",
                        src: "{src}",
                        alt: "",
                        draggable: "false",
                        class: "absolute max-w-none pointer-events-none",
                        style: "left: {left}px; top: {top}px; width: {tile_size}px; height: {tile_size}px;",
                    }
                }
            })}

            {markers.iter().map(|marker| {
                let (x, y) = viewport.to_screen(marker.position);
                let key = marker.id;
                let pointer = if marker.label.is_some() { "" } else { "pointer-events-none" };
                let label = marker.label.clone();
                let link = marker.link.clone();

                rsx! {
                    div {
                        key: "{key}",
                        class: "absolute z-10 group text-primary {pointer}",
                        style: "left: {x}px; top: {y}px; transform: translate(-50%, -100%);",
                        Icon {
                            width: 36,
                            height: 36,
                            icon: FaLocationDot
                        }
                        if let Some(label) = label {
                            div {
                                class: "absolute bottom-full left-1/2 -translate-x-1/2 mb-1 hidden group-hover:flex items-center gap-3 bg-base-100 text-base-content rounded-box shadow-lg px-4 py-2 whitespace-nowrap",
                                span { class: "font-bold", "{label}" }
                                if let Some(link) = link {
                                    Link {
                                        to: link,
                                        class: "btn btn-primary btn-xs btn-square",
                                        Icon {
                                            width: 12,
                                            height: 12,
                                            icon: FaArrowRight
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            })}

            if interactive {
                div {
                    class: "absolute top-2 left-2 z-20 join join-vertical",
                    onmousedown: move |evt| evt.stop_propagation(),
                    onclick: move |evt| evt.stop_propagation(),
                    button {
                        r#type: "button",
                        class: "btn btn-sm btn-square join-item",
                        onclick: move |_| {
                            let (center, zoom) = camera();
                            camera.set((center, clamp_zoom(zoom as i16 + 1)));
                        },
                        Icon {
                            width: 12,
                            height: 12,
                            icon: FaPlus
                        }
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-sm btn-square join-item",
                        onclick: move |_| {
                            let (center, zoom) = camera();
                            camera.set((center, clamp_zoom(zoom as i16 - 1)));
                        },
                        Icon {
                            width: 12,
                            height: 12,
                            icon: FaMinus
                        }
                    }
                }
            }

            span {
                class: "absolute bottom-0 right-0 z-20 bg-base-100/70 px-1 text-[10px]",
                "© OpenStreetMap contributors"
            }
        }
    }
}
