use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowLeft, FaLocationDot};
use dioxus_free_icons::Icon;

use crate::client::router::Route;

/// Narrow side rail shown on the detail and registration pages.
#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside {
            class: "fixed inset-y-0 left-0 w-24 bg-primary text-primary-content flex flex-col items-center justify-between py-8",
            Link {
                to: Route::OrphanagesMap {},
                class: "btn btn-ghost btn-square",
                Icon {
                    width: 32,
                    height: 32,
                    icon: FaLocationDot
                }
            }
            footer {
                button {
                    r#type: "button",
                    class: "btn btn-square btn-secondary",
                    onclick: move |_| navigator().go_back(),
                    Icon {
                        width: 20,
                        height: 20,
                        icon: FaArrowLeft
                    }
                }
            }
        }
    }
}

/// Page layout with the [`Sidebar`] on the left.
#[component]
pub fn SidebarLayout(children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen flex",
            Sidebar {}
            main { class: "flex-1 ml-24 py-16 px-4 flex justify-center",
                {children}
            }
        }
    }
}
