use dioxus::document::Title;
use dioxus::prelude::*;

/// Full screen page centring a single message, used where no map is shown.
#[component]
pub fn MessagePage(title: String, tone: Option<&'static str>, children: Element) -> Element {
    let tone: &str = if let Some(tone) = tone { tone } else { "" };

    rsx!(
        Title { "{title} | Happy" }
        div { class: "min-h-screen p-4 flex items-center justify-center bg-base-200",
            div { class: "card bg-base-100 shadow-sm max-w-xl w-full {tone}",
                div { class: "card-body items-center text-center gap-4",
                    h1 { class: "card-title text-2xl", "{title}" }
                    {children}
                }
            }
        }
    )
}
