use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCircleInfo;
use dioxus_free_icons::Icon;

#[component]
pub fn WeekendOpeningBox(open_on_weekends: bool) -> Element {
    let (class, message) = if open_on_weekends {
        ("alert-success", "Atendemos nos fins de semana")
    } else {
        ("alert-error", "Não atendemos nos fins de semana")
    };

    rsx!(
        div { class: "alert alert-soft {class}",
            Icon {
                width: 32,
                height: 32,
                icon: FaCircleInfo
            }
            span { "{message}" }
        }
    )
}
