use dioxus::prelude::*;

#[component]
pub fn StatCard(title: String, value: String) -> Element {
    rsx! {
        div {
            class: "stat-card",
            h3 { class: "stat-card__title", "{title}" }
            p { class: "stat-card__value", "{value}" }
        }
    }
}
