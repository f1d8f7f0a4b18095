use dioxus::prelude::*;

use crate::controllers::ProductCard;

#[component]
pub fn ProductCardView(card: ProductCard, ondelete: EventHandler<i64>) -> Element {
    let id = card.id;

    rsx! {
        div {
            class: "product-card",
            img {
                class: "product-card__image",
                src: "{card.image_url}",
                alt: "{card.name}",
            }
            div {
                class: "product-card__body",
                h3 { class: "product-card__name", "{card.name}" }
                p { class: "product-card__price", "{card.price}" }
                p { "Quantity: {card.quantity}" }
                p { "Category: {card.category}" }
                if let Some(date) = &card.added_on {
                    p { class: "product-card__date", "Added on {date}" }
                }
            }
            button {
                class: "btn btn--danger",
                onclick: move |_| ondelete.call(id),
                "Delete"
            }
        }
    }
}
