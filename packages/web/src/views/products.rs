use dioxus::prelude::*;
use ui::components::ProductCardView;
use ui::controllers::products::{EMPTY_HINT, EMPTY_TITLE};
use ui::controllers::{ListView, ProductListController};
use ui::use_portal;

use crate::Route;

/// Native confirmation dialog. Outside a browser there is nobody to ask.
fn confirm(question: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(question).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("Auto-confirming: {}", question);
        true
    }
}

#[component]
pub fn Products() -> Element {
    let ctx = use_portal();
    let mut view = use_signal(|| ListView::Loading);

    let load_ctx = ctx.clone();
    use_effect(move || {
        let controller = ProductListController::new(load_ctx.clone());
        spawn(async move {
            view.set(controller.load().await);
        });
    });

    let ondelete = use_hook(move || {
        Callback::new(move |id: i64| {
            let controller = ProductListController::new(ctx.clone());
            spawn(async move {
                if let Some(next) = controller.delete(id, confirm).await {
                    view.set(next);
                }
            });
        })
    });

    let content = match view() {
        ListView::Loading => rsx! {
            p { class: "loading", "Loading products..." }
        },
        ListView::Empty => rsx! {
            div {
                class: "empty-state",
                h3 { "{EMPTY_TITLE}" }
                p { "{EMPTY_HINT}" }
                Link { to: Route::AddProduct {}, class: "btn btn--primary", "Add Product" }
            }
        },
        ListView::Grid(cards) => rsx! {
            div {
                class: "product-grid",
                for card in cards {
                    ProductCardView { key: "{card.id}", card: card.clone(), ondelete }
                }
            }
        },
        ListView::Error(message) => rsx! {
            div { class: "notice notice--error", role: "alert", "{message}" }
        },
    };

    rsx! {
        h2 { class: "page-title", "Products" }
        {content}
    }
}
