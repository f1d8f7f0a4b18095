//! Layout shared by the logged-in pages: welcome line, logout and navigation.

use dioxus::prelude::*;
use ui::controllers::DashboardController;
use ui::{nav_items, use_portal, Destination};

use crate::Route;

#[component]
pub fn PortalShell() -> Element {
    let ctx = use_portal();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let controller = DashboardController::new(ctx.clone());
    let Some(user) = controller.current_user() else {
        tracing::info!("No session, redirecting to login");
        nav.replace(Route::Login {});
        return rsx! {};
    };

    let path = route.to_string();
    let title = Destination::from_path(&path)
        .unwrap_or(Destination::Overview)
        .title();
    let greeting = user.greeting();
    let items: Vec<(Route, &'static str, &'static str)> = nav_items(&path)
        .into_iter()
        .map(|item| {
            let class = if item.active {
                "portal-nav__item portal-nav__item--active"
            } else {
                "portal-nav__item"
            };
            (Route::from(item.destination), item.destination.label(), class)
        })
        .collect();

    let handle_logout = move |_| {
        let to = DashboardController::new(ctx.clone()).logout();
        nav.replace(Route::from(to));
    };

    rsx! {
        document::Title { "{title}" }
        div {
            class: "portal",
            header {
                class: "portal__header",
                span { class: "portal__brand", "Seller Portal" }
                span { class: "portal__welcome", "{greeting}" }
                button {
                    class: "btn btn--link",
                    onclick: handle_logout,
                    "Logout"
                }
            }
            nav {
                class: "portal-nav",
                for (to, label, class) in items {
                    Link { key: "{label}", to, class, "{label}" }
                }
            }
            main {
                class: "portal__content",
                Outlet::<Route> {}
            }
        }
    }
}
