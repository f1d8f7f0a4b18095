use dioxus::prelude::*;

use store::PortalConfig;
use ui::{Destination, PortalProvider};
use views::{AddProduct, Login, Overview, PortalShell, Products, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/seller_login")]
    Login {},
    #[route("/seller_register")]
    Register {},
    #[layout(PortalShell)]
        #[route("/overview")]
        Overview {},
        #[route("/products")]
        Products {},
        #[route("/add_product")]
        AddProduct {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Login => Route::Login {},
            Destination::Register => Route::Register {},
            Destination::Overview => Route::Overview {},
            Destination::Products => Route::Products {},
            Destination::AddProduct => Route::AddProduct {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const PORTAL_TOML: &str = include_str!("../portal.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| PortalConfig::from_toml_or_default(PORTAL_TOML));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        PortalProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/seller_login`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}

/// Old `*.html` page links resolve to their route; anything else goes to login.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = format!("/{}", segments.join("/"));
    match Destination::from_path(&path) {
        Some(destination) => {
            nav.replace(Route::from(destination));
        }
        None => {
            tracing::warn!("Unknown path {}, redirecting to login", path);
            nav.replace(Route::Login {});
        }
    }
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destinations_match_route_paths() {
        for destination in [
            Destination::Login,
            Destination::Register,
            Destination::Overview,
            Destination::Products,
            Destination::AddProduct,
        ] {
            assert_eq!(Route::from(destination).to_string(), destination.path());
        }
    }

    #[test]
    fn test_embedded_config_parses() {
        let config = PortalConfig::from_toml(PORTAL_TOML).unwrap();
        assert_eq!(config, PortalConfig::default());
    }
}
