//! Portal context shared by every page.
//!
//! [`PortalContext`] bundles the three things a controller needs: the API client,
//! the persisted session and the configuration. It is created once by
//! [`PortalProvider`] and handed to controllers at construction; nothing reads
//! browser globals behind their back.

use std::sync::Arc;

use api::HttpClient;
use dioxus::prelude::*;
use store::{KeyValueStore, PortalConfig, Session, UserSession};

/// Storage backend of the current platform:
/// `localStorage` on the web, memory elsewhere.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// API origin used when the config leaves `base_url` empty outside a browser.
const NATIVE_DEFAULT_ORIGIN: &str = "http://localhost:5000";

#[derive(Clone)]
pub struct PortalContext<A = HttpClient, S = PlatformStore> {
    pub api: A,
    pub session: Session<S>,
    pub config: Arc<PortalConfig>,
}

impl<A, S: KeyValueStore> PortalContext<A, S> {
    pub fn new(api: A, store: S, config: PortalConfig) -> Self {
        Self {
            api,
            session: Session::new(store),
            config: Arc::new(config),
        }
    }

    pub fn current_user(&self) -> Option<UserSession> {
        self.session.load()
    }
}

impl PortalContext {
    /// Production context: HTTP client against the configured origin.
    pub fn from_config(config: PortalConfig) -> Self {
        let base_url = resolve_base_url(&config);
        tracing::info!("Portal API at {}", base_url);
        Self::new(HttpClient::new(&base_url), PlatformStore::new(), config)
    }
}

fn resolve_base_url(config: &PortalConfig) -> String {
    if !config.api.base_url.trim().is_empty() {
        return config.api.base_url.trim().to_string();
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    NATIVE_DEFAULT_ORIGIN.to_string()
}

/// Get the portal context provided by [`PortalProvider`].
pub fn use_portal() -> PortalContext {
    use_context::<PortalContext>()
}

/// Provider component that builds the portal context once per app.
#[component]
pub fn PortalProvider(config: PortalConfig, children: Element) -> Element {
    use_context_provider(|| PortalContext::from_config(config.clone()));

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_url_wins() {
        let config = PortalConfig::default().with_base_url(" https://shop.example ");
        assert_eq!(resolve_base_url(&config), "https://shop.example");
    }

    #[test]
    fn test_native_default_origin() {
        assert_eq!(resolve_base_url(&PortalConfig::default()), NATIVE_DEFAULT_ORIGIN);
    }
}
