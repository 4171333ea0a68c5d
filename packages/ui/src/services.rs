//! App-wide collaborators, shared with every page through Dioxus context.
//!
//! [`ServicesProvider`] builds one [`AppServices`] from the embedded
//! [`ClientConfig`] and pages fetch it with [`use_services`]. The store is
//! chosen per platform the same way for every page:
//!
//! - **Web** (WASM + `web` feature): `localStorage`
//! - **Native**: an in-memory map, lost on exit

use api::{ApiError, HttpClient};
use dioxus::prelude::*;
use store::ClientConfig;

use crate::browser::WebBrowser;
use crate::controllers::{DashboardController, LoginController, SignupController};

/// Base URL used by native builds when none is configured.
pub const NATIVE_DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Create the session store for the current platform.
pub fn make_store() -> PlatformStore {
    PlatformStore::default()
}

/// An empty configured URL means "wherever the page came from".
pub fn resolve_base_url(configured: &str) -> String {
    let configured = configured.trim();
    if !configured.is_empty() {
        return configured.to_string();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
        tracing::warn!("page origin unavailable, using {NATIVE_DEFAULT_BASE_URL}");
    }
    NATIVE_DEFAULT_BASE_URL.to_string()
}

#[derive(Clone, Debug)]
pub struct AppServices {
    pub api: HttpClient,
    pub store: PlatformStore,
    pub browser: WebBrowser,
    pub config: ClientConfig,
}

impl AppServices {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let base_url = resolve_base_url(&config.api.base_url);
        let api = HttpClient::new(&base_url)?;
        tracing::info!(base_url = %api.base_url(), "task API configured");
        Ok(Self {
            api,
            store: make_store(),
            browser: WebBrowser,
            config,
        })
    }

    pub fn login(&self) -> LoginController<HttpClient, PlatformStore, WebBrowser> {
        LoginController::new(self.api.clone(), self.store.clone(), self.browser)
    }

    pub fn signup(&self) -> SignupController<HttpClient, PlatformStore, WebBrowser> {
        SignupController::new(self.api.clone(), self.store.clone(), self.browser, &self.config)
    }

    pub fn dashboard(&self) -> DashboardController<HttpClient, PlatformStore, WebBrowser> {
        DashboardController::new(self.api.clone(), self.store.clone(), self.browser)
    }
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.api.base_url() == other.api.base_url()
    }
}

/// Access the services installed by [`ServicesProvider`].
pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

/// Build the services once and make them available to `children`.
/// An unusable API URL replaces the whole app with an error notice.
#[component]
pub fn ServicesProvider(config: ClientConfig, children: Element) -> Element {
    let services = use_hook(move || {
        AppServices::new(config).map_err(|err| {
            tracing::error!(%err, "cannot configure the task API");
            err.to_string()
        })
    });

    match services {
        Ok(services) => rsx! {
            ServicesScope { services, {children} }
        },
        Err(err) => rsx! {
            div { class: "page",
                div { class: "message message-error", "Configuration error: {err}" }
            }
        },
    }
}

#[component]
fn ServicesScope(services: AppServices, children: Element) -> Element {
    use_context_provider(move || services);
    rsx! { {children} }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_url_wins() {
        assert_eq!(
            resolve_base_url(" https://tasks.example.com/api "),
            "https://tasks.example.com/api"
        );
    }

    #[test]
    fn test_empty_url_falls_back_natively() {
        assert_eq!(resolve_base_url(""), NATIVE_DEFAULT_BASE_URL);
    }

    #[test]
    fn test_services_from_default_config() {
        let services = AppServices::new(ClientConfig::default()).unwrap();
        assert_eq!(services.api.base_url().as_str(), "http://localhost:8000/");
        assert!(services.store.is_empty());
    }

    #[test]
    fn test_bad_url_is_rejected() {
        let config = ClientConfig::new("not a url".to_string());
        assert!(AppServices::new(config).is_err());
    }
}
