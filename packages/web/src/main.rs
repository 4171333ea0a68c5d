use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use store::ClientConfig;
use ui::ServicesProvider;
use views::{Dashboard, Login, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/user")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Build-time configuration, see `taskboard.toml`.
const CONFIG_TOML: &str = include_str!("../taskboard.toml");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|err| {
        tracing::warn!(%err, file = ClientConfig::filename(), "invalid config, using defaults");
        ClientConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ServicesProvider { config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = ClientConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_routes() {
        assert_eq!(Route::Login {}.to_string(), "/");
        assert_eq!(Route::Signup {}.to_string(), "/signup");
        assert_eq!(Route::Dashboard {}.to_string(), "/user");
    }
}
