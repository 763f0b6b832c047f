use dioxus::prelude::*;

use store::SafeSpotConfig;
use ui::{ConfigProvider, Navbar, SessionProvider};
use views::{Home, Login, ReportForm, Reports, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[layout(Shell)]
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/report")]
        ReportForm {},
        #[route("/reports")]
        Reports {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../safespot.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> SafeSpotConfig {
    SafeSpotConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", SafeSpotConfig::filename(), e);
        SafeSpotConfig::default()
    })
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ConfigProvider {
            config: load_config(),
            SessionProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Navbar above every page except the landing page.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {
            brand: rsx! { Link { to: Route::Home {}, "SafeSpot" } },
            Link { to: Route::ReportForm {}, "Report" }
            Link { to: Route::Reports {}, "Reports" }
            Link { to: Route::Login {}, "Login" }
            Link { to: Route::Signup {}, "Signup" }
        }
        Outlet::<Route> {}
    }
}
