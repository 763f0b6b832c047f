//! Configuration context and the API client hook built from it.

use api::ApiClient;
use dioxus::prelude::*;
use store::SafeSpotConfig;

use crate::session::use_session;

/// Make `config` available to every component below.
#[component]
pub fn ConfigProvider(config: SafeSpotConfig, children: Element) -> Element {
    use_context_provider(|| config.clone());

    rsx! {
        {children}
    }
}

pub fn use_config() -> SafeSpotConfig {
    use_context::<SafeSpotConfig>()
}

/// API client for the configured origin, carrying the current session token.
pub fn use_api() -> ApiClient {
    let config = use_config();
    let session = use_session();
    ApiClient::from_config(&config.api).with_token(session().token)
}
