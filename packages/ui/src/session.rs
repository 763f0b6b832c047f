//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{SessionStore, SessionToken};

/// Session state shared through context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<SessionToken>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Platform-appropriate token storage.
///
/// - **Web** (WASM + `web` feature): `window.localStorage`
/// - **Native**: a process-wide in-memory store
pub fn make_session_store() -> impl SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        static STORE: std::sync::OnceLock<store::MemoryStore> = std::sync::OnceLock::new();
        STORE.get_or_init(store::MemoryStore::new).clone()
    }
}

/// Get the current session.
/// Returns a signal that updates on login and logout.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Store a freshly issued token and publish it to the context.
pub fn sign_in(session: &mut Signal<SessionState>, token: SessionToken) {
    make_session_store().save(&token);
    session.set(SessionState { token: Some(token) });
}

/// Provider component that owns the session state.
/// Wrap your app with this component to enable authenticated calls.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| SessionState {
        token: make_session_store().load(),
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
