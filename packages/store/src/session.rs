//! # Session token persistence
//!
//! A successful login yields an opaque [`SessionToken`]. The UI keeps it in an
//! explicit session context and writes it through a [`SessionStore`] so it
//! survives page reloads within the browser session. Implementations live in
//! sibling modules ([`crate::memory`], and `crate::local` on the web).

use serde::{Deserialize, Serialize};

/// Key the token is stored under.
pub const SESSION_TOKEN_KEY: &str = "token";

/// Opaque credential issued by the auth endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token. Returns `None` for an empty or blank string.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Raw token never appears in debug output.
impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// Key-value storage for the session token.
pub trait SessionStore {
    /// Read the stored token, if any.
    fn load(&self) -> Option<SessionToken>;
    /// Persist the token, replacing any previous one.
    fn save(&self, token: &SessionToken);
    /// Forget the stored token.
    fn clear(&self);
}
