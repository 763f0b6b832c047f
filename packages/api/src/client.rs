//! HTTP client shared by the report and auth calls.

use store::config::ApiConfig;
use store::SessionToken;

/// Stateless handle on the remote API.
///
/// Cheap to clone; `reqwest::Client` shares its connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    pub(crate) http: reqwest::Client,
    base_url: String,
    token: Option<SessionToken>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Attach a session token to authenticated requests.
    pub fn with_token(mut self, token: Option<SessionToken>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Resolve an image reference returned by the API.
    ///
    /// Relative paths are served from the API origin; absolute URLs pass through.
    pub fn resolve_asset(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            self.url(path)
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// The auth endpoints disagree on the key (`error` for login, `message` for
/// signup), so the caller names it.
pub(crate) fn error_message(body: &str, key: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get(key)?
        .as_str()
        .map(str::to_string)
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("https://api.example.com/");
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.url("/report"), "https://api.example.com/report");
        assert_eq!(client.url("auth/login"), "https://api.example.com/auth/login");
    }

    #[test]
    fn test_resolve_asset() {
        let client = ApiClient::new("https://safespot-backend.onrender.com");
        assert_eq!(
            client.resolve_asset("/uploads/a.png"),
            "https://safespot-backend.onrender.com/uploads/a.png"
        );
        assert_eq!(
            client.resolve_asset("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_error_message_by_key() {
        let body = r#"{"error":"Invalid credentials","message":"ignored"}"#;
        assert_eq!(error_message(body, "error").as_deref(), Some("Invalid credentials"));
        assert_eq!(error_message(body, "message").as_deref(), Some("ignored"));
        assert_eq!(error_message(body, "missing"), None);
        assert_eq!(error_message("<html>", "error"), None);
        assert_eq!(error_message(r#"{"error":""}"#, "error"), None);
    }
}
