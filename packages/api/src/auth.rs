//! Signup and login against the remote auth endpoints.

use serde::{Deserialize, Serialize};
use store::SessionToken;

use crate::client::{error_message, ApiClient};
use crate::error::AuthError;

#[derive(Debug, Serialize)]
struct SignupRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

/// Interpret a signup response. Errors carry the body's `message`.
pub(crate) fn signup_outcome(status: u16, body: &str) -> Result<(), AuthError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(AuthError::Rejected {
            status,
            message: error_message(body, "message"),
        })
    }
}

/// Interpret a login response. Errors carry the body's `error`.
pub(crate) fn login_outcome(status: u16, body: &str) -> Result<SessionToken, AuthError> {
    if !(200..300).contains(&status) {
        return Err(AuthError::Rejected {
            status,
            message: error_message(body, "error"),
        });
    }
    let response: LoginResponse =
        serde_json::from_str(body).map_err(|_| AuthError::MissingToken)?;
    response
        .token
        .and_then(SessionToken::new)
        .ok_or(AuthError::MissingToken)
}

impl ApiClient {
    /// Create an account. No client-side checks beyond what the form enforces.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        let response = self
            .http
            .post(self.url("/auth/signup"))
            .json(&SignupRequest {
                name,
                email,
                password,
            })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        signup_outcome(status, &body)
    }

    /// Log in and return the issued session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionToken, AuthError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        let token = login_outcome(status, &body)?;
        tracing::info!("Login succeeded");
        Ok(token)
    }
}
