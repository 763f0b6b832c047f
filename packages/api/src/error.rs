//! Error taxonomy for calls against the remote API.

use std::fmt;

/// Fallback shown when the server gives no usable message.
pub const SERVER_ERROR: &str = "Server error";

/// A required report field, in the order the form checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField {
    Title,
    Description,
    Address,
    Location,
}

impl fmt::Display for ReportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportField::Title => "title",
            ReportField::Description => "description",
            ReportField::Address => "address",
            ReportField::Location => "location",
        };
        f.write_str(name)
    }
}

/// A report draft was rejected before any request was built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(ReportField),
}

/// Failure of a report list/create call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

/// Failure of a signup/login call.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The server answered with an error status.
    #[error("{}", message.as_deref().unwrap_or(SERVER_ERROR))]
    Rejected { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("login response did not contain a token")]
    MissingToken,
}

impl AuthError {
    /// Text shown to the user after "Login failed: " / "Signup failed: ".
    pub fn user_message(&self) -> &str {
        match self {
            AuthError::Rejected {
                message: Some(message),
                ..
            } => message,
            _ => SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_with_message() {
        let err = AuthError::Rejected {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_rejected_without_message_falls_back() {
        let err = AuthError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), SERVER_ERROR);
        assert_eq!(AuthError::MissingToken.user_message(), SERVER_ERROR);
    }

    #[test]
    fn test_validation_display_names_field() {
        let err = ApiError::from(ValidationError::MissingField(ReportField::Address));
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "missing required field: address");
    }
}
