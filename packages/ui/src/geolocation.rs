//! One-shot device position query.
//!
//! Runs `navigator.geolocation.getCurrentPosition` through a `document::eval`
//! bridge and waits for the single reply. No retry; callers decide what text
//! to show.

use api::Coordinate;
use dioxus::prelude::*;
use serde::Deserialize;

/// Why no position could be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    Unavailable,
    #[error("location request timed out")]
    Timeout,
    #[error("geolocation is not supported")]
    Unsupported,
}

impl LocationError {
    /// Map a `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => LocationError::PermissionDenied,
            3 => LocationError::Timeout,
            0 => LocationError::Unsupported,
            _ => LocationError::Unavailable,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PositionReply {
    ok: bool,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    code: Option<u16>,
}

fn interpret(reply: PositionReply) -> Result<Coordinate, LocationError> {
    if !reply.ok {
        return Err(reply
            .code
            .map(LocationError::from_code)
            .unwrap_or(LocationError::Unavailable));
    }
    match (reply.latitude, reply.longitude) {
        (Some(lat), Some(lng)) => Coordinate::new(lat, lng).ok_or(LocationError::Unavailable),
        _ => Err(LocationError::Unavailable),
    }
}

const POSITION_JS: &str = r#"(function() {
    if (!navigator.geolocation) { dioxus.send({ ok: false, code: 0 }); return; }
    navigator.geolocation.getCurrentPosition(
        function(pos) {
            dioxus.send({ ok: true, latitude: pos.coords.latitude, longitude: pos.coords.longitude });
        },
        function(err) {
            dioxus.send({ ok: false, code: err.code });
        }
    );
})();"#;

/// Ask the platform for the current position, once.
///
/// The first call in a session may trigger a permission prompt.
pub async fn request_position() -> Result<Coordinate, LocationError> {
    let mut eval = document::eval(POSITION_JS);
    match eval.recv::<PositionReply>().await {
        Ok(reply) => interpret(reply),
        Err(e) => {
            tracing::warn!("Geolocation bridge failed: {:?}", e);
            Err(LocationError::Unavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(json: &str) -> PositionReply {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_success_reply() {
        let c = interpret(reply(r#"{"ok":true,"latitude":28.6,"longitude":77.1}"#)).unwrap();
        assert_eq!(c.latitude, 28.6);
        assert_eq!(c.longitude, 77.1);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            interpret(reply(r#"{"ok":false,"code":1}"#)),
            Err(LocationError::PermissionDenied)
        );
        assert_eq!(
            interpret(reply(r#"{"ok":false,"code":2}"#)),
            Err(LocationError::Unavailable)
        );
        assert_eq!(
            interpret(reply(r#"{"ok":false,"code":3}"#)),
            Err(LocationError::Timeout)
        );
        assert_eq!(
            interpret(reply(r#"{"ok":false,"code":0}"#)),
            Err(LocationError::Unsupported)
        );
        assert_eq!(interpret(reply(r#"{"ok":false}"#)), Err(LocationError::Unavailable));
    }

    #[test]
    fn test_incomplete_success_is_unavailable() {
        assert_eq!(
            interpret(reply(r#"{"ok":true,"latitude":28.6}"#)),
            Err(LocationError::Unavailable)
        );
    }
}
