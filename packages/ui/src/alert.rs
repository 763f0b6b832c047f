//! Blocking browser alerts.

use dioxus::prelude::*;

/// Show `message` in a `window.alert` dialog.
pub fn alert(message: &str) {
    // serde_json string output is a valid JS string literal
    let literal = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    document::eval(&format!("window.alert({literal});"));
}
