use http::StatusCode;
use serde_json::Value;

use crate::error::RadeError;

/// `message` field of a gateway error body, when the body is JSON and has one.
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_owned)
}

/// Map a non-success status into the error taxonomy.
pub fn classify_status(status: StatusCode, body: &str, operation: &str) -> RadeError {
    let code = status.as_u16();
    if status.is_client_error() {
        RadeError::Client {
            message: error_message(body).unwrap_or_else(|| format!("Client error: {code}")),
            status: code,
        }
    } else if status.is_server_error() {
        RadeError::Service {
            message: error_message(body).unwrap_or_else(|| format!("Server error: {code}")),
            status: code,
        }
    } else {
        RadeError::protocol(operation, format!("unexpected status {status}"))
    }
}
