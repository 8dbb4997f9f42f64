use thiserror::Error;

use crate::utils::constants::INVALID_INPUT_CODE;

/// Every failure surfaced to callers of the SDK.
#[derive(Error, Debug)]
pub enum RadeError {
    /// Malformed card/IBAN/mobile/national code, raised before any network call.
    #[error("{message}")]
    InvalidInput { message: String, code: u16 },

    /// The token endpoint rejected the credentials.
    #[error("{message}")]
    Authentication { message: String, status: u16 },

    /// 4xx from the gateway, including a 401 that survived the retry.
    #[error("{message}")]
    Client { message: String, status: u16 },

    /// 5xx from the gateway.
    #[error("{message}")]
    Service { message: String, status: u16 },

    /// Transport faults and responses missing the expected shape.
    #[error("Error in {operation}: {message}")]
    Protocol { operation: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RadeError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        RadeError::InvalidInput { message: message.into(), code: INVALID_INPUT_CODE }
    }

    pub fn protocol(operation: impl Into<String>, message: impl ToString) -> Self {
        RadeError::Protocol { operation: operation.into(), message: message.to_string() }
    }

    /// Numeric code carried by the error: HTTP status for gateway faults,
    /// 422 for input faults, 0 when there is none.
    pub fn code(&self) -> u16 {
        match self {
            RadeError::InvalidInput { code, .. } => *code,
            RadeError::Authentication { status, .. }
            | RadeError::Client { status, .. }
            | RadeError::Service { status, .. } => *status,
            RadeError::Protocol { .. } | RadeError::Config(_) => 0,
        }
    }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RadeError::InvalidInput { .. } => "invalid_input",
            RadeError::Authentication { .. } => "authentication",
            RadeError::Client { .. } => "client",
            RadeError::Service { .. } => "service",
            RadeError::Protocol { .. } => "protocol",
            RadeError::Config(_) => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, RadeError>;
