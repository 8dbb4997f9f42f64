use chrono::{DateTime, Utc};

use crate::helpers::time::now;

/// Bearer token issued by the gateway's token endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self { value: value.into(), expires_at }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// A token is usable while it has a value and its expiration lies in the future.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(now())
    }

    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        !self.value.is_empty() && self.expires_at > at
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.value)
    }
}
