use http::StatusCode;
use tracing::{error, warn};

use crate::utils::constants::MAX_AUTH_RETRIES;

/// Retry budget for gateway calls. Only a 401 is retried, after a token
/// refresh; everything else is returned to the caller on the first attempt.
#[derive(Debug, Clone, Copy)]
pub struct RetrySettings {
    pub auth_retries: u32,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self { auth_retries: MAX_AUTH_RETRIES }
    }
}

impl RetrySettings {
    /// `attempt` counts retries already spent, starting at 0.
    pub fn should_retry(&self, status: StatusCode, attempt: u32) -> bool {
        if status != StatusCode::UNAUTHORIZED {
            return false;
        }
        if attempt < self.auth_retries {
            warn!("Attempt {}/{} rejected with {status}, refreshing token", attempt + 1, self.auth_retries + 1);
            true
        } else {
            error!("all {} attempts rejected with {status}", attempt + 1);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retries_unauthorized_once() {
        let retry = RetrySettings::default();
        assert!(retry.should_retry(StatusCode::UNAUTHORIZED, 0));
        assert!(!retry.should_retry(StatusCode::UNAUTHORIZED, 1));
    }

    #[test]
    fn other_statuses_are_not_retried() {
        let retry = RetrySettings::default();
        for status in [StatusCode::FORBIDDEN, StatusCode::INTERNAL_SERVER_ERROR, StatusCode::OK] {
            assert!(!retry.should_retry(status, 0), "{status}");
        }
    }
}
