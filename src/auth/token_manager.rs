use std::sync::Arc;

use http::header::ACCEPT;
use http::StatusCode;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::cache::{AccessToken, TokenStore};
use crate::client::response::{classify_status, error_message};
use crate::config::Credentials;
use crate::error::{RadeError, Result};
use crate::helpers::time::parse_expiration_value;
use crate::observability::metrics::get_metrics;
use crate::utils::constants::TOKEN_ENDPOINT;

pub const TOKEN_OPERATION: &str = "token";
pub const INVALID_TOKEN_RESPONSE: &str = "Invalid response format from token endpoint";

static REASON_ABSENT: &str = "absent";
static REASON_EXPIRED: &str = "expired";
static REASON_REFRESH: &str = "refresh";

#[derive(Serialize)]
struct TokenRequest<'a> {
    username: &'a str,
    password: &'a str,
    scopes: &'a [String],
}

/// Hands out bearer tokens: reuses the stored one while it is valid and
/// authenticates against `{base_url}/token` otherwise.
pub struct TokenManager {
    credentials: Credentials,
    client: Client,
    store: Arc<dyn TokenStore>,
}

impl TokenManager {
    pub fn new(credentials: Credentials, store: Arc<dyn TokenStore>) -> Result<Self> {
        Self::with_client(credentials, store, Client::new())
    }

    /// Fails with a configuration error when any credential is missing.
    pub fn with_client(credentials: Credentials, store: Arc<dyn TokenStore>, client: Client) -> Result<Self> {
        credentials.validate()?;
        Ok(Self { credentials, client, store })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub async fn ensure_valid_token(&self) -> Result<AccessToken> {
        match self.store.load().await {
            Some(token) if token.is_valid() => {
                debug!("reusing cached token, expires at {}", token.expires_at());
                Ok(token)
            }
            Some(token) => {
                info!("cached token expired at {}, authenticating", token.expires_at());
                self.authenticate(REASON_EXPIRED).await
            }
            None => {
                info!("no cached token, authenticating");
                self.authenticate(REASON_ABSENT).await
            }
        }
    }

    /// Authenticate unconditionally and persist the new token.
    pub async fn refresh_token(&self) -> Result<AccessToken> {
        self.authenticate(REASON_REFRESH).await
    }

    async fn authenticate(&self, reason: &str) -> Result<AccessToken> {
        let metrics = get_metrics().await;
        metrics.token_fetches.with_label_values(&[reason]).inc();

        let token = self.request_token().await.inspect_err(|err| {
            error!(reason, error = %err, "token request failed");
            metrics.token_fetch_failures.with_label_values(&[err.kind()]).inc();
        })?;

        self.store.save(&token).await.inspect_err(|err| {
            error!(error = %err, "storing token failed");
            metrics.token_fetch_failures.with_label_values(&[err.kind()]).inc();
        })?;
        metrics.token_expiry_unix.set(token.expires_at().timestamp());

        info!(reason, "token issued, expires at {}", token.expires_at());
        Ok(token)
    }

    async fn request_token(&self) -> Result<AccessToken> {
        let url = format!("{}{}", self.credentials.base_url(), TOKEN_ENDPOINT);
        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(&TokenRequest {
                username: &self.credentials.username,
                password: &self.credentials.password,
                scopes: &self.credentials.scopes,
            })
            .send()
            .await
            .map_err(|e| RadeError::protocol(TOKEN_OPERATION, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RadeError::protocol(TOKEN_OPERATION, e))?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(RadeError::Authentication {
                message: error_message(&body).unwrap_or_else(|| format!("Client error: {}", status.as_u16())),
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(classify_status(status, &body, TOKEN_OPERATION));
        }
        parse_token_response(&body)
    }
}

/// `{"token": "...", "expires_at": "..."}`; anything else is rejected.
fn parse_token_response(body: &str) -> Result<AccessToken> {
    let json: Value = serde_json::from_str(body)
        .map_err(|e| RadeError::protocol(TOKEN_OPERATION, format!("{INVALID_TOKEN_RESPONSE}: {e}")))?;

    let token = json
        .get("token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty());
    let expires_at = json.get("expires_at").and_then(parse_expiration_value);

    match (token, expires_at) {
        (Some(token), Some(expires_at)) => Ok(AccessToken::new(token, expires_at)),
        _ => Err(RadeError::protocol(TOKEN_OPERATION, INVALID_TOKEN_RESPONSE)),
    }
}
