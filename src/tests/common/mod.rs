// tests/common/mod.rs
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use httpmock::{Method::POST, Mock, MockServer};
use serde_json::json;

use crate::auth::TokenManager;
use crate::cache::{AccessToken, MemoryTokenStore, TokenStore};
use crate::config::{Credentials, ServiceConfig, SettingsConfig};
use crate::rade::RadeServices;

pub const USERNAME: &str = "09120000000";
pub const PASSWORD: &str = "secret";
pub const TRACE_ID: &str = "trace-0001";

pub fn scopes() -> Vec<String> {
    vec!["cardToIban".to_owned(), "shahkar".to_owned()]
}

pub fn credentials(server: &MockServer) -> Credentials {
    Credentials::new(USERNAME, PASSWORD, scopes(), server.base_url())
}

pub fn in_one_hour() -> DateTime<Utc> {
    Utc::now() + Duration::hours(1)
}

/// Gateway-style `expires_at`, one hour ahead.
pub fn expires_at_text() -> String {
    in_one_hour().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn valid_token(value: &str) -> AccessToken {
    AccessToken::new(value, in_one_hour())
}

pub fn expired_token(value: &str) -> AccessToken {
    AccessToken::new(value, Utc::now() - Duration::minutes(1))
}

pub fn memory_store(token: Option<AccessToken>) -> Arc<MemoryTokenStore> {
    Arc::new(token.map(MemoryTokenStore::with_token).unwrap_or_default())
}

pub fn token_manager(server: &MockServer, store: Arc<dyn TokenStore>) -> TokenManager {
    TokenManager::new(credentials(server), store).expect("token manager")
}

pub fn rade(server: &MockServer, store: Arc<dyn TokenStore>) -> RadeServices {
    let config = ServiceConfig { credentials: credentials(server), settings: SettingsConfig::default() };
    RadeServices::with_store(config, store).expect("rade services")
}

/// `POST /token` answering with `token` and an expiry one hour ahead.
pub async fn mock_token_endpoint<'a>(server: &'a MockServer, token: &str) -> Mock<'a> {
    let body = json!({ "token": token, "expires_at": expires_at_text() });
    server
        .mock_async(|when, then| {
            when.method(POST).path("/token");
            then.status(200).json_body(body);
        })
        .await
}
