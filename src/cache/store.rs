use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::token::AccessToken;
use crate::error::Result;

/// Where the token manager keeps the last issued token between calls.
///
/// `load` never fails: anything unreadable is reported as "no token".
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Option<AccessToken>;
    async fn save(&self, token: &AccessToken) -> Result<()>;
}

/// Process-local store, handy for tests and short-lived embedders.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: RwLock<Option<AccessToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: AccessToken) -> Self {
        Self { inner: RwLock::new(Some(token)) }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Option<AccessToken> {
        self.inner.read().await.clone()
    }

    async fn save(&self, token: &AccessToken) -> Result<()> {
        *self.inner.write().await = Some(token.clone());
        Ok(())
    }
}
