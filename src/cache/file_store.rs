use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cache::store::TokenStore;
use crate::cache::token::AccessToken;
use crate::error::{RadeError, Result};
use crate::helpers::time::{format_expiration, parse_expiration};

static TOKEN_CACHE_OPERATION: &str = "token cache";

/// On-disk shape: `{"token": "...", "expireAt": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
struct CachedToken {
    token: String,
    #[serde(rename = "expireAt")]
    expire_at: String,
}

/// JSON file holding the last token. Writes replace the file atomically.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) else {
            return Ok(());
        };
        match fs::metadata(dir).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(cache_error(format!(
                "path exists but is not a directory: {}",
                dir.display()
            ))),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("creating token cache directory {}", dir.display());
                fs::create_dir_all(dir)
                    .await
                    .map_err(|err| cache_error(format!("failed to create directory {}: {}", dir.display(), err)))
            }
            Err(err) => Err(cache_error(err)),
        }
    }

    /// Unique per write, so concurrent savers never share a temp file.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(format!(".tmp-{}", Uuid::new_v4().simple()));
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Option<AccessToken> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) => {
                debug!("token cache {} not readable: {}", self.path.display(), err);
                return None;
            }
        };

        let cached: CachedToken = serde_json::from_str(&content)
            .inspect_err(|err| warn!("token cache {} is malformed: {}", self.path.display(), err))
            .ok()?;

        let Some(expires_at) = parse_expiration(&cached.expire_at) else {
            warn!("token cache {} has unreadable expireAt '{}'", self.path.display(), cached.expire_at);
            return None;
        };
        Some(AccessToken::new(cached.token, expires_at))
    }

    async fn save(&self, token: &AccessToken) -> Result<()> {
        self.ensure_parent_dir().await?;

        let body = serde_json::to_vec(&CachedToken {
            token: token.value().to_owned(),
            expire_at: format_expiration(&token.expires_at()),
        })
        .map_err(cache_error)?;

        let tmp = self.tmp_path();
        if let Err(err) = write_private(&tmp, &body).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(err);
        }
        // last writer wins: rename replaces whatever another save put there
        if let Err(err) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(cache_error(err));
        }

        debug!("token cache written to {}", self.path.display());
        Ok(())
    }
}

async fn write_private(path: &Path, body: &[u8]) -> Result<()> {
    fs::write(path, body).await.map_err(cache_error)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
            .await
            .map_err(cache_error)?;
    }
    Ok(())
}

fn cache_error(err: impl ToString) -> RadeError {
    RadeError::protocol(TOKEN_CACHE_OPERATION, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::{Duration, TimeZone, Utc};
    use tempfile::TempDir;

    #[tokio::test]
    async fn save_creates_directory_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/cache/token_cache.json");
        let store = FileTokenStore::new(&path);

        let expires_at = Utc.with_ymd_and_hms(2040, 1, 1, 0, 0, 0).unwrap();
        let token = AccessToken::new("tok-1", expires_at);
        store.save(&token).await.unwrap();

        let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["token"], "tok-1");
        assert!(raw["expireAt"].is_string());
        assert_eq!(std::fs::read_dir(path.parent().unwrap()).unwrap().count(), 1, "temp file left behind");

        assert_eq!(store.load().await, Some(token));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_saves_all_succeed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token_cache.json");
        let store = Arc::new(FileTokenStore::new(&path));

        for round in 0..20 {
            let saves: Vec<_> = (0..8)
                .map(|i| {
                    let store = store.clone();
                    let token = AccessToken::new(format!("tok-{round}-{i}"), Utc::now() + Duration::hours(1));
                    tokio::spawn(async move { store.save(&token).await })
                })
                .collect();
            for save in saves {
                save.await.unwrap().unwrap();
            }

            let token = store.load().await.expect("a complete token after concurrent saves");
            assert!(token.value().starts_with(&format!("tok-{round}-")), "{}", token.value());
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1, "temp files left behind");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn saved_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("token_cache.json"));
        store
            .save(&AccessToken::new("tok", Utc::now() + Duration::hours(1)))
            .await
            .unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[tokio::test]
    async fn load_treats_bad_content_as_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token_cache.json");
        let store = FileTokenStore::new(&path);

        assert!(store.load().await.is_none(), "missing file");

        for content in [
            "not json",
            "[]",
            r#"{"token": "abc"}"#,
            r#"{"expireAt": "2040-01-01 00:00:00"}"#,
            r#"{"token": "abc", "expireAt": "someday"}"#,
        ] {
            std::fs::write(&path, content).unwrap();
            assert!(store.load().await.is_none(), "content {content}");
        }
    }

    #[tokio::test]
    async fn load_accepts_gateway_style_timestamps() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token_cache.json");
        std::fs::write(&path, r#"{"token": "abc", "expireAt": "2040-01-01 10:00:00"}"#).unwrap();

        let token = FileTokenStore::new(&path).load().await.unwrap();
        assert_eq!(token.value(), "abc");
        assert_eq!(token.expires_at(), Utc.with_ymd_and_hms(2040, 1, 1, 10, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn save_fails_when_parent_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let store = FileTokenStore::new(blocker.join("token_cache.json"));
        let err = store
            .save(&AccessToken::new("tok", Utc::now() + Duration::hours(1)))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not a directory"), "{err}");
    }
}
