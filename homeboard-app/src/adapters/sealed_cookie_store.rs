//! 会话 Cookie 存储
//!
//! The whole session lives in one sealed value on disk; there is no server-side session table.
//! A value that cannot be opened (rotated secret, corruption) reads as "signed out".

use std::path::PathBuf;

use async_trait::async_trait;
use homeboard_core::crypto::{seal, unseal};
use homeboard_core::traits::SessionStore;
use homeboard_core::types::TokenRecord;
use homeboard_core::{CoreError, CoreResult};
use tokio::fs;
use tokio::sync::Mutex;

pub struct SealedCookieSessionStore {
    path: PathBuf,
    secret: String,
    /// 已解封的会话；`None` 表示尚未读取文件
    cache: Mutex<Option<Option<TokenRecord>>>,
}

impl SealedCookieSessionStore {
    pub fn new(path: impl Into<PathBuf>, secret: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            secret: secret.into(),
            cache: Mutex::new(None),
        }
    }

    async fn load_from_file(&self) -> CoreResult<Option<TokenRecord>> {
        let sealed = match fs::read_to_string(&self.path).await {
            Ok(sealed) => sealed,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CoreError::SessionStore(e.to_string())),
        };

        let plaintext = match unseal(&sealed, &self.secret) {
            Ok(plaintext) => plaintext,
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable session cookie at {}: {e}",
                    self.path.display()
                );
                return Ok(None);
            }
        };

        match serde_json::from_slice(&plaintext) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                log::warn!("Ignoring malformed session payload: {e}");
                Ok(None)
            }
        }
    }

    async fn ensure_parent_dir(&self) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::SessionStore(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for SealedCookieSessionStore {
    async fn get(&self) -> CoreResult<Option<TokenRecord>> {
        let mut cache = self.cache.lock().await;
        if let Some(record) = cache.as_ref() {
            return Ok(record.clone());
        }

        let record = self.load_from_file().await?;
        *cache = Some(record.clone());
        Ok(record)
    }

    async fn set(&self, record: &TokenRecord) -> CoreResult<()> {
        let json =
            serde_json::to_vec(record).map_err(|e| CoreError::SerializationError(e.to_string()))?;
        let sealed = seal(&json, &self.secret)?;

        let mut cache = self.cache.lock().await;
        self.ensure_parent_dir().await?;
        fs::write(&self.path, sealed)
            .await
            .map_err(|e| CoreError::SessionStore(e.to_string()))?;
        *cache = Some(Some(record.clone()));
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        let mut cache = self.cache.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(CoreError::SessionStore(e.to_string())),
        }
        *cache = Some(None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record() -> TokenRecord {
        let expires = Utc.with_ymd_and_hms(2030, 1, 1, 9, 40, 30).unwrap();
        TokenRecord::new("ya29.access", "1//refresh", expires)
    }

    #[tokio::test]
    async fn persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.cookie");

        let store = SealedCookieSessionStore::new(&path, "secret");
        assert!(store.get().await.unwrap().is_none());
        let saved = record();
        store.set(&saved).await.unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.starts_with("v1."));
        assert!(!on_disk.contains("ya29.access"));

        let reopened = SealedCookieSessionStore::new(&path, "secret");
        assert_eq!(reopened.get().await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn rotated_secret_reads_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.cookie");
        SealedCookieSessionStore::new(&path, "old")
            .set(&record())
            .await
            .unwrap();

        let store = SealedCookieSessionStore::new(&path, "new");
        assert!(store.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.cookie");
        let store = SealedCookieSessionStore::new(&path, "secret");

        store.clear().await.unwrap();
        store.set(&record()).await.unwrap();
        store.clear().await.unwrap();

        assert!(!path.exists());
        assert!(store.get().await.unwrap().is_none());
    }
}
