//! Session / token manager
//!
//! Every remote read asks this manager for an access token. A token inside the refresh margin
//! is renewed first; concurrent readers share one refresh through a gate.

use std::sync::Arc;

use chrono::{Duration, Utc};
use homeboard_api::TokenGrant;
use homeboard_api::utils::log_sanitizer::mask_token;
use tokio::sync::Mutex;

use crate::error::{CoreError, CoreResult};
use crate::traits::{SessionStore, TokenRefresher};
use crate::types::{SessionStatus, TokenRecord};

/// Default refresh margin before expiry.
pub const DEFAULT_REFRESH_MARGIN_SECS: i64 = 60;

pub struct TokenManager {
    store: Arc<dyn SessionStore>,
    refresher: Arc<dyn TokenRefresher>,
    margin: Duration,
    /// 刷新闸门：同一时刻最多一个刷新请求
    refresh_gate: Mutex<()>,
}

impl TokenManager {
    pub fn new(store: Arc<dyn SessionStore>, refresher: Arc<dyn TokenRefresher>) -> Self {
        Self::with_margin(
            store,
            refresher,
            Duration::seconds(DEFAULT_REFRESH_MARGIN_SECS),
        )
    }

    pub fn with_margin(
        store: Arc<dyn SessionStore>,
        refresher: Arc<dyn TokenRefresher>,
        margin: Duration,
    ) -> Self {
        Self {
            store,
            refresher,
            margin,
            refresh_gate: Mutex::new(()),
        }
    }

    /// Start a session from a sign-in grant.
    pub async fn sign_in(&self, grant: TokenGrant) -> CoreResult<()> {
        let record = TokenRecord::from_grant(grant, Utc::now()).ok_or_else(|| {
            CoreError::ValidationError("sign-in grant carries no refresh token".to_string())
        })?;
        self.store.set(&record).await?;
        log::info!("Signed in, access token valid until {}", record.access_token_expires);
        Ok(())
    }

    /// Start a session from an existing refresh token by exchanging it once.
    pub async fn import_refresh_token(&self, refresh_token: &str) -> CoreResult<()> {
        let mut grant = self.refresher.refresh(refresh_token).await?;
        grant
            .refresh_token
            .get_or_insert_with(|| refresh_token.to_string());
        self.sign_in(grant).await
    }

    pub async fn sign_out(&self) -> CoreResult<()> {
        self.store.clear().await?;
        log::info!("Signed out");
        Ok(())
    }

    pub async fn status(&self) -> CoreResult<SessionStatus> {
        Ok(match self.store.get().await? {
            None => SessionStatus::SignedOut,
            Some(record) if record.is_failed() => SessionStatus::ReauthRequired,
            Some(record) => SessionStatus::Active {
                expires_at: record.access_token_expires,
            },
        })
    }

    /// A usable access token, refreshing first when it expires within the margin.
    ///
    /// Returns [`CoreError::AuthRequired`] when there is no session, when the session carries
    /// the refresh error marker, or when this refresh fails.
    pub async fn access_token(&self) -> CoreResult<String> {
        let record = self.usable_record().await?;
        if record.is_fresh(Utc::now(), self.margin) {
            return Ok(record.access_token);
        }

        let _gate = self.refresh_gate.lock().await;

        // 等待期间可能已有其他调用者完成刷新
        let record = self.usable_record().await?;
        if record.is_fresh(Utc::now(), self.margin) {
            return Ok(record.access_token);
        }

        self.refresh(&record).await
    }

    async fn usable_record(&self) -> CoreResult<TokenRecord> {
        match self.store.get().await? {
            Some(record) if !record.is_failed() => Ok(record),
            _ => Err(CoreError::AuthRequired),
        }
    }

    async fn refresh(&self, record: &TokenRecord) -> CoreResult<String> {
        log::debug!(
            "Access token {} expires at {}, refreshing",
            mask_token(&record.access_token),
            record.access_token_expires
        );

        match self.refresher.refresh(record.refresh_token()).await {
            Ok(grant) => {
                let next = record.renewed(grant, Utc::now());
                self.store.set(&next).await?;
                log::info!(
                    "Access token refreshed, valid until {}",
                    next.access_token_expires
                );
                Ok(next.access_token)
            }
            Err(e) => {
                log::warn!("Access token refresh failed, sign-in required: {e}");
                if let Err(store_err) = self.store.set(&record.failed()).await {
                    log::error!("Failed to persist refresh error marker: {store_err}");
                }
                Err(CoreError::AuthRequired)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{CountingRefresher, FailingSessionStore};
    use crate::traits::InMemorySessionStore;
    use futures::future::join_all;

    fn record_expiring_in(secs: i64) -> TokenRecord {
        TokenRecord::new("access-old", "refresh-1", Utc::now() + Duration::seconds(secs))
    }

    fn build_manager(
        record: Option<TokenRecord>,
        refresher: Arc<CountingRefresher>,
    ) -> (TokenManager, Arc<InMemorySessionStore>) {
        let store = Arc::new(match record {
            Some(r) => InMemorySessionStore::with_record(r),
            None => InMemorySessionStore::new(),
        });
        (TokenManager::new(store.clone(), refresher), store)
    }

    #[tokio::test]
    async fn concurrent_stale_reads_refresh_once() {
        let refresher = Arc::new(CountingRefresher::with_delay(50));
        let (manager, store) = build_manager(Some(record_expiring_in(30)), refresher.clone());

        let tokens = join_all((0..5).map(|_| manager.access_token())).await;

        assert_eq!(refresher.calls(), 1);
        for token in tokens {
            assert_eq!(token.unwrap(), "access-1");
        }
        let stored = store.get().await.unwrap().unwrap();
        assert_eq!(stored.access_token, "access-1");
        assert_eq!(stored.refresh_token(), "refresh-1");
    }

    #[tokio::test]
    async fn fresh_token_is_not_refreshed() {
        let refresher = Arc::new(CountingRefresher::with_delay(0));
        let (manager, _) = build_manager(Some(record_expiring_in(120)), refresher.clone());

        let tokens = join_all((0..5).map(|_| manager.access_token())).await;

        assert_eq!(refresher.calls(), 0);
        assert!(tokens
            .iter()
            .all(|t| matches!(t, Ok(token) if token == "access-old")));
    }

    #[tokio::test]
    async fn refresh_failure_marks_session_terminal() {
        let refresher = Arc::new(CountingRefresher::failing());
        let (manager, store) = build_manager(Some(record_expiring_in(10)), refresher.clone());

        assert!(matches!(
            manager.access_token().await,
            Err(CoreError::AuthRequired)
        ));
        assert!(store.get().await.unwrap().unwrap().is_failed());

        // 终态：后续读取不再发起刷新
        assert!(matches!(
            manager.access_token().await,
            Err(CoreError::AuthRequired)
        ));
        assert_eq!(refresher.calls(), 1);
        assert_eq!(manager.status().await.unwrap(), SessionStatus::ReauthRequired);
    }

    #[tokio::test]
    async fn missing_session_requires_auth() {
        let refresher = Arc::new(CountingRefresher::with_delay(0));
        let (manager, _) = build_manager(None, refresher.clone());

        assert!(matches!(
            manager.access_token().await,
            Err(CoreError::AuthRequired)
        ));
        assert_eq!(manager.status().await.unwrap(), SessionStatus::SignedOut);
        assert_eq!(refresher.calls(), 0);
    }

    #[tokio::test]
    async fn sign_in_then_sign_out() {
        let refresher = Arc::new(CountingRefresher::with_delay(0));
        let (manager, _) = build_manager(None, refresher);

        manager
            .sign_in(TokenGrant {
                access_token: "first".into(),
                expires_in: 3600,
                refresh_token: Some("refresh-0".into()),
                scope: None,
                token_type: None,
            })
            .await
            .unwrap();
        assert_eq!(manager.access_token().await.unwrap(), "first");
        assert!(matches!(
            manager.status().await.unwrap(),
            SessionStatus::Active { .. }
        ));

        manager.sign_out().await.unwrap();
        assert_eq!(manager.status().await.unwrap(), SessionStatus::SignedOut);
    }

    #[tokio::test]
    async fn sign_in_without_refresh_token_is_rejected() {
        let refresher = Arc::new(CountingRefresher::with_delay(0));
        let (manager, _) = build_manager(None, refresher);

        let result = manager
            .sign_in(TokenGrant {
                access_token: "first".into(),
                expires_in: 3600,
                refresh_token: None,
                scope: None,
                token_type: None,
            })
            .await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
    }

    #[tokio::test]
    async fn imported_refresh_token_is_kept() {
        let refresher = Arc::new(CountingRefresher::with_delay(0));
        let (manager, store) = build_manager(None, refresher.clone());

        manager.import_refresh_token("1//imported").await.unwrap();

        let stored = store.get().await.unwrap().unwrap();
        assert_eq!(stored.access_token, "access-1");
        assert_eq!(stored.refresh_token(), "1//imported");
        assert_eq!(refresher.calls(), 1);
    }

    #[tokio::test]
    async fn store_errors_propagate() {
        let refresher = Arc::new(CountingRefresher::with_delay(0));
        let manager = TokenManager::new(Arc::new(FailingSessionStore), refresher);
        assert!(matches!(
            manager.access_token().await,
            Err(CoreError::SessionStore(_))
        ));
    }
}
