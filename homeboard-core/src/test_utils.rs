//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use homeboard_api::{create_http_client, ApiSuite, TokenGrant};

use crate::error::{CoreError, CoreResult};
use crate::services::{DashboardSettings, SelectionService, ServiceContext, TokenManager};
use crate::traits::{
    InMemorySelectionStore, InMemorySessionStore, SessionStore, TokenRefresher,
};
use crate::types::TokenRecord;

// ===== CountingRefresher =====

/// Hands out `access-1`, `access-2`, ... and counts how often it was asked.
pub struct CountingRefresher {
    calls: AtomicUsize,
    delay: Duration,
    fail: bool,
}

impl CountingRefresher {
    pub fn with_delay(ms: u64) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delay: Duration::from_millis(ms),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_delay(0)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenRefresher for CountingRefresher {
    async fn refresh(&self, _refresh_token: &str) -> CoreResult<TokenGrant> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            return Err(CoreError::Api(homeboard_api::ApiError::Upstream {
                service: "oauth".into(),
                status: 400,
                body: r#"{"error":"invalid_grant"}"#.into(),
            }));
        }
        Ok(TokenGrant {
            access_token: format!("access-{n}"),
            expires_in: 3600,
            refresh_token: None,
            scope: None,
            token_type: Some("Bearer".into()),
        })
    }
}

// ===== FailingSessionStore =====

pub struct FailingSessionStore;

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn get(&self) -> CoreResult<Option<TokenRecord>> {
        Err(CoreError::SessionStore("disk unavailable".into()))
    }

    async fn set(&self, _record: &TokenRecord) -> CoreResult<()> {
        Err(CoreError::SessionStore("disk unavailable".into()))
    }

    async fn clear(&self) -> CoreResult<()> {
        Err(CoreError::SessionStore("disk unavailable".into()))
    }
}

// ===== 工厂方法 =====

fn build_context(record: Option<TokenRecord>, base_url: &str) -> Arc<ServiceContext> {
    let store = Arc::new(match record {
        Some(r) => InMemorySessionStore::with_record(r),
        None => InMemorySessionStore::new(),
    });
    let token_manager = Arc::new(TokenManager::new(
        store,
        Arc::new(CountingRefresher::failing()),
    ));
    let selections = Arc::new(SelectionService::new(Arc::new(
        InMemorySelectionStore::new(),
    )));
    Arc::new(ServiceContext::new(
        token_manager,
        ApiSuite::with_base_url(&create_http_client(), base_url),
        selections,
        DashboardSettings::default(),
    ))
}

/// Signed-in context whose APIs all point at `base_url` (a wiremock server).
pub fn mock_context(base_url: &str) -> Arc<ServiceContext> {
    let record = TokenRecord::new(
        "access-ok",
        "refresh-ok",
        Utc::now() + chrono::Duration::hours(1),
    );
    build_context(Some(record), base_url)
}

/// Signed-out context whose APIs all point at `base_url`.
pub fn signed_out_context_with_base(base_url: &str) -> Arc<ServiceContext> {
    build_context(None, base_url)
}

/// Signed-out context; authenticated calls fail before touching the network.
pub fn signed_out_context() -> Arc<ServiceContext> {
    signed_out_context_with_base("http://127.0.0.1:9")
}
