//! 会话存储抽象 Trait

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::types::TokenRecord;

/// 会话存储 Trait
///
/// 平台实现:
/// - TUI / CLI: `SealedCookieSessionStore` (AES-GCM sealed file, no server-side database)
/// - Tests: [`InMemorySessionStore`]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 读取当前会话
    ///
    /// # Returns
    /// * `Ok(Some(record))` - 会话存在
    /// * `Ok(None)` - 未登录
    async fn get(&self) -> CoreResult<Option<TokenRecord>>;

    /// 写入会话（整体覆盖）
    async fn set(&self, record: &TokenRecord) -> CoreResult<()>;

    /// 删除会话
    async fn clear(&self) -> CoreResult<()>;
}

/// 内存会话存储
#[derive(Default)]
pub struct InMemorySessionStore {
    record: RwLock<Option<TokenRecord>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: TokenRecord) -> Self {
        Self {
            record: RwLock::new(Some(record)),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self) -> CoreResult<Option<TokenRecord>> {
        Ok(self.record.read().await.clone())
    }

    async fn set(&self, record: &TokenRecord) -> CoreResult<()> {
        *self.record.write().await = Some(record.clone());
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        *self.record.write().await = None;
        Ok(())
    }
}
