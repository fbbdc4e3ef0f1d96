//! 选择存储抽象 Trait
//!
//! A string key/value store, the same shape as browser `localStorage`. Format handling
//! (JSON, legacy plain strings) lives in `SelectionService`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreResult;

#[async_trait]
pub trait SelectionStore: Send + Sync {
    /// Raw stored value for `key`.
    async fn get_raw(&self, key: &str) -> CoreResult<Option<String>>;

    async fn set_raw(&self, key: &str, value: &str) -> CoreResult<()>;

    async fn remove(&self, key: &str) -> CoreResult<()>;
}

/// 内存选择存储
#[derive(Default)]
pub struct InMemorySelectionStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SelectionStore for InMemorySelectionStore {
    async fn get_raw(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: &str) -> CoreResult<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> CoreResult<()> {
        self.values.write().await.remove(key);
        Ok(())
    }
}
