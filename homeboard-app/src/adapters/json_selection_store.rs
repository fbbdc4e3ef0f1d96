//! 选择存储
//!
//! 使用 JSON 文件存储各组件的选择（键值对），带内存缓存

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use homeboard_core::traits::SelectionStore;
use homeboard_core::{CoreError, CoreResult};
use tokio::fs;
use tokio::sync::Mutex;

type Values = BTreeMap<String, String>;

/// 基于 JSON 文件的选择存储
pub struct JsonSelectionStore {
    path: PathBuf,
    /// 内存缓存；`None` 表示尚未加载
    cache: Mutex<Option<Values>>,
}

impl JsonSelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    /// 从文件加载
    async fn load_from_file(&self) -> CoreResult<Values> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Values::new()),
            Err(e) => return Err(CoreError::SelectionStore(e.to_string())),
        };

        serde_json::from_str(&content).or_else(|e| {
            log::warn!(
                "Selection file {} is unreadable, starting empty: {e}",
                self.path.display()
            );
            Ok(Values::new())
        })
    }

    /// 保存到文件
    async fn save_to_file(&self, values: &Values) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::SelectionStore(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(values)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::SelectionStore(e.to_string()))
    }

    async fn update<F>(&self, mutate: F) -> CoreResult<()>
    where
        F: FnOnce(&mut Values) -> bool + Send,
    {
        let mut cache = self.cache.lock().await;
        let mut values = match cache.take() {
            Some(values) => values,
            None => self.load_from_file().await?,
        };

        let changed = mutate(&mut values);
        let result = if changed {
            self.save_to_file(&values).await
        } else {
            Ok(())
        };
        // 写盘失败时丢弃缓存，下次读取以文件为准
        *cache = result.is_ok().then_some(values);
        result
    }
}

#[async_trait]
impl SelectionStore for JsonSelectionStore {
    async fn get_raw(&self, key: &str) -> CoreResult<Option<String>> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load_from_file().await?);
        }
        Ok(cache.as_ref().and_then(|values| values.get(key).cloned()))
    }

    async fn set_raw(&self, key: &str, value: &str) -> CoreResult<()> {
        self.update(|values| {
            values.insert(key.to_string(), value.to_string()).as_deref() != Some(value)
        })
        .await
    }

    async fn remove(&self, key: &str) -> CoreResult<()> {
        self.update(|values| values.remove(key).is_some()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selections.json");

        let store = JsonSelectionStore::new(&path);
        assert!(store.get_raw("k").await.unwrap().is_none());
        store.set_raw("k", r#"{"id":"a","name":"A"}"#).await.unwrap();

        let reopened = JsonSelectionStore::new(&path);
        assert_eq!(
            reopened.get_raw("k").await.unwrap().as_deref(),
            Some(r#"{"id":"a","name":"A"}"#)
        );

        reopened.remove("k").await.unwrap();
        assert!(JsonSelectionStore::new(&path)
            .get_raw("k")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selections.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonSelectionStore::new(&path);
        assert!(store.get_raw("k").await.unwrap().is_none());
        store.set_raw("k", "v").await.unwrap();
        assert_eq!(store.get_raw("k").await.unwrap().as_deref(), Some("v"));
    }
}
