//! Persisted widget selections
//!
//! Values are stored as JSON `{"id": ..., "name": ...}`. Older builds stored the bare id as a
//! plain string; such values are migrated to JSON the first time they are read.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::SelectionStore;
use crate::types::{Selection, SelectionKey};

pub struct SelectionService {
    store: Arc<dyn SelectionStore>,
}

impl SelectionService {
    pub fn new(store: Arc<dyn SelectionStore>) -> Self {
        Self { store }
    }

    /// Stored selection for `key`, migrating a legacy plain-string value in place.
    pub async fn get(&self, key: SelectionKey) -> CoreResult<Option<Selection>> {
        let storage_key = key.storage_key();
        let Some(raw) = self.store.get_raw(storage_key).await? else {
            return Ok(None);
        };

        if let Ok(selection) = serde_json::from_str::<Selection>(&raw) {
            if !selection.id.is_empty() {
                return Ok(Some(selection));
            }
        }

        self.migrate_legacy(storage_key, &raw).await
    }

    pub async fn set(&self, key: SelectionKey, selection: &Selection) -> CoreResult<()> {
        let json = serde_json::to_string(selection)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        self.store.set_raw(key.storage_key(), &json).await
    }

    pub async fn clear(&self, key: SelectionKey) -> CoreResult<()> {
        self.store.remove(key.storage_key()).await
    }

    async fn migrate_legacy(&self, storage_key: &str, raw: &str) -> CoreResult<Option<Selection>> {
        // 旧格式可能是裸字符串，也可能是 JSON 字符串字面量
        let legacy = serde_json::from_str::<String>(raw).unwrap_or_else(|_| raw.to_string());
        let id = legacy.trim();

        if id.is_empty() || id.starts_with('{') {
            log::warn!("Discarding unreadable selection value for {storage_key}");
            self.store.remove(storage_key).await?;
            return Ok(None);
        }

        let selection = Selection::new(id, id);
        let json = serde_json::to_string(&selection)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        self.store.set_raw(storage_key, &json).await?;
        log::info!("Migrated legacy selection for {storage_key} to JSON");

        Ok(Some(selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::InMemorySelectionStore;

    fn service() -> (SelectionService, Arc<InMemorySelectionStore>) {
        let store = Arc::new(InMemorySelectionStore::new());
        (SelectionService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn set_then_get() {
        let (svc, _) = service();
        let selection = Selection::new("list-1", "Groceries");
        svc.set(SelectionKey::TaskList, &selection).await.unwrap();
        assert_eq!(
            svc.get(SelectionKey::TaskList).await.unwrap(),
            Some(selection)
        );
        assert_eq!(svc.get(SelectionKey::Playlist).await.unwrap(), None);
    }

    #[tokio::test]
    async fn legacy_plain_string_is_migrated_once() {
        let (svc, store) = service();
        let key = SelectionKey::PhotoFolder.storage_key();
        store.set_raw(key, "folder-42").await.unwrap();

        let selection = svc.get(SelectionKey::PhotoFolder).await.unwrap().unwrap();
        assert_eq!(selection, Selection::new("folder-42", "folder-42"));

        let raw = store.get_raw(key).await.unwrap().unwrap();
        assert_eq!(raw, r#"{"id":"folder-42","name":"folder-42"}"#);

        // 第二次读取走 JSON 分支
        let again = svc.get(SelectionKey::PhotoFolder).await.unwrap();
        assert_eq!(again, Some(selection));
    }

    #[tokio::test]
    async fn legacy_json_string_literal_is_migrated() {
        let (svc, store) = service();
        store
            .set_raw(SelectionKey::Playlist.storage_key(), r#""PL123""#)
            .await
            .unwrap();

        let selection = svc.get(SelectionKey::Playlist).await.unwrap().unwrap();
        assert_eq!(selection.id, "PL123");
    }

    #[tokio::test]
    async fn blank_or_broken_values_are_removed() {
        let (svc, store) = service();
        let key = SelectionKey::TaskList.storage_key();

        store.set_raw(key, "   ").await.unwrap();
        assert_eq!(svc.get(SelectionKey::TaskList).await.unwrap(), None);
        assert!(store.get_raw(key).await.unwrap().is_none());

        store.set_raw(key, r#"{"id":"#).await.unwrap();
        assert_eq!(svc.get(SelectionKey::TaskList).await.unwrap(), None);
        assert!(store.get_raw(key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_removes_value() {
        let (svc, _) = service();
        svc.set(SelectionKey::Playlist, &Selection::new("p", "Chill"))
            .await
            .unwrap();
        svc.clear(SelectionKey::Playlist).await.unwrap();
        assert_eq!(svc.get(SelectionKey::Playlist).await.unwrap(), None);
    }
}
