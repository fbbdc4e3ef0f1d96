#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `AppStateBuilder`, `AppState::from_config` and the file adapters.

use std::sync::Arc;

use async_trait::async_trait;
use homeboard_api::TokenGrant;
use homeboard_app::{AppState, AppStateBuilder, HomeboardConfig};
use homeboard_core::error::{CoreError, CoreResult};
use homeboard_core::traits::{InMemorySelectionStore, InMemorySessionStore, TokenRefresher};
use homeboard_core::types::{Selection, SelectionKey, SessionStatus};

const TEST_SECRET: &str = "test-session-secret";

// ===== Mock Implementations =====

struct StaticRefresher;

#[async_trait]
impl TokenRefresher for StaticRefresher {
    async fn refresh(&self, _refresh_token: &str) -> CoreResult<TokenGrant> {
        Ok(TokenGrant {
            access_token: "ya29.fresh".into(),
            expires_in: 3600,
            refresh_token: None,
            scope: None,
            token_type: Some("Bearer".into()),
        })
    }
}

fn grant() -> TokenGrant {
    TokenGrant {
        access_token: "ya29.first".into(),
        expires_in: 3600,
        refresh_token: Some("1//refresh".into()),
        scope: None,
        token_type: Some("Bearer".into()),
    }
}

fn test_config(dir: &tempfile::TempDir) -> HomeboardConfig {
    let mut config = HomeboardConfig::default();
    config.session.secret = TEST_SECRET.into();
    config.data_dir = Some(dir.path().to_path_buf());
    config
}

// ===== Builder =====

#[test]
fn build_fails_without_session_store() {
    let result = AppStateBuilder::new()
        .selection_store(Arc::new(InMemorySelectionStore::new()))
        .token_refresher(Arc::new(StaticRefresher))
        .build();
    match result {
        Err(CoreError::ValidationError(msg)) => assert!(msg.contains("session_store")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected ValidationError"),
    }
}

#[test]
fn build_fails_without_refresher() {
    let result = AppStateBuilder::new()
        .session_store(Arc::new(InMemorySessionStore::new()))
        .selection_store(Arc::new(InMemorySelectionStore::new()))
        .build();
    assert!(matches!(result, Err(CoreError::ValidationError(_))));
}

#[tokio::test]
async fn built_state_starts_signed_out() {
    let state = AppStateBuilder::new()
        .session_store(Arc::new(InMemorySessionStore::new()))
        .selection_store(Arc::new(InMemorySelectionStore::new()))
        .token_refresher(Arc::new(StaticRefresher))
        .build()
        .unwrap();

    assert_eq!(state.startup_status().await.unwrap(), SessionStatus::SignedOut);
    assert!(matches!(
        state.calendar.upcoming_events().await,
        Err(CoreError::AuthRequired)
    ));
}

// ===== from_config =====

#[test]
fn from_config_rejects_missing_secret() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(&dir);
    config.session.secret.clear();
    assert!(matches!(
        AppState::from_config(&config),
        Err(CoreError::ValidationError(_))
    ));
}

#[tokio::test]
async fn session_and_selections_persist_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);

    {
        let state = AppState::from_config(&config).unwrap();
        state.token_manager.sign_in(grant()).await.unwrap();
        state
            .selections()
            .set(SelectionKey::TaskList, &Selection::new("list-1", "Groceries"))
            .await
            .unwrap();
    }

    assert!(config.session_file().exists());
    assert!(config.selections_file().exists());

    let restarted = AppState::from_config(&config).unwrap();
    assert!(matches!(
        restarted.startup_status().await.unwrap(),
        SessionStatus::Active { .. }
    ));
    assert_eq!(
        restarted.token_manager.access_token().await.unwrap(),
        "ya29.first"
    );
    assert_eq!(
        restarted.selections().get(SelectionKey::TaskList).await.unwrap(),
        Some(Selection::new("list-1", "Groceries"))
    );
}

#[tokio::test]
async fn legacy_selection_file_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    std::fs::write(
        config.selections_file(),
        r#"{ "homeboard.music.selectedPlaylist": "PL42" }"#,
    )
    .unwrap();

    let state = AppState::from_config(&config).unwrap();
    let selection = state
        .selections()
        .get(SelectionKey::Playlist)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(selection.id, "PL42");

    let on_disk = std::fs::read_to_string(config.selections_file()).unwrap();
    assert!(on_disk.contains(r#"{\"id\":\"PL42\",\"name\":\"PL42\"}"#));
}

#[tokio::test]
async fn sign_out_removes_cookie() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let state = AppState::from_config(&config).unwrap();

    state.token_manager.sign_in(grant()).await.unwrap();
    state.token_manager.sign_out().await.unwrap();

    assert!(!config.session_file().exists());
    assert_eq!(state.startup_status().await.unwrap(), SessionStatus::SignedOut);
}
