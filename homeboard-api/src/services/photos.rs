//! Google Photos Picker API

use reqwest::Client;
use serde_json::json;

use crate::client::{AuthedClient, MutateMethod};
use crate::error::{ApiError, Result};
use crate::types::{PickedMediaItem, PickerSession};

use super::{drain_authed, normalize_base};

pub const PHOTOS_PICKER_API_BASE: &str = "https://photospicker.googleapis.com/v1";

#[derive(Debug, Clone)]
pub struct PhotosPickerApi {
    client: AuthedClient,
    base_url: String,
}

impl PhotosPickerApi {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, PHOTOS_PICKER_API_BASE)
    }

    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            client: AuthedClient::new(http, "photos"),
            base_url: normalize_base(base_url),
        }
    }

    /// Start a picking session; the user completes it at `picker_uri`.
    pub async fn create_session(&self, token: &str) -> Result<PickerSession> {
        let url = format!("{}/sessions", self.base_url);
        self.client
            .authed_mutate(&url, token, MutateMethod::Post, Some(&json!({})))
            .await?
            .ok_or_else(|| ApiError::ParseError {
                service: self.client.service().to_string(),
                detail: "empty session response".to_string(),
            })
    }

    pub async fn get_session(&self, token: &str, session_id: &str) -> Result<PickerSession> {
        let url = format!(
            "{}/sessions/{}",
            self.base_url,
            urlencoding::encode(session_id)
        );
        self.client.authed_get(&url, token).await
    }

    /// Media items the user picked in `session_id`.
    pub async fn list_media_items(
        &self,
        token: &str,
        session_id: &str,
    ) -> Result<Vec<PickedMediaItem>> {
        let url = format!("{}/mediaItems", self.base_url);
        let query = [("sessionId", session_id.to_string())];
        drain_authed(&self.client, &url, token, &query).await
    }
}
