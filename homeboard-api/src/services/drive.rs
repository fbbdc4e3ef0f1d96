//! Google Drive v3 (folders and the images inside them)

use reqwest::Client;

use crate::client::AuthedClient;
use crate::error::Result;
use crate::types::{DRIVE_FOLDER_MIME, DriveFile};

use super::{drain_authed, normalize_base};

pub const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

const FOLDER_FIELDS: &str = "nextPageToken,files(id,name,mimeType)";
const IMAGE_FIELDS: &str = "nextPageToken,files(id,name,mimeType,thumbnailLink,webContentLink)";

#[derive(Debug, Clone)]
pub struct DriveApi {
    client: AuthedClient,
    base_url: String,
}

impl DriveApi {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, DRIVE_API_BASE)
    }

    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            client: AuthedClient::new(http, "drive"),
            base_url: normalize_base(base_url),
        }
    }

    pub async fn list_folders(&self, token: &str) -> Result<Vec<DriveFile>> {
        let url = format!("{}/files", self.base_url);
        let query = [
            (
                "q",
                format!("mimeType='{DRIVE_FOLDER_MIME}' and trashed=false"),
            ),
            ("fields", FOLDER_FIELDS.to_string()),
            ("orderBy", "name".to_string()),
        ];
        drain_authed(&self.client, &url, token, &query).await
    }

    /// Image files directly inside `folder_id`.
    pub async fn list_images(&self, token: &str, folder_id: &str) -> Result<Vec<DriveFile>> {
        let url = format!("{}/files", self.base_url);
        let query = [
            (
                "q",
                format!(
                    "'{}' in parents and mimeType contains 'image/' and trashed=false",
                    escape_query_literal(folder_id)
                ),
            ),
            ("fields", IMAGE_FIELDS.to_string()),
            ("orderBy", "name".to_string()),
        ];
        drain_authed(&self.client, &url, token, &query).await
    }
}

/// Escape a value for a single-quoted Drive query literal.
fn escape_query_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
