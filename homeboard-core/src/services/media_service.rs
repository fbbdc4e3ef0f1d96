//! Photos and music widget data

use std::sync::Arc;

use homeboard_api::{DriveFile, PickedMediaItem, PickerSession, Playlist, PlaylistItem};
use tokio::sync::Mutex;

use crate::error::{CoreError, CoreResult};
use crate::services::{QueryCache, ServiceContext};

/// Menu id of the Google Photos entry listed ahead of the Drive folders.
pub const GOOGLE_PHOTOS_ID: &str = "google-photos";

/// Mime type of that entry; neither a Drive folder nor an image.
pub const GOOGLE_PHOTOS_MIME: &str = "application/x-google-photos-picker";

pub struct MediaService {
    ctx: Arc<ServiceContext>,
    drive: QueryCache<String, Vec<DriveFile>>,
    picked: QueryCache<String, Vec<PickedMediaItem>>,
    playlists: QueryCache<String, Vec<Playlist>>,
    playlist_items: QueryCache<String, Vec<PlaylistItem>>,
    /// 当前 Picker 会话，整个进程共用一个
    picker_session_id: Mutex<Option<String>>,
}

impl MediaService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let stale = ctx.settings.cache_stale;
        Self {
            ctx,
            drive: QueryCache::new(stale),
            picked: QueryCache::new(stale),
            playlists: QueryCache::new(stale),
            playlist_items: QueryCache::new(stale),
            picker_session_id: Mutex::new(None),
        }
    }

    // ===== Drive =====

    /// Drive folders, led by the Google Photos entry.
    pub async fn photo_folders(&self) -> CoreResult<Vec<DriveFile>> {
        let ctx = Arc::clone(&self.ctx);
        let folders = self
            .drive
            .get_or_fetch("drive:folders".to_string(), move || async move {
                let token = ctx.access_token().await?;
                Ok(ctx.apis.drive.list_folders(&token).await?)
            })
            .await?;
        Ok(std::iter::once(google_photos_entry()).chain(folders).collect())
    }

    /// Images in a Drive folder, or the picked photos for [`GOOGLE_PHOTOS_ID`].
    pub async fn photos(&self, folder_id: &str) -> CoreResult<Vec<DriveFile>> {
        if folder_id == GOOGLE_PHOTOS_ID {
            return self.google_photos().await;
        }

        let ctx = Arc::clone(&self.ctx);
        let id = folder_id.to_string();
        self.drive
            .get_or_fetch(format!("drive:images:{folder_id}"), move || async move {
                let token = ctx.access_token().await?;
                Ok(ctx.apis.drive.list_images(&token, &id).await?)
            })
            .await
    }

    // ===== Photos Picker =====

    /// Photos picked in the current session. Until the user has picked, this fails with
    /// [`CoreError::NotReady`] naming the URI to pick at; asking again checks the same session.
    async fn google_photos(&self) -> CoreResult<Vec<DriveFile>> {
        let session = self.photo_picker_session().await?;
        if !session.media_items_set {
            return Err(CoreError::NotReady(format!(
                "Pick photos at {}, then open Google Photos again",
                session.picker_uri
            )));
        }
        let picked = self.picked_photos(&session.id).await?;
        Ok(picked.into_iter().map(DriveFile::from).collect())
    }

    /// The running picker session, or a new one when there is none or it expired.
    async fn photo_picker_session(&self) -> CoreResult<PickerSession> {
        let mut current = self.picker_session_id.lock().await;
        if let Some(id) = current.as_deref() {
            match self.picker_session(id).await {
                Ok(session) => return Ok(session),
                Err(e) if e.is_auth_required() => return Err(e),
                Err(e) => log::warn!("Picker session {id} is gone, starting a new one: {e}"),
            }
        }

        let session = self.start_photo_picker().await?;
        log::info!("Started photo picker session {}", session.id);
        *current = Some(session.id.clone());
        Ok(session)
    }

    /// Open a picker session; the user picks photos at `picker_uri` on another device.
    async fn start_photo_picker(&self) -> CoreResult<PickerSession> {
        let token = self.ctx.access_token().await?;
        Ok(self.ctx.apis.photos.create_session(&token).await?)
    }

    async fn picker_session(&self, session_id: &str) -> CoreResult<PickerSession> {
        let token = self.ctx.access_token().await?;
        Ok(self.ctx.apis.photos.get_session(&token, session_id).await?)
    }

    async fn picked_photos(&self, session_id: &str) -> CoreResult<Vec<PickedMediaItem>> {
        let ctx = Arc::clone(&self.ctx);
        let id = session_id.to_string();
        self.picked
            .get_or_fetch(session_id.to_string(), move || async move {
                let token = ctx.access_token().await?;
                Ok(ctx.apis.photos.list_media_items(&token, &id).await?)
            })
            .await
    }

    // ===== YouTube =====

    pub async fn playlists(&self) -> CoreResult<Vec<Playlist>> {
        let ctx = Arc::clone(&self.ctx);
        self.playlists
            .get_or_fetch("youtube:playlists".to_string(), move || async move {
                let token = ctx.access_token().await?;
                Ok(ctx.apis.youtube.list_playlists(&token).await?)
            })
            .await
    }

    pub async fn playlist_items(&self, playlist_id: &str) -> CoreResult<Vec<PlaylistItem>> {
        let ctx = Arc::clone(&self.ctx);
        let id = playlist_id.to_string();
        self.playlist_items
            .get_or_fetch(playlist_id.to_string(), move || async move {
                let token = ctx.access_token().await?;
                Ok(ctx.apis.youtube.list_playlist_items(&token, &id).await?)
            })
            .await
    }

    pub async fn invalidate(&self) {
        self.drive.invalidate_all().await;
        self.picked.invalidate_all().await;
        self.playlists.invalidate_all().await;
        self.playlist_items.invalidate_all().await;
    }
}

fn google_photos_entry() -> DriveFile {
    DriveFile {
        id: GOOGLE_PHOTOS_ID.to_string(),
        name: "Google Photos".to_string(),
        mime_type: GOOGLE_PHOTOS_MIME.to_string(),
        thumbnail_link: None,
        web_content_link: None,
    }
}
