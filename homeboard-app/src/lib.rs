//! Platform bootstrap for Homeboard.
//!
//! Provides `HomeboardConfig` (file + environment configuration), the storage adapters, and
//! `AppState` / `AppStateBuilder` (service container with adapter injection).

pub mod adapters;
pub mod config;

use std::sync::Arc;

use chrono::Duration;
use homeboard_api::{create_http_client, ApiSuite, OAuthTokenEndpoint};
use homeboard_core::error::{CoreError, CoreResult};
use homeboard_core::services::{
    CalendarService, DashboardSettings, InfoService, MediaService, SelectionService,
    ServiceContext, TaskService, TokenManager, DEFAULT_REFRESH_MARGIN_SECS,
};
use homeboard_core::traits::{SelectionStore, SessionStore, TokenRefresher};
use homeboard_core::types::SessionStatus;

pub use adapters::{JsonSelectionStore, SealedCookieSessionStore};
pub use config::HomeboardConfig;

/// Platform-agnostic application state.
///
/// Every frontend constructs this once at startup via `AppStateBuilder` or
/// [`AppState::from_config`].
pub struct AppState {
    /// Service context (holds the storage adapters and APIs)
    pub ctx: Arc<ServiceContext>,
    /// Session / token manager
    pub token_manager: Arc<TokenManager>,
    /// Calendar zone data
    pub calendar: CalendarService,
    /// Tasks zone data and completion commits
    pub tasks: TaskService,
    /// Photos and music zone data
    pub media: MediaService,
    /// Weather and astronomy picture
    pub info: InfoService,
}

impl AppState {
    /// Wire the default adapters: sealed cookie session, JSON selections, Google OAuth.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if the configuration is invalid.
    pub fn from_config(config: &HomeboardConfig) -> CoreResult<Self> {
        config.validate()?;

        let http = create_http_client();
        let refresher = OAuthTokenEndpoint::new(
            http.clone(),
            config.oauth.token_url.clone(),
            config.oauth.client_id.clone(),
            config.oauth.client_secret.clone(),
        );

        log::info!("Using data directory {}", config.data_dir().display());

        AppStateBuilder::new()
            .session_store(Arc::new(SealedCookieSessionStore::new(
                config.session_file(),
                config.session.secret.clone(),
            )))
            .selection_store(Arc::new(JsonSelectionStore::new(config.selections_file())))
            .token_refresher(Arc::new(refresher))
            .apis(ApiSuite::with_client(&http))
            .config(config)
            .build()
    }

    /// Log and return the session status at startup.
    pub async fn startup_status(&self) -> CoreResult<SessionStatus> {
        let status = self.token_manager.status().await?;
        match &status {
            SessionStatus::SignedOut => log::info!("No session, sign-in required"),
            SessionStatus::ReauthRequired => {
                log::warn!("Stored session failed to refresh, sign-in required");
            }
            SessionStatus::Active { expires_at } => {
                log::info!("Session active, access token valid until {expires_at}");
            }
        }
        Ok(status)
    }

    /// Drop every cached read so the next fetch goes to the network.
    pub async fn invalidate_all(&self) {
        self.calendar.invalidate().await;
        self.tasks.invalidate().await;
        self.media.invalidate().await;
        self.info.invalidate().await;
    }

    pub fn selections(&self) -> &Arc<SelectionService> {
        &self.ctx.selections
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `session_store` — where the session record lives
/// - `selection_store` — where widget selections live
/// - `token_refresher` — how refresh tokens are exchanged
///
/// # Optional
/// - `apis` — defaults to `ApiSuite::new()` (production endpoints)
/// - `settings` / `refresh_margin` — defaults, or both taken from `config`
pub struct AppStateBuilder {
    session_store: Option<Arc<dyn SessionStore>>,
    selection_store: Option<Arc<dyn SelectionStore>>,
    token_refresher: Option<Arc<dyn TokenRefresher>>,
    apis: Option<ApiSuite>,
    settings: DashboardSettings,
    refresh_margin: Duration,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session_store: None,
            selection_store: None,
            token_refresher: None,
            apis: None,
            settings: DashboardSettings::default(),
            refresh_margin: Duration::seconds(DEFAULT_REFRESH_MARGIN_SECS),
        }
    }

    #[must_use]
    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    #[must_use]
    pub fn selection_store(mut self, store: Arc<dyn SelectionStore>) -> Self {
        self.selection_store = Some(store);
        self
    }

    #[must_use]
    pub fn token_refresher(mut self, refresher: Arc<dyn TokenRefresher>) -> Self {
        self.token_refresher = Some(refresher);
        self
    }

    #[must_use]
    pub fn apis(mut self, apis: ApiSuite) -> Self {
        self.apis = Some(apis);
        self
    }

    #[must_use]
    pub fn settings(mut self, settings: DashboardSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn refresh_margin(mut self, margin: Duration) -> Self {
        self.refresh_margin = margin;
        self
    }

    /// Take settings and refresh margin from `config`.
    #[must_use]
    pub fn config(self, config: &HomeboardConfig) -> Self {
        self.settings(config.settings())
            .refresh_margin(Duration::seconds(config.session.refresh_margin_secs))
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let session_store = self
            .session_store
            .ok_or_else(|| CoreError::ValidationError("session_store is required".to_string()))?;
        let selection_store = self.selection_store.ok_or_else(|| {
            CoreError::ValidationError("selection_store is required".to_string())
        })?;
        let token_refresher = self.token_refresher.ok_or_else(|| {
            CoreError::ValidationError("token_refresher is required".to_string())
        })?;
        let apis = self.apis.unwrap_or_default();

        let token_manager = Arc::new(TokenManager::with_margin(
            session_store,
            token_refresher,
            self.refresh_margin,
        ));
        let selections = Arc::new(SelectionService::new(selection_store));

        let ctx = Arc::new(ServiceContext::new(
            Arc::clone(&token_manager),
            apis,
            selections,
            self.settings,
        ));

        Ok(AppState {
            calendar: CalendarService::new(Arc::clone(&ctx)),
            tasks: TaskService::new(Arc::clone(&ctx)),
            media: MediaService::new(Arc::clone(&ctx)),
            info: InfoService::new(Arc::clone(&ctx)),
            token_manager,
            ctx,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
