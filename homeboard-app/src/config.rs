//! 应用配置
//!
//! `<config_dir>/homeboard/config.toml`, every section optional. Environment variables override
//! the file so secrets can stay out of it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use homeboard_api::GOOGLE_TOKEN_URL;
use homeboard_core::services::{DashboardSettings, DEFAULT_REFRESH_MARGIN_SECS};
use homeboard_core::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

pub const ENV_CLIENT_ID: &str = "HOMEBOARD_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "HOMEBOARD_CLIENT_SECRET";
pub const ENV_SESSION_SECRET: &str = "HOMEBOARD_SESSION_SECRET";
pub const ENV_APOD_API_KEY: &str = "HOMEBOARD_APOD_API_KEY";
pub const ENV_DATA_DIR: &str = "HOMEBOARD_DATA_DIR";

const APP_DIR: &str = "homeboard";
const SESSION_FILE: &str = "session.cookie";
const SELECTIONS_FILE: &str = "selections.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeboardConfig {
    pub oauth: OAuthConfig,
    pub session: SessionConfig,
    pub weather: WeatherConfig,
    pub apod: ApodConfig,
    pub cache: CacheConfig,
    pub refresh: RefreshConfig,
    pub calendar: CalendarConfig,
    pub player: PlayerConfig,
    /// Override the default data directory.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            token_url: GOOGLE_TOKEN_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Secret the session cookie is sealed with.
    pub secret: String,
    pub refresh_margin_secs: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            refresh_margin_secs: DEFAULT_REFRESH_MARGIN_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        let defaults = DashboardSettings::default();
        Self {
            latitude: defaults.latitude,
            longitude: defaults.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApodConfig {
    pub api_key: String,
}

impl Default for ApodConfig {
    fn default() -> Self {
        Self {
            api_key: "DEMO_KEY".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub stale_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { stale_secs: 300 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Passive refetch interval
    pub interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { interval_secs: 600 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub days_ahead: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self { days_ahead: 7 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// External player executable, invoked with the track URL.
    pub command: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            command: "mpv".to_string(),
        }
    }
}

impl HomeboardConfig {
    /// Load from the default location, then apply environment overrides.
    pub fn load() -> CoreResult<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> CoreResult<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(CoreError::ValidationError(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )))
            }
        };

        let config = toml::from_str(&contents).map_err(|e| {
            CoreError::ValidationError(format!("Invalid config at {}: {e}", path.display()))
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply overrides; `lookup` resolves an environment variable name.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let set = |target: &mut String, name: &str| {
            if let Some(value) = lookup(name).filter(|v| !v.is_empty()) {
                *target = value;
            }
        };
        set(&mut self.oauth.client_id, ENV_CLIENT_ID);
        set(&mut self.oauth.client_secret, ENV_CLIENT_SECRET);
        set(&mut self.session.secret, ENV_SESSION_SECRET);
        set(&mut self.apod.api_key, ENV_APOD_API_KEY);

        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.is_empty()) {
            self.data_dir = Some(PathBuf::from(dir));
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.session.secret.trim().is_empty() {
            return Err(CoreError::ValidationError(format!(
                "session.secret is empty; set it in the config file or {ENV_SESSION_SECRET}"
            )));
        }
        if self.session.refresh_margin_secs < 0 {
            return Err(CoreError::ValidationError(
                "session.refresh_margin_secs must not be negative".to_string(),
            ));
        }
        if self.cache.stale_secs == 0 {
            return Err(CoreError::ValidationError(
                "cache.stale_secs must be positive".to_string(),
            ));
        }
        if self.refresh.interval_secs == 0 {
            return Err(CoreError::ValidationError(
                "refresh.interval_secs must be positive".to_string(),
            ));
        }
        if !(-90.0..=90.0).contains(&self.weather.latitude)
            || !(-180.0..=180.0).contains(&self.weather.longitude)
        {
            return Err(CoreError::ValidationError(
                "weather coordinates out of range".to_string(),
            ));
        }
        Ok(())
    }

    /// Runtime values handed to the widget services.
    pub fn settings(&self) -> DashboardSettings {
        DashboardSettings {
            cache_stale: Duration::from_secs(self.cache.stale_secs),
            calendar_days: self.calendar.days_ahead,
            latitude: self.weather.latitude,
            longitude: self.weather.longitude,
            apod_api_key: self.apod.api_key.clone(),
        }
    }

    /// Resolved data directory (override or platform default).
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    pub fn session_file(&self) -> PathBuf {
        self.data_dir().join(SESSION_FILE)
    }

    pub fn selections_file(&self) -> PathBuf {
        self.data_dir().join(SELECTIONS_FILE)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
