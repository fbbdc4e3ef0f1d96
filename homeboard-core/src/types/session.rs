//! 会话相关类型定义

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use homeboard_api::TokenGrant;

/// Terminal marker left on a session whose refresh failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionError {
    RefreshAccessTokenError,
}

/// Persisted OAuth session.
///
/// The refresh token has no public accessor; only the token manager in this crate reads it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    /// Current access token
    pub access_token: String,
    refresh_token: String,
    /// Expiry of `access_token`
    pub access_token_expires: DateTime<Utc>,
    /// Set once a refresh failed; the session stays unusable until the next sign-in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<SessionError>,
}

impl std::fmt::Debug for TokenRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRecord")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("access_token_expires", &self.access_token_expires)
            .field("error", &self.error)
            .finish()
    }
}

impl TokenRecord {
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        access_token_expires: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            access_token_expires,
            error: None,
        }
    }

    /// Build the first record from a sign-in grant. `None` when the grant lacks a refresh token.
    pub fn from_grant(grant: TokenGrant, now: DateTime<Utc>) -> Option<Self> {
        let refresh_token = grant.refresh_token?;
        Some(Self::new(
            grant.access_token,
            refresh_token,
            now + Duration::seconds(grant.expires_in),
        ))
    }

    pub(crate) fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// Whether the access token is usable without refreshing: `now < expires - margin`.
    pub fn is_fresh(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        now < self.access_token_expires - margin
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Record after a successful refresh. The old refresh token is kept unless a new one came back.
    pub(crate) fn renewed(&self, grant: TokenGrant, now: DateTime<Utc>) -> Self {
        Self {
            access_token: grant.access_token,
            refresh_token: grant
                .refresh_token
                .unwrap_or_else(|| self.refresh_token.clone()),
            access_token_expires: now + Duration::seconds(grant.expires_in),
            error: None,
        }
    }

    /// Record after a failed refresh.
    pub(crate) fn failed(&self) -> Self {
        Self {
            error: Some(SessionError::RefreshAccessTokenError),
            ..self.clone()
        }
    }
}

/// Session state as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SessionStatus {
    SignedOut,
    Active { expires_at: DateTime<Utc> },
    ReauthRequired,
}
