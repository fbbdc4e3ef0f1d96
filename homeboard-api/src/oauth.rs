//! OAuth 2.0 token endpoint (refresh grant only)
//!
//! The authorization-code exchange belongs to the sign-in flow and is not handled here.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::client::AuthedClient;
use crate::error::{ApiError, Result};
use crate::utils::log_sanitizer::mask_token;

pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Response of a successful token request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    /// Lifetime of `access_token` in seconds.
    pub expires_in: i64,
    /// Present only when the provider rotates the refresh token.
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Error payload some token endpoints return with a 200 status.
#[derive(Debug, Deserialize)]
struct TokenErrorBody {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TokenResponse {
    Grant(TokenGrant),
    Error(TokenErrorBody),
}

#[derive(Serialize)]
struct RefreshForm<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'static str,
    refresh_token: &'a str,
}

/// Client credentials plus the token URL.
#[derive(Clone)]
pub struct OAuthTokenEndpoint {
    client: AuthedClient,
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl std::fmt::Debug for OAuthTokenEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthTokenEndpoint")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl OAuthTokenEndpoint {
    pub fn new(
        http: Client,
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client: AuthedClient::new(http, "oauth"),
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Exchange a refresh token for a new access token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenGrant> {
        log::debug!(
            "[oauth] Refreshing access token with refresh token {}",
            mask_token(refresh_token)
        );

        let form = RefreshForm {
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            grant_type: "refresh_token",
            refresh_token,
        };

        match self
            .client
            .post_form::<TokenResponse, _>(&self.token_url, &form)
            .await?
        {
            TokenResponse::Grant(grant) => Ok(grant),
            TokenResponse::Error(err) => Err(ApiError::Upstream {
                service: self.client.service().to_string(),
                status: 200,
                body: match err.error_description {
                    Some(desc) => format!("{}: {desc}", err.error),
                    None => err.error,
                },
            }),
        }
    }
}
