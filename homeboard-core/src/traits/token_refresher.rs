//! Refresh-token exchange abstraction

use async_trait::async_trait;
use homeboard_api::{OAuthTokenEndpoint, TokenGrant};

use crate::error::CoreResult;

/// Exchanges a refresh token for a fresh access token.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    async fn refresh(&self, refresh_token: &str) -> CoreResult<TokenGrant>;
}

#[async_trait]
impl TokenRefresher for OAuthTokenEndpoint {
    async fn refresh(&self, refresh_token: &str) -> CoreResult<TokenGrant> {
        Ok(OAuthTokenEndpoint::refresh(self, refresh_token).await?)
    }
}
