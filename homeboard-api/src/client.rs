//! Authenticated fetch layer
//!
//! Every Google call goes through [`AuthedClient`]: it attaches the bearer token, maps non-2xx
//! responses to [`ApiError::Upstream`] and treats `204 No Content` as an empty success.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;

/// HTTP 连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// HTTP 请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建共享 HTTP Client
///
/// 构建失败时退回默认 Client（不带超时），不会 panic。
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .user_agent(concat!("homeboard/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            log::warn!("Failed to build configured HTTP client, using defaults: {e}");
            Client::new()
        })
}

/// Mutating HTTP verbs accepted by [`AuthedClient::authed_mutate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutateMethod {
    Post,
    Patch,
    Put,
    Delete,
}

impl MutateMethod {
    /// Upper-case verb, used for logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Thin wrapper over a shared `reqwest::Client`, scoped to one service name.
#[derive(Debug, Clone)]
pub struct AuthedClient {
    http: Client,
    service: String,
}

impl AuthedClient {
    pub fn new(http: Client, service: impl Into<String>) -> Self {
        Self {
            http,
            service: service.into(),
        }
    }

    /// Service name carried into logs and errors.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// GET `url` with `Authorization: Bearer <token>`.
    pub async fn authed_get<T: DeserializeOwned>(&self, url: &str, token: &str) -> Result<T> {
        let request = self.http.get(url).header(AUTHORIZATION, bearer(token));
        let (_, text) = HttpUtils::execute_request(request, &self.service, "GET", url).await?;
        HttpUtils::parse_json(&text, &self.service)
    }

    /// GET `url` with query pairs and a bearer token.
    pub async fn authed_get_query<T, Q>(&self, url: &str, token: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self
            .http
            .get(url)
            .query(query)
            .header(AUTHORIZATION, bearer(token));
        let (_, text) = HttpUtils::execute_request(request, &self.service, "GET", url).await?;
        HttpUtils::parse_json(&text, &self.service)
    }

    /// POST/PATCH/PUT/DELETE `url` with an optional JSON body.
    ///
    /// Returns `Ok(None)` for `204 No Content` or an empty body.
    pub async fn authed_mutate<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
        method: MutateMethod,
        body: Option<&serde_json::Value>,
    ) -> Result<Option<T>> {
        let mut request = match method {
            MutateMethod::Post => self.http.post(url),
            MutateMethod::Patch => self.http.patch(url),
            MutateMethod::Put => self.http.put(url),
            MutateMethod::Delete => self.http.delete(url),
        }
        .header(AUTHORIZATION, bearer(token));

        if let Some(body) = body {
            let payload =
                serde_json::to_string(body).map_err(|e| ApiError::SerializationError {
                    service: self.service.clone(),
                    detail: e.to_string(),
                })?;
            request = request.header(CONTENT_TYPE, "application/json").body(payload);
        }

        let (_, text) =
            HttpUtils::execute_request(request, &self.service, method.as_str(), url).await?;
        HttpUtils::parse_optional_json(&text, &self.service)
    }

    /// Unauthenticated GET for keyless collaborators, with the same error classification.
    pub async fn public_get<T, Q>(&self, url: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.http.get(url).query(query);
        let (_, text) = HttpUtils::execute_request(request, &self.service, "GET", url).await?;
        HttpUtils::parse_json(&text, &self.service)
    }

    /// POST an `application/x-www-form-urlencoded` body without a bearer token.
    pub async fn post_form<T, F>(&self, url: &str, form: &F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let request = self.http.post(url).form(form);
        let (_, text) = HttpUtils::execute_request(request, &self.service, "POST", url).await?;
        HttpUtils::parse_json(&text, &self.service)
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
