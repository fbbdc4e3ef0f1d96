//! Generic HTTP client tools
//!
//! Reusable request processing shared by every collaborator. Each collaborator builds its own
//! `RequestBuilder` (URL, query, body); this module sends it, logs it and classifies the
//! response.
//!
//! # Response classification
//! - transport failure → [`ApiError::Timeout`] / [`ApiError::NetworkError`]
//! - non-2xx → [`ApiError::Upstream`] with the body read best-effort
//! - 2xx → `(status, body)`; `204 No Content` yields an empty body

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `service` - service name (for logging and error context)
    /// * `method_name` - request method name (such as "GET", "PATCH", used for logs)
    /// * `url` - URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - 2xx status and body
    /// * `Err(ApiError::Upstream)` - non-2xx status
    /// * `Err(ApiError::NetworkError | ApiError::Timeout)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        service: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("[{service}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    service: service.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    service: service.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        let status_code = status.as_u16();
        log::debug!("[{service}] Response Status: {status_code}");

        if !status.is_success() {
            // 错误响应体读取失败不影响错误本身
            let body = response.text().await.unwrap_or_default();
            log::warn!(
                "[{service}] {method_name} {url} failed with HTTP {status_code}: {}",
                truncate_for_log(&body)
            );
            return Err(ApiError::Upstream {
                service: service.to_string(),
                status: status_code,
                body,
            });
        }

        if status_code == 204 {
            return Ok((status_code, String::new()));
        }

        let response_text = response.text().await.map_err(|e| ApiError::NetworkError {
            service: service.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!(
            "[{service}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ApiError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, service: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{service}] JSON parse failed: {e}");
            log::error!("[{service}] Raw response: {}", truncate_for_log(response_text));
            ApiError::ParseError {
                service: service.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Parse an optional JSON response: blank bodies (204, empty 200) are `None`.
    pub fn parse_optional_json<T>(response_text: &str, service: &str) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        if response_text.trim().is_empty() {
            return Ok(None);
        }
        Self::parse_json(response_text, service).map(Some)
    }
}
