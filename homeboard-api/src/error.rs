use serde::{Deserialize, Serialize};

/// Unified error type for every remote call made by the fetch layer.
///
/// Each variant includes a `service` field identifying which collaborator produced the error
/// (`calendar`, `tasks`, `oauth`, ...), plus variant-specific context. All variants are
/// serializable for structured error reporting.
///
/// Nothing in this crate retries on its own. Transient failures surface to the caller and are
/// retried passively by the next scheduled refetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// The remote answered with a non-2xx status.
    ///
    /// `body` is read best-effort; a body that could not be read is stored as an empty string.
    Upstream {
        /// Service that produced the error.
        service: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body (possibly empty).
        body: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Service that produced the error.
        service: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Service that produced the error.
        service: String,
        /// Error details.
        detail: String,
    },

    /// Failed to parse the remote response, or pagination misbehaved.
    ParseError {
        /// Service that produced the error.
        service: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Service that produced the error.
        service: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// The request could not be built (bad base URL, missing identifier).
    InvalidRequest {
        /// Service that produced the error.
        service: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl ApiError {
    /// 是否为预期行为（远端拒绝、网络抖动等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Upstream { .. } | Self::NetworkError { .. } | Self::Timeout { .. }
        )
    }

    /// The remote rejected the bearer token (HTTP 401).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Upstream { status: 401, .. })
    }

    /// HTTP status for [`Upstream`](Self::Upstream) errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upstream {
                service,
                status,
                body,
            } => {
                if body.is_empty() {
                    write!(f, "[{service}] Upstream error: HTTP {status}")
                } else {
                    write!(f, "[{service}] Upstream error: HTTP {status}: {body}")
                }
            }
            Self::NetworkError { service, detail } => {
                write!(f, "[{service}] Network error: {detail}")
            }
            Self::Timeout { service, detail } => {
                write!(f, "[{service}] Request timeout: {detail}")
            }
            Self::ParseError { service, detail } => {
                write!(f, "[{service}] Parse error: {detail}")
            }
            Self::SerializationError { service, detail } => {
                write!(f, "[{service}] Serialization error: {detail}")
            }
            Self::InvalidRequest { service, detail } => {
                write!(f, "[{service}] Invalid request: {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_upstream_with_body() {
        let e = ApiError::Upstream {
            service: "calendar".to_string(),
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[calendar] Upstream error: HTTP 403: forbidden"
        );
    }

    #[test]
    fn display_upstream_without_body() {
        let e = ApiError::Upstream {
            service: "tasks".to_string(),
            status: 500,
            body: String::new(),
        };
        assert_eq!(e.to_string(), "[tasks] Upstream error: HTTP 500");
    }

    #[test]
    fn display_network_error() {
        let e = ApiError::NetworkError {
            service: "drive".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[drive] Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = ApiError::Timeout {
            service: "weather".to_string(),
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[weather] Request timeout: 30s elapsed");
    }

    #[test]
    fn display_parse_error() {
        let e = ApiError::ParseError {
            service: "youtube".to_string(),
            detail: "bad json".to_string(),
        };
        assert_eq!(e.to_string(), "[youtube] Parse error: bad json");
    }

    #[test]
    fn unauthorized_only_for_401() {
        let unauthorized = ApiError::Upstream {
            service: "calendar".into(),
            status: 401,
            body: String::new(),
        };
        let forbidden = ApiError::Upstream {
            service: "calendar".into(),
            status: 403,
            body: String::new(),
        };
        assert!(unauthorized.is_unauthorized());
        assert!(!forbidden.is_unauthorized());
        assert_eq!(forbidden.status(), Some(403));
    }

    #[test]
    fn expected_variants() {
        assert!(ApiError::Timeout {
            service: "t".into(),
            detail: "x".into(),
        }
        .is_expected());
        assert!(!ApiError::ParseError {
            service: "t".into(),
            detail: "x".into(),
        }
        .is_expected());
    }

    #[test]
    fn serialize_carries_code_tag() {
        let e = ApiError::Upstream {
            service: "tasks".to_string(),
            status: 404,
            body: "missing".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Upstream\""));
        assert!(json.contains("\"status\":404"));

        let back: ApiError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), e.to_string());
    }
}
