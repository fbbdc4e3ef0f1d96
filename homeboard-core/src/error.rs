//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use homeboard_api::ApiError;

/// Core layer error type
///
/// `Clone` because one fetch result may be shared by several cache subscribers.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No usable session: never signed in, or the last refresh failed
    #[error("Authentication required")]
    AuthRequired,

    /// Session storage error
    #[error("Session store error: {0}")]
    SessionStore(String),

    /// Selection storage error
    #[error("Selection store error: {0}")]
    SelectionStore(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Sealing / unsealing error
    #[error("Crypto error: {0}")]
    CryptoError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// An external integration could not be initialised
    #[error("Not ready: {0}")]
    NotReady(String),

    /// Remote error (converting from the fetch layer)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behavior (signed out, remote refusal, etc.); used for log levels.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::AuthRequired | Self::ValidationError(_) | Self::NotReady(_) => true,
            Self::Api(e) => e.is_expected(),
            _ => false,
        }
    }

    /// The user has to sign in again before anything else can be fetched.
    #[must_use]
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthRequired)
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
