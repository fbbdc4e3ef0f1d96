//! Homeboard Core Library
//!
//! Provides the dashboard's platform-independent logic:
//! - Session tokens with a single-flight refresh gate (`TokenManager`)
//! - Keyed query cache with in-flight de-duplication (`QueryCache`)
//! - Persisted widget selections with legacy migration (`SelectionService`)
//! - Single-flight readiness guard for external integrations (`ReadyGuard`)
//! - Widget data services (calendar, tasks, media, info)
//!
//! Storage is abstracted through traits so the platform layer decides where sessions and
//! selections live.

pub mod crypto;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{DashboardSettings, ServiceContext};
pub use traits::{SelectionStore, SessionStore, TokenRefresher};
