//! Storage adapters for the core traits.
//!
//! - [`SealedCookieSessionStore`]: `SessionStore` as an AES-GCM sealed file
//! - [`JsonSelectionStore`]: `SelectionStore` as a JSON object file

mod json_selection_store;
mod sealed_cookie_store;

pub use json_selection_store::JsonSelectionStore;
pub use sealed_cookie_store::SealedCookieSessionStore;
