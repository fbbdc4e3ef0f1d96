//! Storage and collaborator abstraction traits

mod selection_store;
mod session_store;
mod token_refresher;

pub use selection_store::{InMemorySelectionStore, SelectionStore};
pub use session_store::{InMemorySessionStore, SessionStore};
pub use token_refresher::TokenRefresher;
