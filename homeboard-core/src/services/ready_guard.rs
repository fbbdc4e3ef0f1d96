//! Single-flight "ensure ready" guard
//!
//! Replaces a process-wide "is it loaded yet" flag plus a list of waiting callbacks. Callers
//! await [`ReadyGuard::ensure_ready`]; the first one runs the initialisation and the rest wait
//! for it.

use std::future::Future;

use tokio::sync::OnceCell;

use crate::error::CoreResult;

pub struct ReadyGuard<T> {
    cell: OnceCell<T>,
}

impl<T> Default for ReadyGuard<T> {
    fn default() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }
}

impl<T> ReadyGuard<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `init` unless a previous call already succeeded, then hand out the ready value.
    ///
    /// While an initialisation is running, other callers wait for it. If it fails, its caller
    /// gets the error and the next caller tries again with its own `init`.
    pub async fn ensure_ready<F, Fut>(&self, init: F) -> CoreResult<&T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = CoreResult<T>>,
    {
        self.cell.get_or_try_init(init).await
    }

    pub fn is_ready(&self) -> bool {
        self.cell.initialized()
    }
}
