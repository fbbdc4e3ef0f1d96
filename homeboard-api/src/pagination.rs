//! `nextPageToken` pagination drain

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Upper bound on pages fetched by a single drain.
pub const MAX_PAGES: usize = 1000;

/// One page of a Google list response.
///
/// Google names the item array differently per API (`items`, `files`, `mediaItems`); all of
/// them land in `items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new", alias = "files", alias = "mediaItems")]
    pub items: Vec<T>,
    #[serde(default, rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_page_token: None,
        }
    }

    pub fn with_next(items: Vec<T>, token: impl Into<String>) -> Self {
        Self {
            items,
            next_page_token: Some(token.into()),
        }
    }
}

/// Fetch every page and concatenate the items in page order.
///
/// `fetch` receives `None` for the first page and the previous page's token afterwards. An
/// empty token ends the drain like a missing one. Each call builds a fresh result, so a drain
/// can be restarted freely.
///
/// A token returned twice aborts with [`ApiError::ParseError`] instead of looping; so does a
/// drain that exceeds [`MAX_PAGES`].
pub async fn drain_pages<T, F, Fut>(service: &str, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut token: Option<String> = None;

    for page_no in 0..MAX_PAGES {
        let page = fetch(token.take()).await?;
        items.extend(page.items);

        match page.next_page_token.filter(|t| !t.is_empty()) {
            None => {
                log::debug!(
                    "[{service}] Drained {} page(s), {} item(s)",
                    page_no + 1,
                    items.len()
                );
                return Ok(items);
            }
            Some(next) => {
                if !seen.insert(next.clone()) {
                    return Err(ApiError::ParseError {
                        service: service.to_string(),
                        detail: format!("pagination token repeated after page {}", page_no + 1),
                    });
                }
                token = Some(next);
            }
        }
    }

    Err(ApiError::ParseError {
        service: service.to_string(),
        detail: format!("pagination exceeded {MAX_PAGES} pages"),
    })
}
