//! All-settled fan-out merge
//!
//! Runs a set of fetches concurrently and keeps whatever succeeded. A failed member is logged
//! and skipped; it never fails the aggregate.

use futures::future::join_all;

use crate::error::{ApiError, Result};

/// Merged result of a fan-out.
#[derive(Debug, Clone)]
pub struct Aggregate<T> {
    /// Items from every successful member, sorted by the merge key.
    pub items: Vec<T>,
    /// Number of members that failed.
    pub failed: usize,
    /// Number of members attempted.
    pub total: usize,
    /// First failure, kept so a caller can report why everything failed.
    pub first_error: Option<ApiError>,
}

impl<T> Aggregate<T> {
    /// Every member failed (and there was at least one member).
    pub fn all_failed(&self) -> bool {
        self.total > 0 && self.failed == self.total
    }
}

/// Await every future, drop failures, merge the successes and sort them by `sort_key`.
///
/// The sort is stable, so items with equal keys keep their member order.
pub async fn settle_all<T, K, I, Fut, F>(service: &str, futures: I, sort_key: F) -> Aggregate<T>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnMut(&T) -> K,
    K: Ord,
{
    let results = join_all(futures).await;
    let total = results.len();

    let mut items = Vec::new();
    let mut failed = 0;
    let mut first_error = None;

    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(batch) => items.extend(batch),
            Err(e) => {
                log::warn!("[{service}] Skipping member {index} of fan-out: {e}");
                failed += 1;
                first_error.get_or_insert(e);
            }
        }
    }

    items.sort_by_key(sort_key);

    Aggregate {
        items,
        failed,
        total,
        first_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::Pin;

    type BoxedFetch = Pin<Box<dyn Future<Output = Result<Vec<(u32, &'static str)>>>>>;

    fn ok(items: Vec<(u32, &'static str)>) -> BoxedFetch {
        Box::pin(async move { Ok(items) })
    }

    fn failing() -> BoxedFetch {
        Box::pin(async {
            Err(ApiError::Upstream {
                service: "calendar".into(),
                status: 403,
                body: "denied".into(),
            })
        })
    }

    #[tokio::test]
    async fn partial_failure_merges_successes_sorted() {
        let fetches = vec![
            ok(vec![(30, "c"), (10, "a")]),
            failing(),
            ok(vec![(20, "b"), (40, "d")]),
        ];

        let merged = settle_all("calendar", fetches, |item| item.0).await;

        let keys: Vec<u32> = merged.items.iter().map(|i| i.0).collect();
        assert_eq!(keys, vec![10, 20, 30, 40]);
        assert_eq!(merged.failed, 1);
        assert_eq!(merged.total, 3);
        assert!(!merged.all_failed());
    }

    #[tokio::test]
    async fn every_member_failing_yields_empty() {
        let merged = settle_all("calendar", vec![failing(), failing()], |item| item.0).await;
        assert!(merged.items.is_empty());
        assert!(merged.all_failed());
        assert!(matches!(
            merged.first_error,
            Some(ApiError::Upstream { status: 403, .. })
        ));
    }

    #[tokio::test]
    async fn no_members_is_not_a_failure() {
        let merged = settle_all("calendar", Vec::<BoxedFetch>::new(), |item| item.0).await;
        assert!(merged.items.is_empty());
        assert!(!merged.all_failed());
    }

    #[tokio::test]
    async fn equal_keys_keep_member_order() {
        let merged = settle_all(
            "calendar",
            vec![ok(vec![(1, "first")]), ok(vec![(1, "second")])],
            |item| item.0,
        )
        .await;
        let names: Vec<&str> = merged.items.iter().map(|i| i.1).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
