//! Tasks widget data and deferred completion commits

use std::sync::Arc;

use futures::future::join_all;
use homeboard_api::{Task, TaskList};

use crate::error::CoreResult;
use crate::services::{CommitReport, QueryCache, ServiceContext, TaskRef};

const LISTS_KEY: &str = "tasks:lists";

pub struct TaskService {
    ctx: Arc<ServiceContext>,
    lists: QueryCache<String, Vec<TaskList>>,
    tasks: QueryCache<String, Vec<Task>>,
}

impl TaskService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let stale = ctx.settings.cache_stale;
        Self {
            ctx,
            lists: QueryCache::new(stale),
            tasks: QueryCache::new(stale),
        }
    }

    pub async fn task_lists(&self) -> CoreResult<Vec<TaskList>> {
        let ctx = Arc::clone(&self.ctx);
        self.lists
            .get_or_fetch(LISTS_KEY.to_string(), move || async move {
                let token = ctx.access_token().await?;
                Ok(ctx.apis.tasks.list_task_lists(&token).await?)
            })
            .await
    }

    /// Open tasks of `list_id`.
    pub async fn tasks(&self, list_id: &str) -> CoreResult<Vec<Task>> {
        let ctx = Arc::clone(&self.ctx);
        let id = list_id.to_string();
        self.tasks
            .get_or_fetch(list_id.to_string(), move || async move {
                let token = ctx.access_token().await?;
                Ok(ctx.apis.tasks.list_tasks(&token, &id).await?)
            })
            .await
    }

    /// Complete every queued task concurrently.
    ///
    /// Individual failures land in the report; only a missing session fails the whole commit.
    pub async fn commit_completions(&self, refs: Vec<TaskRef>) -> CoreResult<CommitReport> {
        if refs.is_empty() {
            return Ok(CommitReport::default());
        }

        let token = self.ctx.access_token().await?;
        let results = join_all(refs.iter().map(|task| {
            self.ctx
                .apis
                .tasks
                .complete_task(&token, &task.list_id, &task.task_id)
        }))
        .await;

        let mut report = CommitReport::default();
        for (task, result) in refs.into_iter().zip(results) {
            match result {
                Ok(_) => report.committed.push(task),
                Err(e) => {
                    log::warn!("Failed to complete task {}: {e}", task.task_id);
                    report.failed.push((task, e.to_string()));
                }
            }
        }

        let mut touched: Vec<&str> = report
            .committed
            .iter()
            .chain(report.failed.iter().map(|(task, _)| task))
            .map(|task| task.list_id.as_str())
            .collect();
        touched.sort_unstable();
        touched.dedup();
        for list_id in touched {
            self.tasks.invalidate(&list_id.to_string()).await;
        }

        log::info!(
            "Committed {} task completion(s), {} failed",
            report.committed.len(),
            report.failed.len()
        );
        Ok(report)
    }

    pub async fn invalidate(&self) {
        self.lists.invalidate_all().await;
        self.tasks.invalidate_all().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{mock_context, signed_out_context};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn commit_reports_partial_failure() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/tasks/lists/l1/tasks/ok"))
            .and(body_json(json!({ "status": "completed" })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/tasks/lists/l1/tasks/gone"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .expect(1)
            .mount(&server)
            .await;

        let svc = TaskService::new(mock_context(&server.uri()));
        let report = svc
            .commit_completions(vec![TaskRef::new("l1", "ok"), TaskRef::new("l1", "gone")])
            .await
            .unwrap();

        assert_eq!(report.committed, vec![TaskRef::new("l1", "ok")]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, TaskRef::new("l1", "gone"));
        assert!(!report.all_committed());
    }

    #[tokio::test]
    async fn commit_invalidates_list_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks/lists/l1/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{ "id": "t1", "title": "Milk" }]
            })))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "t1", "status": "completed"
            })))
            .mount(&server)
            .await;

        let svc = TaskService::new(mock_context(&server.uri()));
        assert_eq!(svc.tasks("l1").await.unwrap().len(), 1);
        assert_eq!(svc.tasks("l1").await.unwrap().len(), 1);

        svc.commit_completions(vec![TaskRef::new("l1", "t1")])
            .await
            .unwrap();
        svc.tasks("l1").await.unwrap();
    }

    #[tokio::test]
    async fn empty_commit_needs_no_session() {
        let svc = TaskService::new(signed_out_context());
        let report = svc.commit_completions(Vec::new()).await.unwrap();
        assert!(report.committed.is_empty());
        assert!(report.all_committed());
    }

    #[tokio::test]
    async fn commit_without_session_fails_whole() {
        let svc = TaskService::new(signed_out_context());
        let result = svc.commit_completions(vec![TaskRef::new("l1", "t1")]).await;
        assert!(matches!(result, Err(CoreError::AuthRequired)));
    }

    #[tokio::test]
    async fn task_lists_are_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks/users/@me/lists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{ "id": "l1", "title": "Groceries" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let svc = TaskService::new(mock_context(&server.uri()));
        let lists = svc.task_lists().await.unwrap();
        assert_eq!(lists[0].title, "Groceries");
        svc.task_lists().await.unwrap();
    }
}
