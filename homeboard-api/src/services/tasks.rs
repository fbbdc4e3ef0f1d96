//! Google Tasks v1

use reqwest::Client;
use serde_json::json;

use crate::client::{AuthedClient, MutateMethod};
use crate::error::Result;
use crate::types::{Task, TaskList};

use super::{drain_authed, normalize_base};

pub const TASKS_API_BASE: &str = "https://tasks.googleapis.com/tasks/v1";

#[derive(Debug, Clone)]
pub struct TasksApi {
    client: AuthedClient,
    base_url: String,
}

impl TasksApi {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, TASKS_API_BASE)
    }

    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            client: AuthedClient::new(http, "tasks"),
            base_url: normalize_base(base_url),
        }
    }

    pub async fn list_task_lists(&self, token: &str) -> Result<Vec<TaskList>> {
        let url = format!("{}/users/@me/lists", self.base_url);
        drain_authed(&self.client, &url, token, &[]).await
    }

    /// Open tasks of one list.
    pub async fn list_tasks(&self, token: &str, list_id: &str) -> Result<Vec<Task>> {
        let url = format!(
            "{}/lists/{}/tasks",
            self.base_url,
            urlencoding::encode(list_id)
        );
        let query = [
            ("showCompleted", "false".to_string()),
            ("showHidden", "false".to_string()),
        ];
        drain_authed(&self.client, &url, token, &query).await
    }

    /// Mark a task completed. Returns the updated task when the API echoes it.
    pub async fn complete_task(
        &self,
        token: &str,
        list_id: &str,
        task_id: &str,
    ) -> Result<Option<Task>> {
        let url = format!(
            "{}/lists/{}/tasks/{}",
            self.base_url,
            urlencoding::encode(list_id),
            urlencoding::encode(task_id)
        );
        let body = json!({ "status": "completed" });
        self.client
            .authed_mutate(&url, token, MutateMethod::Patch, Some(&body))
            .await
    }
}
