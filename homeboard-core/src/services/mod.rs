//! 业务逻辑服务层

mod calendar_service;
mod info_service;
mod media_service;
mod query_cache;
mod ready_guard;
mod selection_service;
mod task_commit;
mod task_service;
mod token_manager;

pub use calendar_service::CalendarService;
pub use info_service::InfoService;
pub use media_service::{MediaService, GOOGLE_PHOTOS_ID};
pub use query_cache::QueryCache;
pub use ready_guard::ReadyGuard;
pub use selection_service::SelectionService;
pub use task_commit::{CommitReport, PendingCompletions, TaskRef};
pub use task_service::TaskService;
pub use token_manager::{TokenManager, DEFAULT_REFRESH_MARGIN_SECS};

use std::sync::Arc;
use std::time::Duration;

use homeboard_api::ApiSuite;

/// Values the widget services read at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    /// How long a cached read stays fresh
    pub cache_stale: Duration,
    /// Calendar look-ahead in days
    pub calendar_days: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub apod_api_key: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            cache_stale: Duration::from_secs(300),
            calendar_days: 7,
            latitude: 52.52,
            longitude: 13.41,
            apod_api_key: "DEMO_KEY".to_string(),
        }
    }
}

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的存储实现。
pub struct ServiceContext {
    /// 会话与访问令牌
    pub token_manager: Arc<TokenManager>,
    /// 远端 API 集合
    pub apis: ApiSuite,
    /// 持久化选择
    pub selections: Arc<SelectionService>,
    /// 运行参数
    pub settings: DashboardSettings,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        token_manager: Arc<TokenManager>,
        apis: ApiSuite,
        selections: Arc<SelectionService>,
        settings: DashboardSettings,
    ) -> Self {
        Self {
            token_manager,
            apis,
            selections,
            settings,
        }
    }

    /// 获取访问令牌（必要时先刷新）
    pub async fn access_token(&self) -> crate::error::CoreResult<String> {
        self.token_manager.access_token().await
    }
}
