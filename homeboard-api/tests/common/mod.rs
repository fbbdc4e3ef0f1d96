//! 共享测试工具和辅助函数

#![allow(dead_code)]

use homeboard_api::create_http_client;
use reqwest::Client;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "ya29.test-access-token";

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 启动 mock server 并返回共享 client
pub async fn start() -> (MockServer, Client) {
    (MockServer::start().await, create_http_client())
}

pub fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
}
