//! Backend 层：业务服务
//!
//! Backend 层与 UI 解耦，通过 homeboard-app 的 `AppState` 调用各项服务。
//! 所有调用都在 tokio 运行时上异步执行，结果以 `DataMessage` 经 mpsc 回到主循环，
//! 主循环从不阻塞在网络请求上。
//!
//! 有模块结构：
//!     mod executor;   // Command → 异步任务
//!     mod player;     // 外部播放器（mpv 等）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     update 返回 Command
//!         ↓
//!     Backend::execute 在运行时上 spawn 任务
//!         ↓
//!     AppState 的服务（经 QueryCache 去重，TokenManager 取令牌）
//!         ↓
//!     DataMessage 发回主循环
//!         ↓
//!     update/data.rs 写回 Model

mod executor;
mod player;

pub use executor::Backend;
pub use player::ExternalPlayer;
