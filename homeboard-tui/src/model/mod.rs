//! Model 层：应用状态定义
//!
//! Model 层是应用状态的“唯一真相来源”，所有状态变更都通过 Update 层触发。
//!
//! 有模块结构：
//!     mod app;            // 主应用状态
//!     mod focus;          // 分区焦点控制器
//!     mod row_cursor;     // 分区内的分段行光标
//!     mod zone;           // 分区标识
//!     pub mod widgets;    // 各分区的数据与导航状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、两级导航
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ┌──────────┬──────────┬──────────┐
//!     │ Calendar │  Tasks   │  Photos  │     第一级：ZoneFocus
//!     ├──────────┼──────────┼──────────┤         方向键在分区间循环移动焦点，
//!     │  Music   │ Weather  │Astronomy │         Enter 激活，Esc 退出激活
//!     └──────────┴──────────┴──────────┘
//!
//!     ┌─ Tasks ──────────────────────────┐
//!     │ ▸ Groceries            (Header)  │     第二级：SegmentedRowCursor
//!     │     Groceries          (Submenu) │         激活后方向键在分区内的行间移动，
//!     │     Chores             (Submenu) │         不循环
//!     │ [ ] Milk               (Content) │
//!     │ [x] Eggs               (Content) │
//!     └──────────────────────────────────┘
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、数据状态
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     每个分区的数据都是 LoadState（Idle / Loading / Failed / Ready），
//!     加载失败只在分区内显示错误行，不影响导航。
//!
//!     数据流：
//!         分区请求数据 → WidgetCommand → backend 异步执行
//!             ↓
//!         DataMessage 通过 mpsc 回到主循环
//!             ↓
//!         update/data.rs 写回对应分区

mod app;
mod focus;
pub mod row_cursor;
pub mod widgets;
mod zone;

pub use app::App;
pub use focus::{KeyOutcome, ZoneFocus};
pub use zone::ZoneId;
