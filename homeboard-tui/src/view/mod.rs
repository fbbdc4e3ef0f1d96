//! View 层：UI 渲染
//!
//!     view/mod.rs           render() 入口，返回各分区的屏幕区域（供鼠标命中测试）
//!     view/layout.rs        标题栏 + 3×2 分区网格 + 状态栏
//!     view/theme.rs         颜色与样式
//!     view/components/      分区边框、行列表、登录提示、状态栏
//!     view/widgets/         各分区的内容渲染
//!
//! 分区边框表达两级导航：
//!     普通边框      未获得焦点
//!     蓝色边框      获得焦点
//!     琥珀色粗边框  已激活（按键交给分区）

mod components;
mod layout;
mod theme;
mod widgets;

pub use layout::render;
