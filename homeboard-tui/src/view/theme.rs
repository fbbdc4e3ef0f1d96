//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_active: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题（客厅电视一般是深色背景）
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(220, 220, 220),
            border: Color::Rgb(70, 70, 70),
            border_focused: Color::Rgb(90, 160, 230),
            border_active: Color::Rgb(250, 190, 60),
            selected_bg: Color::Rgb(40, 80, 120),
            selected_fg: Color::White,
            success: Color::Rgb(110, 200, 140),
            warning: Color::Rgb(230, 170, 90),
            error: Color::Rgb(240, 120, 110),
            muted: Color::Rgb(130, 130, 130),
        }
    }
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    ThemeColors::dark()
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 普通边框样式
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// 焦点边框样式
    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    /// 激活边框样式
    pub fn border_active() -> Style {
        Style::default()
            .fg(colors().border_active)
            .add_modifier(Modifier::BOLD)
    }

    /// 选中行样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(colors().fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(colors().fg)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    pub fn error() -> Style {
        Style::default().fg(colors().error)
    }

    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default().bg(colors().selected_bg).fg(Color::White)
    }

    /// 快捷键样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().warning)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键描述样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::White)
    }
}
