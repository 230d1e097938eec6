use ratatui::style::{Color, Modifier, Style};
use taskdeck_domain::Priority;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;

pub const NORMAL_TEXT: Color = Color::White;
pub const DONE_TEXT: Color = Color::DarkGray;
pub const LABEL_TEXT: Color = Color::DarkGray;

pub const ACTIVE_FILTER_BG: Color = Color::Blue;
pub const ACTIVE_FILTER_FG: Color = Color::White;

pub const DRAGGING_TEXT: Color = Color::DarkGray;
pub const HOVER_TARGET: Color = Color::Cyan;

pub const PRIORITY_HIGH: Color = Color::LightRed;
pub const PRIORITY_MEDIUM: Color = Color::Yellow;
pub const PRIORITY_LOW: Color = Color::White;

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn done_text() -> Style {
    Style::default()
        .fg(DONE_TEXT)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn selected_item(selected: bool) -> Style {
    if selected {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

pub fn filter_button(active: bool) -> Style {
    if active {
        Style::default()
            .bg(ACTIVE_FILTER_BG)
            .fg(ACTIVE_FILTER_FG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(LABEL_TEXT)
    }
}

pub fn priority_style(priority: Priority) -> Style {
    let color = match priority {
        Priority::High => PRIORITY_HIGH,
        Priority::Medium => PRIORITY_MEDIUM,
        Priority::Low => PRIORITY_LOW,
    };
    Style::default().fg(color)
}

/// The "half opacity" treatment for the row being dragged.
pub fn dragging_text() -> Style {
    Style::default().fg(DRAGGING_TEXT).add_modifier(Modifier::DIM)
}

pub fn hover_target() -> Style {
    Style::default()
        .fg(HOVER_TARGET)
        .add_modifier(Modifier::UNDERLINED)
}
