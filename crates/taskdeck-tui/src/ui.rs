use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use taskdeck_domain::{ListFilter, Task};

use crate::app::{App, AppMode};
use crate::forms::FormField;
use crate::input::InputState;
use crate::keybindings;
use crate::theme;
use crate::toast::Toast;

/// Screen regions recorded during rendering so mouse events can be resolved
/// against what is actually on screen.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub task_rows: Vec<(usize, Rect)>,
    pub filter_buttons: Vec<(ListFilter, Rect)>,
    pub toasts: Vec<Rect>,
    pub sidebar_toggle: Option<Rect>,
}

impl HitAreas {
    fn contains(rect: Rect, column: u16, row: u16) -> bool {
        column >= rect.x
            && column < rect.x.saturating_add(rect.width)
            && row >= rect.y
            && row < rect.y.saturating_add(rect.height)
    }

    pub fn task_row_at(&self, column: u16, row: u16) -> Option<usize> {
        self.task_rows
            .iter()
            .find(|(_, rect)| Self::contains(*rect, column, row))
            .map(|(index, _)| *index)
    }

    pub fn filter_button_at(&self, column: u16, row: u16) -> Option<ListFilter> {
        self.filter_buttons
            .iter()
            .find(|(_, rect)| Self::contains(*rect, column, row))
            .map(|(filter, _)| *filter)
    }

    pub fn toast_at(&self, column: u16, row: u16) -> Option<usize> {
        self.toasts
            .iter()
            .position(|rect| Self::contains(*rect, column, row))
    }

    pub fn over_sidebar_toggle(&self, column: u16, row: u16) -> bool {
        self.sidebar_toggle
            .is_some_and(|rect| Self::contains(rect, column, row))
    }
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let now = Instant::now();
    app.layout = HitAreas::default();

    let outer = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(app.sidebar.width()),
            Constraint::Min(0),
        ])
        .split(frame.area());

    render_sidebar(app, frame, outer[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(outer[1]);

    render_stats(app, frame, main[0]);
    render_filter_bar(app, frame, main[1]);
    render_task_list(app, frame, main[2], now);
    render_footer(app, frame, main[3]);

    if app.add_form.visible {
        render_add_task_popup(app, frame);
    }
    if app.edit_form.is_some() {
        render_edit_task_popup(app, frame);
    }

    render_toasts(app, frame);
}

fn render_sidebar(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::unfocused_border())
        .title(if app.sidebar.is_expanded() {
            " taskdeck "
        } else {
            ""
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The top row acts as the collapse/expand control.
    app.layout.sidebar_toggle = Some(Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    });

    let lines = if app.sidebar.is_expanded() {
        vec![
            Line::from(Span::styled("Tasks", theme::normal_text())),
            Line::from(""),
            Line::from(Span::styled("[b] collapse", theme::label_text())),
        ]
    } else {
        vec![Line::from(Span::styled("»", theme::label_text()))]
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_stats(app: &App, frame: &mut Frame, area: Rect) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    let panels = [
        ("Total", app.stats.total.current()),
        ("Completed", app.stats.completed.current()),
        ("Pending", app.stats.pending.current()),
        ("High Priority", app.stats.high_priority.current()),
    ];

    for ((label, value), tile) in panels.into_iter().zip(tiles.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::unfocused_border())
            .title(format!(" {} ", label));
        let number = Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(number, *tile);
    }
}

fn render_filter_bar(app: &mut App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(11),
            Constraint::Length(15),
            Constraint::Length(17),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(area);

    for (index, filter) in ListFilter::ALL_FILTERS.into_iter().enumerate() {
        let active = app.active_filter == Some(filter);
        let label = format!(" [{}] {} ", index + 1, filter.label());
        let button = Paragraph::new(Line::from(Span::styled(
            label,
            theme::filter_button(active),
        )))
        .block(Block::default().borders(Borders::ALL).border_style(
            if active {
                theme::focused_border()
            } else {
                theme::unfocused_border()
            },
        ));
        frame.render_widget(button, chunks[index]);
        app.layout.filter_buttons.push((filter, chunks[index]));
    }

    let searching = app.mode == AppMode::Search;
    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(if searching {
            theme::focused_border()
        } else {
            theme::unfocused_border()
        })
        .title(" Search ");
    let search_inner = search_block.inner(chunks[4]);
    let search_text = Paragraph::new(app.search.as_str()).block(search_block);
    frame.render_widget(search_text, chunks[4]);

    if searching {
        frame.set_cursor_position(Position::new(
            search_inner.x + app.search.cursor_chars() as u16,
            search_inner.y,
        ));
    }
}

fn task_line<'a>(app: &'a App, index: usize, task: &'a Task) -> Line<'a> {
    let selected = app.selection.get() == Some(index);
    let dragging = app.drag.dragged_index() == Some(index);
    let hovered = app.drag.hover() == Some(index) && !dragging;

    let checkbox = if task.completed { "[x] " } else { "[ ] " };
    let base = if dragging {
        theme::dragging_text()
    } else if hovered {
        theme::hover_target()
    } else if task.completed {
        theme::done_text()
    } else {
        theme::normal_text()
    };

    let mut spans = vec![
        Span::styled(checkbox, base),
        Span::styled(task.description.as_str(), base),
        Span::raw("  "),
        Span::styled(
            format!("({})", task.priority),
            if dragging {
                theme::dragging_text()
            } else {
                theme::priority_style(task.priority)
            },
        ),
        Span::styled(format!("  #{}", task.id), theme::label_text()),
    ];
    if selected {
        spans.insert(0, Span::styled("▸ ", theme::normal_text()));
    } else {
        spans.insert(0, Span::raw("  "));
    }
    Line::from(spans)
}

fn render_task_list(app: &mut App, frame: &mut Frame, area: Rect, now: Instant) {
    let title = format!(" Tasks ({}) ", app.visible_count());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::focused_border())
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.tasks.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No tasks yet. Press ctrl+c to add one.",
            theme::label_text(),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    let mut screen_row = 0u16;
    let mut visible_index = 0usize;
    for (index, task) in app.tasks.iter().enumerate() {
        if !app.visible.get(index).copied().unwrap_or(false) {
            continue;
        }
        if screen_row >= inner.height {
            break;
        }
        let row_area = Rect {
            x: inner.x,
            y: inner.y + screen_row,
            width: inner.width,
            height: 1,
        };
        // Rows still waiting on their stagger delay hold their slot but stay
        // blank, so the list fades in top to bottom.
        if app.reveal.revealed(visible_index, now) {
            frame.render_widget(
                Paragraph::new(task_line(app, index, task))
                    .style(theme::selected_item(app.selection.get() == Some(index))),
                row_area,
            );
        }
        app.layout.task_rows.push((index, row_area));
        screen_row += 1;
        visible_index += 1;
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = keybindings::bindings_for(app.mode)
        .iter()
        .map(|b| format!("{}: {}", b.key, b.description))
        .collect::<Vec<_>>()
        .join(" | ");
    let footer = Paragraph::new(Span::styled(hints, theme::label_text())).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::unfocused_border()),
    );
    frame.render_widget(footer, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn render_form_popup(
    frame: &mut Frame,
    title: &str,
    description: &InputState,
    priority: taskdeck_domain::Priority,
    focus: FormField,
    submit_label: &str,
    submitting: bool,
) {
    let area = centered_rect(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::focused_border())
        .title(format!(" {} ", title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let description_block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focus == FormField::Description {
            theme::focused_border()
        } else {
            theme::unfocused_border()
        })
        .title(" Description ");
    let description_inner = description_block.inner(rows[0]);
    frame.render_widget(
        Paragraph::new(description.as_str()).block(description_block),
        rows[0],
    );
    if focus == FormField::Description && !submitting {
        frame.set_cursor_position(Position::new(
            description_inner.x + description.cursor_chars() as u16,
            description_inner.y,
        ));
    }

    let priority_style = if focus == FormField::Priority {
        theme::priority_style(priority).add_modifier(Modifier::BOLD)
    } else {
        theme::priority_style(priority)
    };
    let priority_line = Line::from(vec![
        Span::styled("Priority: ", theme::label_text()),
        Span::styled(format!("< {} >", priority), priority_style),
    ]);
    frame.render_widget(Paragraph::new(priority_line), rows[1]);

    let submit_style = if submitting {
        theme::label_text().add_modifier(Modifier::DIM)
    } else {
        theme::normal_text().add_modifier(Modifier::BOLD)
    };
    let submit_line = Line::from(Span::styled(format!("[ {} ]", submit_label), submit_style));
    frame.render_widget(
        Paragraph::new(submit_line).alignment(Alignment::Center),
        rows[3],
    );
}

fn render_add_task_popup(app: &App, frame: &mut Frame) {
    render_form_popup(
        frame,
        "Add Task",
        &app.add_form.description,
        app.add_form.priority,
        app.add_form.focus,
        app.add_form.submit_label(),
        app.add_form.submitting,
    );
}

fn render_edit_task_popup(app: &App, frame: &mut Frame) {
    let Some(form) = app.edit_form.as_ref() else {
        return;
    };
    render_form_popup(
        frame,
        &format!("Edit Task #{}", form.task_id),
        &form.description,
        form.priority,
        form.focus,
        form.submit_label(),
        form.submitting,
    );
}

fn toast_area(frame_area: Rect, toast: &Toast, slot: usize) -> Option<Rect> {
    let width = (toast.message.len() + 4).clamp(12, 42) as u16;
    let width = width.min(frame_area.width);
    let y = frame_area.y + 1 + (slot as u16) * 3;
    if y + 3 > frame_area.y + frame_area.height {
        return None;
    }
    Some(Rect {
        x: frame_area.x + frame_area.width.saturating_sub(width + 1),
        y,
        width,
        height: 3,
    })
}

fn render_toasts(app: &mut App, frame: &mut Frame) {
    let frame_area = frame.area();
    let toasts: Vec<Toast> = app.toasts.iter().cloned().collect();
    for (slot, toast) in toasts.iter().enumerate() {
        let Some(area) = toast_area(frame_area, toast, slot) else {
            break;
        };
        let color = toast.severity.color();
        let style = if toast.is_leaving() {
            theme::label_text().add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if toast.is_leaving() {
                theme::label_text()
            } else {
                Style::default().fg(color)
            });
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(toast.message.as_str())
                .style(style)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        app.layout.toasts.push(area);
    }
}
