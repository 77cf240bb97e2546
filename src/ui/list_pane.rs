use crate::app::AppState;
use crate::domain::{Task, UiMode};
use crate::ui::styles::{
    add_task_style, border_style, default_style, done_style, due_style, important_style,
    modal_title_style, reminder_style, selected_style, title_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task list for the current view, with the add-task bar as
/// the final row
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let visible = app.visible();

    let mut items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task);
            let style = if idx == app.cursor {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    items.push(ListItem::new(create_add_task_line(app)).style(add_task_style()));

    let date = Local::now().format("%A, %-d %B");
    let title = format!(
        " {} {} — {} ({} tasks) ",
        app.filter.symbol(),
        app.filter.label(),
        date,
        visible.len()
    );

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single line for a task
/// Format: [x] Buy groceries ⭐  📅 Today  🔔 Call the bank | ...
fn create_task_line(task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    let checkbox = if task.completed { "[x] " } else { "[ ] " };
    spans.push(Span::raw(checkbox.to_string()));

    if task.completed {
        spans.push(Span::styled(task.title.clone(), done_style()));
    } else {
        spans.push(Span::raw(task.title.clone()));
    }

    if task.important {
        spans.push(Span::styled(" ⭐".to_string(), important_style()));
    }

    if let Some(due) = &task.due {
        spans.push(Span::styled(format!("  📅 {}", due), due_style()));
    }

    if let Some(reminder) = &task.reminder {
        spans.push(Span::styled(format!("  🔔 {}", reminder), reminder_style()));
    }

    Line::from(spans)
}

/// The inline add-task bar shown under the list
fn create_add_task_line(app: &AppState) -> Line<'static> {
    if app.ui_mode == UiMode::AddingTask {
        Line::from(vec![
            Span::raw("> ".to_string()),
            Span::raw(app.new_task_title.clone()),
            Span::styled("█".to_string(), modal_title_style()),
        ])
    } else {
        Line::from(vec![Span::raw("＋ Add a Task (press a)".to_string())])
    }
}
