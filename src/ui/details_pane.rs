use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{border_style, default_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details pane for the selected task
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(task) = app.selected_task() else {
        let empty = Paragraph::new("No task selected").block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Details ", title_style())),
        );
        f.render_widget(empty, area);
        return;
    };

    let lines = detail_lines(task);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Details ", title_style())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn detail_lines(task: &Task) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Title: ".to_string(), title_style()),
        Span::raw(task.title.clone()),
    ]));
    lines.push(Line::raw(""));

    if let Some(due) = &task.due {
        lines.push(Line::raw(format!("📅 Due: {}", due)));
    }
    if let Some(reminder) = &task.reminder {
        lines.push(Line::raw(format!("🔔 {}", reminder)));
    }
    if let Some(repeat) = &task.repeat {
        lines.push(Line::raw(format!("🔁 {}", repeat)));
    }
    if task.important {
        lines.push(Line::raw("⭐ Important"));
    }
    if task.assigned {
        lines.push(Line::raw("👤 Assigned to me"));
    }
    if task.flagged {
        lines.push(Line::raw("✉ Flagged email"));
    }

    if !task.steps.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Steps:".to_string(),
            title_style(),
        )));
        for step in &task.steps {
            lines.push(Line::raw(format!("  ✅ {}", step)));
        }
    }

    if !task.files.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Files:".to_string(),
            title_style(),
        )));
        for file in &task.files {
            lines.push(Line::raw(format!("  📎 {}", file)));
        }
    }

    lines.push(Line::raw(""));
    if task.notes.is_empty() {
        lines.push(Line::from(Span::styled(
            "Notes: (empty)".to_string(),
            default_style(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Notes:".to_string(),
            title_style(),
        )));
        for note_line in task.notes.lines() {
            lines.push(Line::raw(format!("  {}", note_line)));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "m my-day  s step  r remind  d due".to_string(),
        hint_style(),
    )));
    lines.push(Line::from(Span::styled(
        "p repeat  f file  n note".to_string(),
        hint_style(),
    )));
    lines.push(Line::from(Span::styled(
        "A assigned  F flagged  Esc close".to_string(),
        hint_style(),
    )));

    lines
}
