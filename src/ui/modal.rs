use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the delete confirmation modal
pub fn render_confirm_delete(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(id) = app.pending_delete else { return };
    let title = app
        .store
        .get(id)
        .map(|t| t.title.clone())
        .unwrap_or_default();

    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::raw(format!(
        "  Are you sure you want to delete \"{}\"?",
        title
    )));
    lines.push(Line::raw("  This action cannot be undone."));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [y]", modal_title_style()),
        Span::raw(" Confirm  "),
        Span::styled("[n]", modal_title_style()),
        Span::raw(" Cancel  "),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Delete Task ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the due-date picker modal
pub fn render_due_date_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::raw("  Select due date (YYYY-MM-DD):"));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("  > "),
        Span::styled(app.due_draft.clone(), modal_title_style()),
        Span::styled("█", modal_title_style()),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [Enter]", modal_title_style()),
        Span::raw(" Confirm  "),
        Span::styled("[Esc]", modal_title_style()),
        Span::raw(" Cancel  "),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Add Due Date ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the reminder composer modal
pub fn render_reminder_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(form) = &app.reminder_form else { return };

    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let fields = [
        ("Message", &form.draft.text),
        ("Time", &form.draft.time),
        ("Date", &form.draft.date),
        ("Month", &form.draft.month),
    ];

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    for (idx, (label, value)) in fields.iter().enumerate() {
        let editing = idx == form.editing_field;
        let label_text = if editing {
            format!("{}: (editing)", label)
        } else {
            format!("{}:", label)
        };
        lines.push(Line::raw(label_text));

        let mut spans = vec![Span::raw("> "), Span::styled((*value).clone(), modal_title_style())];
        if editing {
            spans.push(Span::styled("█", modal_title_style()));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::raw(""));
    lines.push(Line::raw(
        "Tab to switch fields  ·  Enter to save  ·  Esc to cancel",
    ));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Set Reminder ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the generic text prompt modal (step/note/repeat/file)
pub fn render_prompt(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(prompt) = &app.prompt else { return };

    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::raw(format!("  {}:", prompt.kind.hint())));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("  > "),
        Span::styled(prompt.value.clone(), modal_title_style()),
        Span::styled("█", modal_title_style()),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [Enter]", modal_title_style()),
        Span::raw(" Confirm  "),
        Span::styled("[Esc]", modal_title_style()),
        Span::raw(" Cancel  "),
    ]));

    let title = format!(" {} ", prompt.kind.title());
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the blocking notice modal
pub fn render_notice(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(notice) = &app.notice else { return };

    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  {}", notice)),
        Line::raw(""),
        Line::raw("  Press any key to continue"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Notice ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
