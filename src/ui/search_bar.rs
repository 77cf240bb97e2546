use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, hint_style, modal_title_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the search bar above the task list
pub fn render_search_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    if app.search_term.is_empty() && app.ui_mode != UiMode::Searching {
        spans.push(Span::styled("Search tasks... (press /)", hint_style()));
    } else {
        spans.push(Span::raw(app.search_term.clone()));
    }

    if app.ui_mode == UiMode::Searching {
        spans.push(Span::styled("█", modal_title_style()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Search ", title_style())),
    );

    f.render_widget(paragraph, area);
}
