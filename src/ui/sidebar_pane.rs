use crate::app::AppState;
use crate::domain::FilterMode;
use crate::ui::styles::{active_view_style, border_style, default_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the sidebar of filter views
pub fn render_sidebar_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = FilterMode::all()
        .iter()
        .enumerate()
        .map(|(idx, mode)| {
            let line = Line::from(vec![
                Span::raw(format!(" {} ", idx + 1)),
                Span::raw(format!("{} ", mode.symbol())),
                Span::raw(mode.label()),
            ]);

            let style = if *mode == app.filter {
                active_view_style()
            } else {
                default_style()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Views ", title_style())),
    );

    f.render_widget(list, area);
}
