pub mod details_pane;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod search_bar;
pub mod sidebar_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use details_pane::render_details_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::{
    render_confirm_delete, render_due_date_modal, render_notice, render_prompt,
    render_reminder_modal,
};
use ratatui::Frame;
use search_bar::render_search_bar;
use sidebar_pane::render_sidebar_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size, app.selected.is_some());

    // Render keybindings bar and search bar
    render_keybindings(f, layout.keybindings_area);
    render_search_bar(f, app, layout.search_area);

    // Render panes
    render_sidebar_pane(f, app, layout.sidebar_area);
    render_list_pane(f, app, layout.list_area);
    if let Some(details_area) = layout.details_area {
        render_details_pane(f, app, details_area);
    }

    // Render the active modal, if any
    match app.ui_mode {
        UiMode::ConfirmDelete => render_confirm_delete(f, app, size),
        UiMode::DueDatePicker => render_due_date_modal(f, app, size),
        UiMode::ReminderComposer => render_reminder_modal(f, app, size),
        UiMode::Prompt => render_prompt(f, app, size),
        UiMode::Notice => render_notice(f, app, size),
        _ => {}
    }
}
