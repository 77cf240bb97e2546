use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub search_area: Rect,
    pub sidebar_area: Rect,
    pub list_area: Rect,
    pub details_area: Option<Rect>,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Search bar (3 rows)
/// - Main area: Sidebar (22 cols) | List, with the Details pane taking
///   a third of the remaining width while a task is selected
pub fn create_layout(area: Rect, show_details: bool) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let keybindings_area = main_chunks[0];
    let search_area = main_chunks[1];
    let content_area = main_chunks[2];

    if show_details {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(22),     // Sidebar
                Constraint::Min(0),         // Task list
                Constraint::Percentage(34), // Details pane
            ])
            .split(content_area);

        MainLayout {
            keybindings_area,
            search_area,
            sidebar_area: horizontal[0],
            list_area: horizontal[1],
            details_area: Some(horizontal[2]),
        }
    } else {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(22), // Sidebar
                Constraint::Min(0),     // Task list
            ])
            .split(content_area);

        MainLayout {
            keybindings_area,
            search_area,
            sidebar_area: horizontal[0],
            list_area: horizontal[1],
            details_area: None,
        }
    }
}

/// Create centered modal area
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(14),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
