use crate::app::AppState;
use crate::domain::{FilterMode, PromptKind, UiMode};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle a keyboard event. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Searching => handle_search_mode(app, key),
        UiMode::AddingTask => handle_add_task_mode(app, key),
        UiMode::ConfirmDelete => handle_confirm_delete_mode(app, key),
        UiMode::DueDatePicker => handle_due_date_mode(app, key),
        UiMode::ReminderComposer => handle_reminder_mode(app, key),
        UiMode::Prompt => handle_prompt_mode(app, key),
        UiMode::Notice => {
            // Any key dismisses the notice
            app.dismiss_notice();
            false
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_cursor_up();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_cursor_down();
            false
        }

        // Sidebar views by number
        KeyCode::Char(c @ '1'..='8') => {
            let idx = c as usize - '1' as usize;
            app.set_filter(FilterMode::all()[idx]);
            false
        }

        // Search
        KeyCode::Char('/') => {
            app.start_search();
            false
        }

        // Add a task
        KeyCode::Char('a') => {
            app.start_add_task();
            false
        }

        // Toggle completed / important on the cursor row
        KeyCode::Char(' ') => {
            app.toggle_completed_at_cursor();
            false
        }
        KeyCode::Char('i') => {
            app.toggle_important_at_cursor();
            false
        }

        // Open / close the detail panel
        KeyCode::Enter => {
            app.select_at_cursor();
            false
        }
        KeyCode::Esc => {
            if app.selected.is_some() {
                app.clear_selection();
            } else if !app.search_term.is_empty() {
                app.clear_search();
            }
            false
        }

        // Delete (with confirmation)
        KeyCode::Char('x') | KeyCode::Delete => {
            app.request_delete_at_cursor();
            false
        }

        // Detail panel actions (no-ops without a selection)
        KeyCode::Char('m') => {
            app.add_selected_to_my_day();
            false
        }
        KeyCode::Char('s') => {
            app.open_prompt(PromptKind::Step);
            false
        }
        KeyCode::Char('r') => {
            app.open_reminder_composer();
            false
        }
        KeyCode::Char('d') => {
            app.open_due_date_picker();
            false
        }
        KeyCode::Char('p') => {
            app.open_prompt(PromptKind::Repeat);
            false
        }
        KeyCode::Char('f') => {
            app.open_prompt(PromptKind::File);
            false
        }
        KeyCode::Char('n') => {
            app.open_prompt(PromptKind::Note);
            false
        }
        KeyCode::Char('A') => {
            app.toggle_selected_assigned();
            false
        }
        KeyCode::Char('F') => {
            app.toggle_selected_flagged();
            false
        }

        // Quit
        KeyCode::Char('q') => true,

        _ => false,
    }
}

/// Handle keys while typing in the search bar
fn handle_search_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.finish_search(),
        KeyCode::Esc => app.clear_search(),
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char(c) => app.search_push(c),
        _ => {}
    }
    false
}

/// Handle keys in the inline add-task input
fn handle_add_task_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_add_task(),
        KeyCode::Esc => app.cancel_add_task(),
        KeyCode::Backspace => app.add_task_backspace(),
        KeyCode::Char(c) => app.add_task_push(c),
        _ => {}
    }
    false
}

/// Handle keys in the delete confirmation modal
fn handle_confirm_delete_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
    false
}

/// Handle keys in the due-date picker
fn handle_due_date_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_due_date(),
        KeyCode::Esc => app.cancel_due_date(),
        KeyCode::Backspace => app.due_draft_backspace(),
        KeyCode::Char(c) => app.due_draft_push(c),
        _ => {}
    }
    false
}

/// Handle keys in the reminder composer
fn handle_reminder_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab => app.reminder_toggle_field(),
        KeyCode::Enter => app.submit_reminder(),
        KeyCode::Esc => app.cancel_reminder(),
        KeyCode::Backspace => app.reminder_backspace(),
        KeyCode::Char(c) => app.reminder_push(c),
        _ => {}
    }
    false
}

/// Handle keys in the generic text prompt
fn handle_prompt_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_prompt(),
        KeyCode::Esc => app.cancel_prompt(),
        KeyCode::Backspace => app.prompt_backspace(),
        KeyCode::Char(c) => app.prompt_push(c),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::seed_tasks;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn create_test_app() -> AppState {
        AppState::new(seed_tasks())
    }

    #[test]
    fn test_q_quits_in_normal_mode() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))));
    }

    #[test]
    fn test_number_keys_switch_views() {
        let mut app = create_test_app();

        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.filter, FilterMode::MyDay);

        handle_key(&mut app, press(KeyCode::Char('8')));
        assert_eq!(app.filter, FilterMode::Tasks);
    }

    #[test]
    fn test_a_opens_add_task_and_typed_text_lands_in_the_draft() {
        let mut app = create_test_app();

        handle_key(&mut app, press(KeyCode::Char('a')));
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        for c in "Buy milk".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.new_task_title, "Buy milk");

        // 'q' is text here, not quit
        assert!(!handle_key(&mut app, press(KeyCode::Char('q'))));
        assert_eq!(app.new_task_title, "Buy milkq");

        handle_key(&mut app, press(KeyCode::Backspace));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.store.tasks().last().unwrap().title, "Buy milk");
    }

    #[test]
    fn test_space_toggles_completion() {
        let mut app = create_test_app();
        let id = app.cursor_task_id().unwrap();

        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert!(app.store.get(id).unwrap().completed);
    }

    #[test]
    fn test_delete_flow() {
        let mut app = create_test_app();

        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);

        handle_key(&mut app, press(KeyCode::Char('n')));
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.store.len(), 4);

        handle_key(&mut app, press(KeyCode::Char('x')));
        handle_key(&mut app, press(KeyCode::Char('y')));
        assert_eq!(app.store.len(), 3);
    }

    #[test]
    fn test_notice_dismissed_by_any_key() {
        let mut app = create_test_app();
        app.show_notice("Already added to My Day".to_string());

        handle_key(&mut app, press(KeyCode::Char('z')));
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_search_typing_and_escape() {
        let mut app = create_test_app();

        handle_key(&mut app, press(KeyCode::Char('/')));
        assert_eq!(app.ui_mode, UiMode::Searching);

        for c in "groc".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.visible().len(), 1);

        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.search_term.is_empty());
    }

    #[test]
    fn test_detail_actions_require_selection() {
        let mut app = create_test_app();

        handle_key(&mut app, press(KeyCode::Char('s')));
        assert_eq!(app.ui_mode, UiMode::Normal);

        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Char('s')));
        assert_eq!(app.ui_mode, UiMode::Prompt);
    }

    #[test]
    fn test_reminder_tab_cycles_fields() {
        let mut app = create_test_app();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.ui_mode, UiMode::ReminderComposer);

        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.reminder_form.as_ref().unwrap().editing_field, 1);

        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.ui_mode, UiMode::Normal);
    }
}
