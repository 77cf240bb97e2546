use crate::domain::{
    visible_tasks, DueDate, FilterMode, PromptKind, ReminderDraft, StoreError, Task, TaskId,
    TaskStore, UiMode,
};
use crate::notifications;
use chrono::NaiveDate;
use std::path::Path;

/// Draft state for the text prompt modal (step/note/repeat/file capture)
#[derive(Debug, Clone)]
pub struct PromptState {
    pub kind: PromptKind,
    pub value: String,
}

/// Draft state for the reminder composer
#[derive(Debug, Clone, Default)]
pub struct ReminderFormState {
    pub draft: ReminderDraft,
    pub editing_field: usize, // 0 = text, 1 = time, 2 = date, 3 = month
}

/// Main application state.
///
/// Owns the task store, the current view (filter + search), the transient
/// selection, and the per-modal draft fields. Drafts are discarded on
/// cancel and only reach the store on confirm.
pub struct AppState {
    pub store: TaskStore,
    pub filter: FilterMode,
    pub search_term: String,
    pub cursor: usize,
    pub selected: Option<TaskId>,
    pub ui_mode: UiMode,
    pub new_task_title: String,
    pub pending_delete: Option<TaskId>,
    pub due_draft: String,
    pub reminder_form: Option<ReminderFormState>,
    pub prompt: Option<PromptState>,
    pub notice: Option<String>,
    pub needs_save: bool,
}

impl AppState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            store: TaskStore::new(tasks),
            filter: FilterMode::All,
            search_term: String::new(),
            cursor: 0,
            selected: None,
            ui_mode: UiMode::Normal,
            new_task_title: String::new(),
            pending_delete: None,
            due_draft: String::new(),
            reminder_form: None,
            prompt: None,
            notice: None,
            needs_save: false,
        }
    }

    /// Tasks visible under the current filter and search term
    pub fn visible(&self) -> Vec<&Task> {
        visible_tasks(self.store.tasks(), self.filter, &self.search_term)
    }

    /// Id of the task under the list cursor, if any
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.visible().get(self.cursor).map(|t| t.id)
    }

    /// The task shown in the detail panel, if any
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|id| self.store.get(id))
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Move the list cursor up
    pub fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the list cursor down
    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.visible().len() {
            self.cursor += 1;
        }
    }

    /// Switch the sidebar view
    pub fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
        self.cursor = 0;
    }

    // --- search -----------------------------------------------------------

    pub fn start_search(&mut self) {
        self.ui_mode = UiMode::Searching;
    }

    pub fn search_push(&mut self, c: char) {
        self.search_term.push(c);
        self.clamp_cursor();
    }

    pub fn search_backspace(&mut self) {
        self.search_term.pop();
        self.clamp_cursor();
    }

    pub fn finish_search(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.ui_mode = UiMode::Normal;
        self.clamp_cursor();
    }

    // --- add task ---------------------------------------------------------

    pub fn start_add_task(&mut self) {
        self.new_task_title.clear();
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn add_task_push(&mut self, c: char) {
        self.new_task_title.push(c);
    }

    pub fn add_task_backspace(&mut self) {
        self.new_task_title.pop();
    }

    /// Commit the inline add-task input. A blank title just closes the
    /// input without creating anything.
    pub fn submit_add_task(&mut self) {
        let title = self.new_task_title.clone();
        if self.store.create(&title).is_ok() {
            self.needs_save = true;
        }
        self.new_task_title.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_add_task(&mut self) {
        self.new_task_title.clear();
        self.ui_mode = UiMode::Normal;
    }

    // --- list actions -----------------------------------------------------

    /// Toggle completion for the task under the cursor
    pub fn toggle_completed_at_cursor(&mut self) {
        if let Some(id) = self.cursor_task_id() {
            let title = self.store.get(id).map(|t| t.title.clone());
            if let Ok(now_done) = self.store.toggle_completed(id) {
                if now_done {
                    if let Some(title) = title {
                        notifications::notify_task_done(&title);
                    }
                }
                self.needs_save = true;
                self.clamp_cursor();
            }
        }
    }

    /// Toggle importance for the task under the cursor
    pub fn toggle_important_at_cursor(&mut self) {
        if let Some(id) = self.cursor_task_id() {
            if self.store.toggle_important(id).is_ok() {
                self.needs_save = true;
                self.clamp_cursor();
            }
        }
    }

    /// Open the detail panel for the task under the cursor
    pub fn select_at_cursor(&mut self) {
        self.selected = self.cursor_task_id();
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // --- delete -----------------------------------------------------------

    /// Ask for confirmation before deleting the task under the cursor
    pub fn request_delete_at_cursor(&mut self) {
        if let Some(id) = self.cursor_task_id() {
            self.pending_delete = Some(id);
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    /// Delete the pending task. Clears the selection if it pointed at the
    /// deleted task.
    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            if self.store.delete(id).is_ok() {
                if self.selected == Some(id) {
                    self.selected = None;
                }
                self.needs_save = true;
                self.clamp_cursor();
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.ui_mode = UiMode::Normal;
    }

    // --- detail panel actions --------------------------------------------

    /// Add the selected task to My Day. Re-adding surfaces a blocking
    /// notice instead of silently dropping the request.
    pub fn add_selected_to_my_day(&mut self) {
        let Some(id) = self.selected else { return };

        match self.store.set_due_date(id, DueDate::MyDay) {
            Ok(()) => {
                self.set_filter(FilterMode::MyDay);
                self.needs_save = true;
            }
            Err(StoreError::AlreadyMyDay) => {
                self.show_notice("Already added to My Day".to_string());
            }
            Err(_) => {}
        }
    }

    pub fn toggle_selected_assigned(&mut self) {
        if let Some(id) = self.selected {
            if self.store.toggle_assigned(id).is_ok() {
                self.needs_save = true;
            }
        }
    }

    pub fn toggle_selected_flagged(&mut self) {
        if let Some(id) = self.selected {
            if self.store.toggle_flagged(id).is_ok() {
                self.needs_save = true;
            }
        }
    }

    // --- due date picker --------------------------------------------------

    pub fn open_due_date_picker(&mut self) {
        if self.selected.is_some() {
            self.due_draft.clear();
            self.ui_mode = UiMode::DueDatePicker;
        }
    }

    pub fn due_draft_push(&mut self, c: char) {
        self.due_draft.push(c);
    }

    pub fn due_draft_backspace(&mut self) {
        self.due_draft.pop();
    }

    /// Confirm the due-date draft. The YYYY-MM-DD input is formatted into
    /// the fixed display layout before it reaches the store. An empty
    /// draft keeps the picker open; an unparseable one shows a notice.
    pub fn submit_due_date(&mut self) {
        let Some(id) = self.selected else {
            self.ui_mode = UiMode::Normal;
            return;
        };
        if self.due_draft.trim().is_empty() {
            return;
        }

        match NaiveDate::parse_from_str(self.due_draft.trim(), "%Y-%m-%d") {
            Ok(date) => {
                let formatted = date.format("%a, %d %b %Y").to_string();
                if self.store.set_due_date(id, DueDate::On(formatted)).is_ok() {
                    self.needs_save = true;
                }
                self.due_draft.clear();
                self.ui_mode = UiMode::Normal;
            }
            Err(_) => {
                self.show_notice("Enter the due date as YYYY-MM-DD".to_string());
            }
        }
    }

    pub fn cancel_due_date(&mut self) {
        self.due_draft.clear();
        self.ui_mode = UiMode::Normal;
    }

    // --- reminder composer ------------------------------------------------

    pub fn open_reminder_composer(&mut self) {
        if self.selected.is_some() {
            self.reminder_form = Some(ReminderFormState::default());
            self.ui_mode = UiMode::ReminderComposer;
        }
    }

    /// Cycle between the composer fields (text -> time -> date -> month)
    pub fn reminder_toggle_field(&mut self) {
        if let Some(form) = &mut self.reminder_form {
            form.editing_field = (form.editing_field + 1) % 4;
        }
    }

    pub fn reminder_push(&mut self, c: char) {
        if let Some(form) = &mut self.reminder_form {
            match form.editing_field {
                0 => form.draft.text.push(c),
                1 => form.draft.time.push(c),
                2 => form.draft.date.push(c),
                _ => form.draft.month.push(c),
            }
        }
    }

    pub fn reminder_backspace(&mut self) {
        if let Some(form) = &mut self.reminder_form {
            match form.editing_field {
                0 => form.draft.text.pop(),
                1 => form.draft.time.pop(),
                2 => form.draft.date.pop(),
                _ => form.draft.month.pop(),
            };
        }
    }

    /// Save the composed reminder onto the selected task
    pub fn submit_reminder(&mut self) {
        let Some(form) = self.reminder_form.take() else {
            self.ui_mode = UiMode::Normal;
            return;
        };
        let Some(id) = self.selected else {
            self.ui_mode = UiMode::Normal;
            return;
        };

        match self.store.set_reminder(id, &form.draft) {
            Ok(()) => {
                if let Some(task) = self.store.get(id) {
                    notifications::notify_reminder_set(&task.title);
                }
                self.needs_save = true;
                self.ui_mode = UiMode::Normal;
            }
            Err(StoreError::EmptyText) => {
                self.show_notice("Reminder is empty".to_string());
            }
            Err(_) => {
                self.ui_mode = UiMode::Normal;
            }
        }
    }

    pub fn cancel_reminder(&mut self) {
        self.reminder_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // --- text prompt ------------------------------------------------------

    /// Open a collect-text prompt for the selected task. The store
    /// mutation happens only when the prompt is confirmed.
    pub fn open_prompt(&mut self, kind: PromptKind) {
        if self.selected.is_some() {
            self.prompt = Some(PromptState {
                kind,
                value: String::new(),
            });
            self.ui_mode = UiMode::Prompt;
        }
    }

    pub fn prompt_push(&mut self, c: char) {
        if let Some(prompt) = &mut self.prompt {
            prompt.value.push(c);
        }
    }

    pub fn prompt_backspace(&mut self) {
        if let Some(prompt) = &mut self.prompt {
            prompt.value.pop();
        }
    }

    /// Route the collected text to the matching store operation. Blank
    /// input closes the prompt without mutating anything.
    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            self.ui_mode = UiMode::Normal;
            return;
        };
        let Some(id) = self.selected else {
            self.ui_mode = UiMode::Normal;
            return;
        };

        let result = match prompt.kind {
            PromptKind::Step => self.store.add_step(id, &prompt.value),
            PromptKind::Note => self.store.set_notes(id, &prompt.value),
            PromptKind::Repeat => self.store.set_repeat(id, &prompt.value),
            PromptKind::File => {
                // Only the file's name is kept, never its path or bytes
                let name = Path::new(prompt.value.trim())
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string());
                match name {
                    Some(name) => self.store.add_file(id, &name),
                    None => Err(StoreError::EmptyText),
                }
            }
        };

        if result.is_ok() {
            self.needs_save = true;
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
        self.ui_mode = UiMode::Normal;
    }

    // --- notices ----------------------------------------------------------

    /// Show a blocking notice; any key dismisses it
    pub fn show_notice(&mut self, message: String) {
        self.notice = Some(message);
        self.ui_mode = UiMode::Notice;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.ui_mode = UiMode::Normal;
    }
}
