/// Sidebar view selecting which subset of tasks is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    MyDay,
    Important,
    Planned,
    All,
    Completed,
    Assigned,
    Flagged,
    Tasks,
}

impl FilterMode {
    /// Display name used in the sidebar and the list title
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::MyDay => "My Day",
            FilterMode::Important => "Important",
            FilterMode::Planned => "Planned",
            FilterMode::All => "All",
            FilterMode::Completed => "Completed",
            FilterMode::Assigned => "Assigned to Me",
            FilterMode::Flagged => "Flagged Email",
            FilterMode::Tasks => "Tasks",
        }
    }

    /// Sidebar glyph for this view
    pub fn symbol(&self) -> &'static str {
        match self {
            FilterMode::MyDay => "☀",
            FilterMode::Important => "⭐",
            FilterMode::Planned => "📅",
            FilterMode::All => "📂",
            FilterMode::Completed => "✅",
            FilterMode::Assigned => "👤",
            FilterMode::Flagged => "✉",
            FilterMode::Tasks => "📋",
        }
    }

    /// All views in sidebar order
    pub fn all() -> &'static [FilterMode] {
        &[
            FilterMode::MyDay,
            FilterMode::Important,
            FilterMode::Planned,
            FilterMode::All,
            FilterMode::Completed,
            FilterMode::Assigned,
            FilterMode::Flagged,
            FilterMode::Tasks,
        ]
    }
}

/// What kind of text the prompt modal is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Step,
    Note,
    Repeat,
    File,
}

impl PromptKind {
    /// Prompt title shown in the modal
    pub fn title(&self) -> &'static str {
        match self {
            PromptKind::Step => "Add Step",
            PromptKind::Note => "Add Note",
            PromptKind::Repeat => "Repeat",
            PromptKind::File => "Add File",
        }
    }

    /// Hint line shown under the input
    pub fn hint(&self) -> &'static str {
        match self {
            PromptKind::Step => "Enter a new step",
            PromptKind::Note => "Enter note text (replaces the current note)",
            PromptKind::Repeat => "Enter repeat option (e.g., daily, weekly)",
            PromptKind::File => "Enter a file path (only the name is kept)",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Searching,
    AddingTask,
    ConfirmDelete,
    DueDatePicker,
    ReminderComposer,
    Prompt,
    Notice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_mode_labels() {
        assert_eq!(FilterMode::MyDay.label(), "My Day");
        assert_eq!(FilterMode::Assigned.label(), "Assigned to Me");
        assert_eq!(FilterMode::Flagged.label(), "Flagged Email");
    }

    #[test]
    fn test_filter_mode_all_has_eight_views() {
        assert_eq!(FilterMode::all().len(), 8);
        assert_eq!(FilterMode::all()[0], FilterMode::MyDay);
        assert_eq!(FilterMode::all()[7], FilterMode::Tasks);
    }

    #[test]
    fn test_prompt_kind_titles() {
        assert_eq!(PromptKind::Step.title(), "Add Step");
        assert_eq!(PromptKind::File.title(), "Add File");
    }
}
