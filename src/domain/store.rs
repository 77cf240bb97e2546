use super::task::{DueDate, ReminderDraft, Task, TaskId};
use thiserror::Error;

/// Contract errors for store mutations.
///
/// Unknown ids and invalid input are reported rather than silently
/// ignored; callers decide what is user-visible.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no task with id {0}")]
    NotFound(TaskId),
    #[error("text must not be empty")]
    EmptyText,
    #[error("task is already in My Day")]
    AlreadyMyDay,
}

/// The authoritative, insertion-ordered task collection.
///
/// All task state flows through the methods here; the UI only ever holds
/// ids and borrowed views. Every mutator leaves the collection untouched
/// when it returns an error.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// The full collection in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task by id
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Next unique id: the millisecond clock, bumped past the current
    /// maximum so two creations in the same millisecond stay distinct.
    fn next_id(&self) -> TaskId {
        let now = chrono::Local::now().timestamp_millis();
        let max = self.tasks.iter().map(|t| t.id).max().unwrap_or(0);
        now.max(max + 1)
    }

    /// Append a new task with the given title.
    /// All other fields start empty; the title must be non-blank.
    pub fn create(&mut self, title: &str) -> Result<TaskId, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyText);
        }

        let id = self.next_id();
        self.tasks.push(Task::new(id, title.to_string()));
        Ok(id)
    }

    /// Flip the completed flag; returns the new value
    pub fn toggle_completed(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Flip the important flag; returns the new value
    pub fn toggle_important(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let task = self.get_mut(id)?;
        task.important = !task.important;
        Ok(task.important)
    }

    /// Flip the Assigned to Me flag; returns the new value
    pub fn toggle_assigned(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let task = self.get_mut(id)?;
        task.assigned = !task.assigned;
        Ok(task.assigned)
    }

    /// Flip the Flagged Email flag; returns the new value
    pub fn toggle_flagged(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let task = self.get_mut(id)?;
        task.flagged = !task.flagged;
        Ok(task.flagged)
    }

    /// Remove a task permanently; returns the removed task
    pub fn delete(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.tasks.remove(idx))
    }

    /// Overwrite the due-date marker.
    ///
    /// Adding to My Day when the task is already there is rejected with
    /// `AlreadyMyDay`; the caller surfaces it as an already-satisfied
    /// condition.
    pub fn set_due_date(&mut self, id: TaskId, due: DueDate) -> Result<(), StoreError> {
        let task = self.get_mut(id)?;
        if due == DueDate::MyDay && task.due == Some(DueDate::MyDay) {
            return Err(StoreError::AlreadyMyDay);
        }
        task.due = Some(due);
        Ok(())
    }

    /// Append a sub-step; the text must be non-blank
    pub fn add_step(&mut self, id: TaskId, text: &str) -> Result<(), StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        let task = self.get_mut(id)?;
        task.steps.push(text.to_string());
        Ok(())
    }

    /// Append an attached file name
    pub fn add_file(&mut self, id: TaskId, file_name: &str) -> Result<(), StoreError> {
        let task = self.get_mut(id)?;
        task.files.push(file_name.to_string());
        Ok(())
    }

    /// Overwrite the note text; must be non-blank
    pub fn set_notes(&mut self, id: TaskId, text: &str) -> Result<(), StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }
        let task = self.get_mut(id)?;
        task.notes = text.to_string();
        Ok(())
    }

    /// Overwrite the repeat description; must be non-blank
    pub fn set_repeat(&mut self, id: TaskId, text: &str) -> Result<(), StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        let task = self.get_mut(id)?;
        task.repeat = Some(text.to_string());
        Ok(())
    }

    /// Compose the reminder draft into the stored reminder string,
    /// replacing any prior reminder. An all-blank draft is rejected.
    pub fn set_reminder(&mut self, id: TaskId, draft: &ReminderDraft) -> Result<(), StoreError> {
        if draft.is_blank() {
            return Err(StoreError::EmptyText);
        }
        let task = self.get_mut(id)?;
        task.reminder = Some(draft.compose());
        Ok(())
    }
}
