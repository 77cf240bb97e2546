pub mod enums;
pub mod store;
pub mod task;
pub mod views;

pub use enums::{FilterMode, PromptKind, UiMode};
pub use store::{StoreError, TaskStore};
pub use task::{DueDate, ReminderDraft, Task, TaskId};
pub use views::visible_tasks;
