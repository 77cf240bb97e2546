use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique task identifier, assigned at creation and never reused.
pub type TaskId = i64;

/// Due-date marker for a task.
///
/// "My Day" membership is an explicit variant rather than a magic date
/// string, so the My Day view never has to compare display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DueDate {
    /// The task belongs to today's My Day list.
    MyDay,
    /// A pre-formatted display date, e.g. "Mon, 25 Nov 2024".
    On(String),
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueDate::MyDay => write!(f, "Today"),
            DueDate::On(date) => write!(f, "{}", date),
        }
    }
}

/// Draft fields collected by the reminder composer.
///
/// The four parts are combined into one display string on save; nothing
/// structured survives past that point.
#[derive(Debug, Clone, Default)]
pub struct ReminderDraft {
    pub text: String,
    pub time: String,
    pub date: String,
    pub month: String,
}

impl ReminderDraft {
    /// Combine the draft fields into the stored reminder string.
    pub fn compose(&self) -> String {
        format!(
            "{} | {} {} {}",
            self.text.trim(),
            self.time,
            self.date,
            self.month
        )
    }

    /// True when every field is blank.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
            && self.time.trim().is_empty()
            && self.date.trim().is_empty()
            && self.month.trim().is_empty()
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID (millisecond clock at creation)
    pub id: TaskId,
    /// Task title
    pub title: String,
    /// Due-date marker, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<DueDate>,
    /// Whether the task is done
    #[serde(default)]
    pub completed: bool,
    /// Starred in the Important view
    #[serde(default)]
    pub important: bool,
    /// Shown in the Assigned to Me view
    #[serde(default)]
    pub assigned: bool,
    /// Shown in the Flagged Email view
    #[serde(default)]
    pub flagged: bool,
    /// Ordered sub-steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
    /// Composite reminder string from the reminder composer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<String>,
    /// Attached file names (names only, no contents)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    /// Free-text recurrence description, e.g. "daily"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<String>,
}

impl Task {
    pub fn new(id: TaskId, title: String) -> Self {
        Self {
            id,
            title,
            due: None,
            completed: false,
            important: false,
            assigned: false,
            flagged: false,
            steps: Vec::new(),
            reminder: None,
            files: Vec::new(),
            notes: String::new(),
            repeat: None,
        }
    }

    /// Whether the task is in today's My Day list
    pub fn in_my_day(&self) -> bool {
        self.due == Some(DueDate::MyDay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new_defaults() {
        let task = Task::new(42, "Write proposal".to_string());
        assert_eq!(task.id, 42);
        assert_eq!(task.title, "Write proposal");
        assert!(task.due.is_none());
        assert!(!task.completed);
        assert!(!task.important);
        assert!(task.steps.is_empty());
        assert!(task.reminder.is_none());
        assert!(task.files.is_empty());
        assert_eq!(task.notes, "");
        assert!(task.repeat.is_none());
    }

    #[test]
    fn test_due_date_display() {
        assert_eq!(DueDate::MyDay.to_string(), "Today");
        assert_eq!(
            DueDate::On("Mon, 25 Nov 2024".to_string()).to_string(),
            "Mon, 25 Nov 2024"
        );
    }

    #[test]
    fn test_in_my_day() {
        let mut task = Task::new(1, "Buy groceries".to_string());
        assert!(!task.in_my_day());

        task.due = Some(DueDate::MyDay);
        assert!(task.in_my_day());

        task.due = Some(DueDate::On("Tomorrow".to_string()));
        assert!(!task.in_my_day());
    }

    #[test]
    fn test_reminder_compose() {
        let draft = ReminderDraft {
            text: "  Call the bank  ".to_string(),
            time: "09:30".to_string(),
            date: "25".to_string(),
            month: "November".to_string(),
        };
        assert_eq!(draft.compose(), "Call the bank | 09:30 25 November");
    }

    #[test]
    fn test_reminder_blank() {
        assert!(ReminderDraft::default().is_blank());

        let draft = ReminderDraft {
            time: "09:30".to_string(),
            ..ReminderDraft::default()
        };
        assert!(!draft.is_blank());
    }

    #[test]
    fn test_task_round_trips_through_json() {
        let mut task = Task::new(7, "Pack for the trip".to_string());
        task.due = Some(DueDate::On("Fri, 03 Jan 2025".to_string()));
        task.steps.push("Passport".to_string());
        task.files.push("itinerary.pdf".to_string());
        task.notes = "Leave early".to_string();

        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
