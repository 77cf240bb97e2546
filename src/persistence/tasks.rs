use crate::domain::{DueDate, Task};
use crate::persistence::{atomic_write, read_file};
use anyhow::Result;
use std::path::Path;

/// The fixed fallback collection used when no stored data exists
pub fn seed_tasks() -> Vec<Task> {
    let mut sort_logins = Task::new(1, "Sort Microsoft Account login details".to_string());
    sort_logins.important = true;

    let mut follow_up = Task::new(
        2,
        "Follow up with Justin about his choice in to-do apps".to_string(),
    );
    follow_up.due = Some(DueDate::On("Mon, 25 Nov".to_string()));

    let mut groceries = Task::new(3, "Buy groceries".to_string());
    groceries.due = Some(DueDate::MyDay);
    groceries.important = true;

    let mut proposal = Task::new(4, "Finish project proposal".to_string());
    proposal.due = Some(DueDate::On("Tomorrow".to_string()));
    proposal.completed = true;

    vec![sort_logins, follow_up, groceries, proposal]
}

/// Load the task collection from the storage slot.
///
/// A missing or unreadable slot degrades to the seed collection; this
/// never surfaces an error to the caller.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Vec<Task> {
    let path = path.as_ref();

    let content = match read_file(path) {
        Ok(content) if !content.is_empty() => content,
        _ => return seed_tasks(),
    };

    match serde_json::from_str(&content) {
        Ok(tasks) => tasks,
        Err(err) => {
            eprintln!(
                "Warning: could not parse {}: {}; starting from the sample tasks",
                path.display(),
                err
            );
            seed_tasks()
        }
    }
}

/// Write the whole task collection to the storage slot
pub fn save_tasks<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks)?;
    atomic_write(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_seed_has_four_tasks() {
        let seed = seed_tasks();
        assert_eq!(seed.len(), 4);

        let ids: Vec<i64> = seed.iter().map(|t| t.id).collect();
        let mut unique = ids.clone();
        unique.dedup();
        assert_eq!(ids, unique);

        assert!(seed[0].important);
        assert!(seed[2].in_my_day());
        assert!(seed[3].completed);
    }

    #[test]
    fn test_load_missing_slot_returns_seed() {
        let temp_dir = tempdir().unwrap();
        let slot = temp_dir.path().join("tasks.json");

        let tasks = load_tasks(&slot);
        assert_eq!(tasks, seed_tasks());
    }

    #[test]
    fn test_load_unparseable_slot_returns_seed() {
        let temp_dir = tempdir().unwrap();
        let slot = temp_dir.path().join("tasks.json");
        std::fs::write(&slot, "{ not json").unwrap();

        let tasks = load_tasks(&slot);
        assert_eq!(tasks, seed_tasks());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp_dir = tempdir().unwrap();
        let slot = temp_dir.path().join("tasks.json");

        let mut tasks = seed_tasks();
        tasks[0].steps.push("Find recovery email".to_string());
        tasks[1].reminder = Some("Ping Justin | 09:00 25 November".to_string());
        tasks[2].files.push("list.txt".to_string());
        tasks[3].notes = "Waiting on review".to_string();
        tasks[3].repeat = Some("weekly".to_string());

        save_tasks(&slot, &tasks).unwrap();
        let loaded = load_tasks(&slot);

        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_save_replaces_prior_contents() {
        let temp_dir = tempdir().unwrap();
        let slot = temp_dir.path().join("tasks.json");

        save_tasks(&slot, &seed_tasks()).unwrap();
        let one = vec![Task::new(99, "Only one left".to_string())];
        save_tasks(&slot, &one).unwrap();

        assert_eq!(load_tasks(&slot), one);
    }

    #[test]
    fn test_empty_collection_round_trips() {
        let temp_dir = tempdir().unwrap();
        let slot = temp_dir.path().join("tasks.json");

        save_tasks(&slot, &[]).unwrap();
        assert!(load_tasks(&slot).is_empty());
    }
}
