use super::enums::FilterMode;
use super::task::Task;

/// Derive the visible subset of tasks for the current view.
///
/// Pure function of (tasks, filter, search term): first narrows to titles
/// containing the search term case-insensitively, then applies the view
/// predicate. Insertion order is preserved and nothing is sorted.
pub fn visible_tasks<'a>(
    tasks: &'a [Task],
    filter: FilterMode,
    search_term: &str,
) -> Vec<&'a Task> {
    let needle = search_term.to_lowercase();

    tasks
        .iter()
        .filter(|task| needle.is_empty() || task.title.to_lowercase().contains(&needle))
        .filter(|task| match filter {
            FilterMode::MyDay => task.in_my_day(),
            FilterMode::Important => task.important,
            FilterMode::Planned => task.due.is_some(),
            FilterMode::Completed => task.completed,
            FilterMode::Assigned => task.assigned,
            FilterMode::Flagged => task.flagged,
            FilterMode::All | FilterMode::Tasks => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::DueDate;
    use crate::persistence::seed_tasks;
    use pretty_assertions::assert_eq;

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn test_all_with_empty_search_returns_everything_in_order() {
        let seed = seed_tasks();
        let visible = visible_tasks(&seed, FilterMode::All, "");

        assert_eq!(visible.len(), seed.len());
        for (task, expected) in visible.iter().zip(seed.iter()) {
            assert_eq!(*task, expected);
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let seed = seed_tasks();
        let once = visible_tasks(&seed, FilterMode::Important, "");
        let once_owned: Vec<Task> = once.iter().map(|t| (*t).clone()).collect();
        let twice = visible_tasks(&once_owned, FilterMode::Important, "");

        assert_eq!(titles(&once), titles(&twice));
    }

    #[test]
    fn test_seed_important_view() {
        let seed = seed_tasks();
        let visible = visible_tasks(&seed, FilterMode::Important, "");

        assert_eq!(
            titles(&visible),
            vec![
                "Sort Microsoft Account login details".to_string(),
                "Buy groceries".to_string(),
            ]
        );
    }

    #[test]
    fn test_my_day_matches_only_the_marker() {
        let mut tasks = vec![
            Task::new(1, "In my day".to_string()),
            Task::new(2, "Dated".to_string()),
            Task::new(3, "Undated".to_string()),
        ];
        tasks[0].due = Some(DueDate::MyDay);
        tasks[1].due = Some(DueDate::On("Mon, 25 Nov 2024".to_string()));

        let visible = visible_tasks(&tasks, FilterMode::MyDay, "");
        assert_eq!(titles(&visible), vec!["In my day".to_string()]);
    }

    #[test]
    fn test_planned_matches_any_due_date() {
        let mut tasks = vec![
            Task::new(1, "In my day".to_string()),
            Task::new(2, "Dated".to_string()),
            Task::new(3, "Undated".to_string()),
        ];
        tasks[0].due = Some(DueDate::MyDay);
        tasks[1].due = Some(DueDate::On("Tomorrow".to_string()));

        let visible = visible_tasks(&tasks, FilterMode::Planned, "");
        assert_eq!(
            titles(&visible),
            vec!["In my day".to_string(), "Dated".to_string()]
        );
    }

    #[test]
    fn test_completed_view() {
        let mut tasks = vec![
            Task::new(1, "Open".to_string()),
            Task::new(2, "Closed".to_string()),
        ];
        tasks[1].completed = true;

        let visible = visible_tasks(&tasks, FilterMode::Completed, "");
        assert_eq!(titles(&visible), vec!["Closed".to_string()]);
    }

    #[test]
    fn test_assigned_and_flagged_match_explicit_flags() {
        let mut tasks = vec![
            Task::new(1, "assigned in title only".to_string()),
            Task::new(2, "Reply to email thread".to_string()),
            Task::new(3, "Actually mine".to_string()),
            Task::new(4, "Actually flagged".to_string()),
        ];
        tasks[2].assigned = true;
        tasks[3].flagged = true;

        // Title text no longer matters; only the deliberate flags do
        let assigned = visible_tasks(&tasks, FilterMode::Assigned, "");
        assert_eq!(titles(&assigned), vec!["Actually mine".to_string()]);

        let flagged = visible_tasks(&tasks, FilterMode::Flagged, "");
        assert_eq!(titles(&flagged), vec!["Actually flagged".to_string()]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let seed = seed_tasks();

        let visible = visible_tasks(&seed, FilterMode::All, "GROCERIES");
        assert_eq!(titles(&visible), vec!["Buy groceries".to_string()]);

        let visible = visible_tasks(&seed, FilterMode::All, "o");
        assert!(visible.len() > 1);
    }

    #[test]
    fn test_search_combines_with_filter() {
        let seed = seed_tasks();
        let visible = visible_tasks(&seed, FilterMode::Important, "groceries");
        assert_eq!(titles(&visible), vec!["Buy groceries".to_string()]);
    }

    #[test]
    fn test_tasks_view_passes_through() {
        let seed = seed_tasks();
        let visible = visible_tasks(&seed, FilterMode::Tasks, "");
        assert_eq!(visible.len(), seed.len());
    }

    #[test]
    fn test_new_important_task_shows_up_in_important_view() {
        use crate::domain::store::TaskStore;

        let mut store = TaskStore::new(seed_tasks());
        let id = store.create("Buy milk").unwrap();
        store.toggle_important(id).unwrap();

        let visible = visible_tasks(store.tasks(), FilterMode::Important, "");
        assert!(titles(&visible).contains(&"Buy milk".to_string()));
    }
}
