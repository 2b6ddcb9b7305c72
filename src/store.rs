//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! the rendered mirror of `TodoState`; rows about to leave stay in
//! `tasks` until their exit animation has played.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskId};
use crate::theme::Theme;

/// Rendered application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rendered rows in display order
    pub tasks: Vec<Task>,
    /// Rows playing their exit animation
    pub leaving: Vec<TaskId>,
    /// Active theme
    pub theme: Theme,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, theme: Theme) -> Self {
        Self {
            tasks,
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Append a rendered row
pub fn store_push_task(store: &AppStore, task: Task) {
    store.tasks().write().push(task);
}

/// Set the completed flag of a rendered row
pub fn store_set_completed(store: &AppStore, id: TaskId, completed: bool) {
    if let Some(task) = store.tasks().write().iter_mut().find(|t| t.id == id) {
        task.completed = completed;
    }
}

/// Completed flag of a rendered row, `false` once the row is gone
pub fn store_task_completed(store: &AppStore, id: TaskId) -> bool {
    store.tasks().read().iter().any(|t| t.id == id && t.completed)
}

/// Start the exit animation of a row
pub fn store_mark_leaving(store: &AppStore, id: TaskId) {
    store.leaving().update(|leaving| {
        if !leaving.contains(&id) {
            leaving.push(id);
        }
    });
}

/// Drop a row from the view once its exit animation is over
pub fn store_remove_task(store: &AppStore, id: TaskId) {
    store.tasks().write().retain(|t| t.id != id);
    store.leaving().write().retain(|leaving| *leaving != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::*;

    fn store_with(texts: &[&str]) -> (AppStore, Vec<Task>) {
        let tasks: Vec<Task> = texts.iter().map(|t| Task::new(*t)).collect();
        (AppStore::new(AppState::new(tasks.clone(), Theme::Standard)), tasks)
    }

    fn rendered_texts(store: &AppStore) -> Vec<String> {
        store.tasks().get_untracked().into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_leaving_row_stays_until_removed() {
        let owner = Owner::new();
        owner.set();
        let (store, tasks) = store_with(&["A", "B"]);
        let a = tasks[0].id;

        store_mark_leaving(&store, a);
        store_mark_leaving(&store, a);
        assert_eq!(store.leaving().get_untracked(), vec![a]);
        assert_eq!(rendered_texts(&store), ["A", "B"]);

        store_remove_task(&store, a);
        assert_eq!(rendered_texts(&store), ["B"]);
        assert!(store.leaving().get_untracked().is_empty());
    }

    #[test]
    fn test_push_appends_in_order() {
        let owner = Owner::new();
        owner.set();
        let (store, _) = store_with(&["A"]);

        store_push_task(&store, Task::new("B"));
        store_push_task(&store, Task::new("A"));
        assert_eq!(rendered_texts(&store), ["A", "B", "A"]);
    }

    #[test]
    fn test_set_completed_targets_one_row() {
        let owner = Owner::new();
        owner.set();
        let (store, tasks) = store_with(&["Same", "Same"]);

        store_set_completed(&store, tasks[1].id, true);
        assert!(!store_task_completed(&store, tasks[0].id));
        assert!(store_task_completed(&store, tasks[1].id));

        store_set_completed(&store, tasks[1].id, false);
        assert!(!store_task_completed(&store, tasks[1].id));
    }

    #[test]
    fn test_removed_row_reads_not_completed() {
        let owner = Owner::new();
        owner.set();
        let (store, tasks) = store_with(&["Done"]);
        let id = tasks[0].id;

        store_set_completed(&store, id, true);
        store_remove_task(&store, id);
        assert!(!store_task_completed(&store, id));
        assert!(rendered_texts(&store).is_empty());
    }
}
