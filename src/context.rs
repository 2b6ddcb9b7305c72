//! Application Context
//!
//! Explicit state holder provided via Leptos Context API. Components
//! mutate tasks and theme only through these methods, which keep the
//! persisted `TodoState` and the rendered `AppStore` in step.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_kv::WebStorage;

use crate::config::AppConfig;
use crate::error::{TodoError, TodoResult};
use crate::models::TaskId;
use crate::store::{self, AppState, AppStateStoreFields, AppStore};
use crate::tasks::TodoState;
use crate::theme::{self, Theme};

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Rendered state
    pub store: AppStore,
    /// Persisted state
    state: StoredValue<TodoState<WebStorage>>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(state: TodoState<WebStorage>, config: AppConfig) -> Self {
        let store = AppStore::new(AppState::new(state.tasks().to_vec(), state.theme()));
        Self {
            store,
            state: StoredValue::new(state),
            config,
        }
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut TodoState<WebStorage>) -> TodoResult<T>) -> TodoResult<T> {
        self.state
            .try_update_value(f)
            .unwrap_or_else(|| Err(TodoError::Storage(web_kv::StorageError::Unavailable)))
    }

    pub fn theme(&self) -> Theme {
        self.store.theme().get()
    }

    /// Add a task from raw input text
    pub fn add_task(&self, text: &str) -> TodoResult<()> {
        let task = self.with_state(|state| state.add(text))?;
        store::store_push_task(&self.store, task);
        Ok(())
    }

    pub fn toggle_task(&self, id: TaskId) -> TodoResult<()> {
        let completed = self.with_state(|state| state.toggle(id))?;
        store::store_set_completed(&self.store, id, completed);
        Ok(())
    }

    /// Remove the task from storage immediately; the row plays its exit
    /// animation and leaves the view when the timer fires.
    pub fn delete_task(&self, id: TaskId) -> TodoResult<()> {
        self.with_state(|state| state.delete(id))?;
        store::store_mark_leaving(&self.store, id);

        let rendered = self.store;
        Timeout::new(self.config.fall_animation_ms, move || {
            store::store_remove_task(&rendered, id);
        })
        .forget();
        Ok(())
    }

    pub fn change_theme(&self, theme: Theme) -> TodoResult<()> {
        self.with_state(|state| state.change_theme(theme))?;
        self.store.theme().set(theme);
        Ok(())
    }

    /// Apply the active theme to elements outside the component tree
    pub fn apply_theme_to_document(&self) {
        theme::apply_to_document(self.theme(), self.config.title_id);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Log a failed action; only empty input is surfaced to the user
pub fn report(action: &str, result: TodoResult<()>) {
    if let Err(e) = result {
        report_error(action, &e);
    }
}

pub fn report_error(action: &str, error: &TodoError) {
    match error {
        TodoError::EmptyText | TodoError::NotFound(_) => log::warn!("[TASKS] {} skipped: {}", action, error),
        _ => log::error!("[TASKS] {} failed: {}", action, error),
    }
}
