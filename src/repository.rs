//! Task & Theme Repository
//!
//! Persists the task collection and the theme name in a key-value store.
//! Every write is a full overwrite of the stored value.

use serde::Deserialize;
use web_kv::KeyValueStore;

use crate::config::AppConfig;
use crate::error::TodoResult;
use crate::models::Task;
use crate::theme::Theme;

/// Shapes the task collection may be stored in
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTasks {
    Current(Vec<Task>),
    /// Bare texts, as written by earlier versions of the widget
    Legacy(Vec<String>),
}

impl From<StoredTasks> for Vec<Task> {
    fn from(stored: StoredTasks) -> Self {
        match stored {
            StoredTasks::Current(tasks) => tasks,
            StoredTasks::Legacy(texts) => texts.into_iter().map(Task::new).collect(),
        }
    }
}

pub struct TodoRepository<S> {
    store: S,
    todos_key: &'static str,
    theme_key: &'static str,
}

impl<S: KeyValueStore> TodoRepository<S> {
    pub fn new(store: S, config: &AppConfig) -> Self {
        Self {
            store,
            todos_key: config.todos_key,
            theme_key: config.theme_key,
        }
    }

    /// Load tasks in stored order.
    /// Absent or unparsable data yields an empty collection.
    pub fn load_tasks(&self) -> TodoResult<Vec<Task>> {
        let Some(raw) = self.store.get(self.todos_key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<StoredTasks>(&raw) {
            Ok(stored) => Ok(stored.into()),
            Err(e) => {
                log::warn!("[STORE] ignoring malformed '{}': {}", self.todos_key, e);
                Ok(Vec::new())
            }
        }
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> TodoResult<()> {
        let raw = serde_json::to_string(tasks)?;
        self.store.set(self.todos_key, &raw)?;
        Ok(())
    }

    /// Load the saved theme, `Theme::Standard` when absent or unknown
    pub fn load_theme(&self) -> TodoResult<Theme> {
        let Some(raw) = self.store.get(self.theme_key)? else {
            return Ok(Theme::default());
        };
        Ok(raw.parse().unwrap_or_else(|e| {
            log::warn!("[STORE] {}, falling back to {}", e, Theme::default());
            Theme::default()
        }))
    }

    pub fn save_theme(&self, theme: Theme) -> TodoResult<()> {
        self.store.set(self.theme_key, theme.as_str())?;
        Ok(())
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
