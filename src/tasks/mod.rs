//! Task List State
//!
//! Authoritative task list and active theme, mirrored to the repository
//! on every mutation.

#[cfg(test)]
mod tests;

use web_kv::KeyValueStore;

use crate::error::{TodoError, TodoResult};
use crate::models::{Task, TaskId};
use crate::repository::TodoRepository;
use crate::theme::Theme;

pub struct TodoState<S> {
    repo: TodoRepository<S>,
    tasks: Vec<Task>,
    theme: Theme,
}

impl<S: KeyValueStore> TodoState<S> {
    /// Read the persisted tasks and theme
    pub fn load(repo: TodoRepository<S>) -> TodoResult<Self> {
        let tasks = repo.load_tasks()?;
        let theme = repo.load_theme()?;
        log::debug!("[TASKS] loaded {} tasks, theme={}", tasks.len(), theme);
        Ok(Self { repo, tasks, theme })
    }

    /// Empty state over `repo`, used when the stored data cannot be read
    pub fn empty(repo: TodoRepository<S>) -> Self {
        Self { repo, tasks: Vec::new(), theme: Theme::default() }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Append a task with the trimmed `text`.
    /// Whitespace-only input is rejected without touching any state.
    pub fn add(&mut self, text: &str) -> TodoResult<Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }
        let task = Task::new(text);
        self.tasks.push(task.clone());
        if let Err(e) = self.repo.save_tasks(&self.tasks) {
            self.tasks.pop();
            return Err(e);
        }
        log::debug!("[TASKS] added {}", task.id);
        Ok(task)
    }

    /// Flip the completed flag, returning the new value
    pub fn toggle(&mut self, id: TaskId) -> TodoResult<bool> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))?;
        let completed = !self.tasks[index].completed;
        self.tasks[index].completed = completed;
        if let Err(e) = self.repo.save_tasks(&self.tasks) {
            self.tasks[index].completed = !completed;
            return Err(e);
        }
        log::debug!("[TASKS] toggled {} -> {}", id, completed);
        Ok(completed)
    }

    /// Remove exactly the task with `id`
    pub fn delete(&mut self, id: TaskId) -> TodoResult<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))?;
        let removed = self.tasks.remove(index);
        if let Err(e) = self.repo.save_tasks(&self.tasks) {
            self.tasks.insert(index, removed);
            return Err(e);
        }
        log::debug!("[TASKS] deleted {}", id);
        Ok(removed)
    }

    pub fn change_theme(&mut self, theme: Theme) -> TodoResult<()> {
        self.repo.save_theme(theme)?;
        self.theme = theme;
        log::debug!("[THEME] switched to {}", theme);
        Ok(())
    }
}
