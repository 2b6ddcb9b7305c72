//! Task List State Tests
//!
//! Scenario tests against an in-memory store. "Reload" means building a
//! fresh `TodoState` over the same store.

use web_kv::{KeyValueStore, MemoryStore, StorageError, StorageResult};

use crate::config::AppConfig;
use crate::error::TodoError;
use crate::repository::TodoRepository;
use crate::tasks::TodoState;
use crate::theme::Theme;

fn open(store: &MemoryStore) -> TodoState<&MemoryStore> {
    TodoState::load(TodoRepository::new(store, &AppConfig::default())).expect("Failed to load")
}

fn texts<S: KeyValueStore>(state: &TodoState<S>) -> Vec<String> {
    state.tasks().iter().map(|t| t.text.clone()).collect()
}

#[test]
fn test_add_survives_reload() {
    let store = MemoryStore::new();
    open(&store).add("Buy milk").unwrap();

    let reloaded = open(&store);
    assert_eq!(texts(&reloaded), ["Buy milk"]);
}

#[test]
fn test_add_trims_text() {
    let store = MemoryStore::new();
    let task = open(&store).add("  Call mom \n").unwrap();
    assert_eq!(task.text, "Call mom");
}

#[test]
fn test_empty_add_is_rejected() {
    let store = MemoryStore::new();
    let mut state = open(&store);
    state.add("A").unwrap();
    let before = store.get("todos").unwrap();

    for input in ["", "   ", "\t\n"] {
        assert!(matches!(state.add(input), Err(TodoError::EmptyText)));
    }
    assert_eq!(store.get("todos").unwrap(), before);
    assert_eq!(texts(&state), ["A"]);
}

#[test]
fn test_delete_leaves_remaining() {
    let store = MemoryStore::new();
    let mut state = open(&store);
    let a = state.add("A").unwrap();
    state.add("B").unwrap();

    state.delete(a.id).unwrap();
    assert_eq!(texts(&state), ["B"]);
    assert_eq!(texts(&open(&store)), ["B"]);
}

#[test]
fn test_delete_targets_one_duplicate() {
    let store = MemoryStore::new();
    let mut state = open(&store);
    let first = state.add("Same").unwrap();
    let second = state.add("Same").unwrap();

    state.delete(second.id).unwrap();
    let reloaded = open(&store);
    assert_eq!(reloaded.tasks().len(), 1);
    assert_eq!(reloaded.tasks()[0].id, first.id);
}

#[test]
fn test_completion_is_persisted() {
    let store = MemoryStore::new();
    let mut state = open(&store);
    let task = state.add("Walk dog").unwrap();

    assert!(state.toggle(task.id).unwrap());
    assert!(open(&store).tasks()[0].completed);

    assert!(!state.toggle(task.id).unwrap());
    assert!(!open(&store).tasks()[0].completed);
}

#[test]
fn test_unknown_id_is_not_found() {
    let store = MemoryStore::new();
    let mut state = open(&store);
    let task = state.add("A").unwrap();
    state.delete(task.id).unwrap();

    assert!(matches!(state.delete(task.id), Err(TodoError::NotFound(id)) if id == task.id));
    assert!(matches!(state.toggle(task.id), Err(TodoError::NotFound(_))));
}

#[test]
fn test_reload_keeps_insertion_order() {
    let store = MemoryStore::new();
    let mut state = open(&store);
    let ids: Vec<_> = ["one", "two", "three", "four", "five"]
        .iter()
        .map(|t| state.add(t).unwrap().id)
        .collect();
    state.delete(ids[1]).unwrap();
    state.add("six").unwrap();
    state.delete(ids[3]).unwrap();

    assert_eq!(texts(&open(&store)), ["one", "three", "five", "six"]);
}

#[test]
fn test_legacy_data_rewritten_on_mutation() {
    let store = MemoryStore::with_entries([("todos", r#"["Old task"]"#)]);
    let mut state = open(&store);
    state.add("New task").unwrap();

    let raw = store.get("todos").unwrap().unwrap();
    assert!(raw.contains(r#""id""#));
    assert_eq!(texts(&open(&store)), ["Old task", "New task"]);
}

#[test]
fn test_theme_change_persists() {
    let store = MemoryStore::new();
    let mut state = open(&store);
    assert_eq!(state.theme(), Theme::Standard);

    state.change_theme(Theme::Darker).unwrap();
    assert_eq!(open(&store).theme(), Theme::Darker);

    state.change_theme(Theme::Standard).unwrap();
    assert_eq!(store.get("savedTheme").unwrap().as_deref(), Some("standard"));
}

/// Store whose writes always fail
struct ReadOnlyStore(MemoryStore);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.0.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Backend("QuotaExceededError".to_string()))
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::Backend("QuotaExceededError".to_string()))
    }
}

#[test]
fn test_failed_write_keeps_state() {
    let store = MemoryStore::new();
    let kept = open(&store).add("Kept").unwrap();

    let repo = TodoRepository::new(ReadOnlyStore(store), &AppConfig::default());
    let mut state = TodoState::load(repo).unwrap();

    assert!(matches!(state.add("Lost"), Err(TodoError::Storage(_))));
    assert!(matches!(state.delete(kept.id), Err(TodoError::Storage(_))));
    assert!(matches!(state.toggle(kept.id), Err(TodoError::Storage(_))));
    assert!(matches!(state.change_theme(Theme::Light), Err(TodoError::Storage(_))));

    assert_eq!(texts(&state), ["Kept"]);
    assert!(!state.tasks()[0].completed);
    assert_eq!(state.theme(), Theme::Standard);
}
