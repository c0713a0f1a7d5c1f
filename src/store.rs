//! Task List Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The backend is the
//! source of truth: `tasks` is only ever replaced wholesale by a refetch.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;

#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Tasks of the signed-in user, in server order
    pub tasks: Vec<Task>,
    /// Messages shown above the task form (422 field errors or a generic line)
    pub messages: Vec<String>,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_tasks(store: &TodoStore) -> Vec<Task> {
    store.tasks().get()
}

pub fn store_set_tasks(store: &TodoStore, tasks: Vec<Task>) {
    store.tasks().set(tasks);
}

pub fn store_messages(store: &TodoStore) -> Vec<String> {
    store.messages().get()
}

pub fn store_set_messages(store: &TodoStore, messages: Vec<String>) {
    store.messages().set(messages);
}

pub fn store_clear_messages(store: &TodoStore) {
    store.messages().write().clear();
}

/// Clear the messages only if every one of them is in `owned`.
///
/// Lets a task row drop its own failure line without wiping form errors.
pub fn release_messages(current: &mut Vec<String>, owned: &[&str]) -> bool {
    if current.is_empty() || !current.iter().all(|message| owned.contains(&message.as_str())) {
        return false;
    }
    current.clear();
    true
}

pub fn store_release_messages(store: &TodoStore, owned: &[&str]) {
    store.messages().update(|messages| {
        release_messages(messages, owned);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &[&str] = &["update failed", "delete failed"];

    #[test]
    fn test_row_releases_its_own_message() {
        let mut messages = vec!["delete failed".to_string()];
        assert!(release_messages(&mut messages, ROW));
        assert!(messages.is_empty());
    }

    #[test]
    fn test_form_errors_survive_row_release() {
        let mut messages = vec!["title is required".to_string(), "due date is invalid".to_string()];
        assert!(!release_messages(&mut messages, ROW));
        assert_eq!(messages.len(), 2);

        let mut empty = Vec::new();
        assert!(!release_messages(&mut empty, ROW));
    }
}
