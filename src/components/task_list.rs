//! Task List Component
//!
//! Renders the store's tasks as independently mutable rows.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::{store_tasks, use_todo_store};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <ul class="task-list">
            // Keyed on content so a refetched row re-renders in viewing mode
            <For
                each=move || store_tasks(&store)
                key=|task| (task.id, task.title.clone(), task.is_completed, task.due_date.clone())
                let:task
            >
                <TaskItem task=task />
            </For>
        </ul>
    }
}
