//! Task Item Component
//!
//! One row of the task list: viewing or editing, with its own busy flags for
//! toggle and delete so rows never block each other.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::busy::run_guarded;
use crate::components::EditTaskForm;
use crate::context::use_app_context;
use crate::due_date;
use crate::messages;
use crate::models::Task;
use crate::store::{store_release_messages, store_set_messages, use_todo_store};

/// Failure lines a row may put above the form, and clear again on success
const ROW_MESSAGES: &[&str] = &[messages::TASK_UPDATE_FAILED, messages::TASK_DELETE_FAILED];

/// Row class; completed rows are struck through by the stylesheet
pub fn task_row_class(task: &Task) -> &'static str {
    if task.is_completed {
        "task-row completed"
    } else {
        "task-row"
    }
}

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    let (editing, set_editing) = signal(false);
    let toggling = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let row_class = task_row_class(&task);
    let due_label = task
        .due_date
        .as_deref()
        .and_then(|value| due_date::to_display(value, &Local))
        .map(|shown| format!("期限: {}", shown));

    let toggle_task = {
        let task = task.clone();
        move |_| {
            let task = task.clone();
            spawn_local(async move {
                match run_guarded(&toggling, actions::toggle_task(&ctx.api, &task)).await {
                    Some(Ok(())) => {
                        store_release_messages(&store, ROW_MESSAGES);
                        ctx.reload();
                    }
                    Some(Err(err)) => {
                        tracing::warn!(id = task.id, error = %err, "toggle failed");
                        store_set_messages(&store, vec![messages::TASK_UPDATE_FAILED.to_string()]);
                        // Re-sync in case the backend applied it anyway
                        ctx.reload();
                    }
                    None => {}
                }
            });
        }
    };

    let id = task.id;
    let delete_task = move |_| {
        spawn_local(async move {
            match run_guarded(&deleting, actions::delete_task(&ctx.api, id)).await {
                Some(Ok(())) => {
                    store_release_messages(&store, ROW_MESSAGES);
                    ctx.reload();
                }
                Some(Err(err)) => {
                    tracing::warn!(id, error = %err, "delete failed");
                    store_set_messages(&store, vec![messages::TASK_DELETE_FAILED.to_string()]);
                }
                None => {}
            }
        });
    };

    let title = task.title.clone();

    view! {
        <li class=row_class>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <div class="task-view">
                        <div class="task-summary" on:click=move |_| set_editing.set(true)>
                            <span class="task-title">{title.clone()}</span>
                            {due_label.clone().map(|label| view! { <div class="task-due">{label}</div> })}
                        </div>
                        <div class="task-actions">
                            <button on:click=toggle_task.clone() disabled=move || toggling.get()>"完了"</button>
                            <button on:click=delete_task disabled=move || deleting.get()>"削除"</button>
                        </div>
                    </div>
                }
            >
                <EditTaskForm task=task.clone() set_editing=set_editing />
            </Show>
        </li>
    }
}
