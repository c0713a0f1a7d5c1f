//! Edit Task Form Component
//!
//! Inline editor for a row's title and due date.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, EditBuffer, TimeContext};
use crate::busy::run_guarded;
use crate::context::use_app_context;
use crate::models::Task;
use crate::store::{store_clear_messages, store_set_messages, use_todo_store};

#[component]
pub fn EditTaskForm(task: Task, set_editing: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    let seeded = EditBuffer::from_task(&task, &Local);
    let (edit_title, set_edit_title) = signal(seeded.title);
    let (edit_due, set_edit_due) = signal(seeded.due_date);
    let saving = RwSignal::new(false);
    let id = task.id;

    let save_task = move |_| {
        let buffer = EditBuffer {
            title: edit_title.get_untracked(),
            due_date: edit_due.get_untracked(),
        };
        spawn_local(async move {
            let time = TimeContext::browser(&ctx.config);
            let Some(result) = run_guarded(&saving, actions::save_task(&ctx.api, id, &buffer, &time)).await else {
                return;
            };
            match result {
                Ok(()) => {
                    store_clear_messages(&store);
                    set_editing.set(false);
                    ctx.reload();
                }
                // Stay in editing mode with the messages shown
                Err(err) => {
                    tracing::warn!(id, error = %err, "save failed");
                    store_set_messages(&store, actions::task_form_messages(&err));
                }
            }
        });
    };

    // Buffers are dropped with the component
    let cancel_edit = move |_| set_editing.set(false);

    view! {
        <div class="task-edit">
            <input
                type="text"
                prop:value=move || edit_title.get()
                on:input=move |ev| set_edit_title.set(event_target_value(&ev))
            />
            <input
                type="datetime-local"
                prop:value=move || edit_due.get()
                on:input=move |ev| set_edit_due.set(event_target_value(&ev))
            />
            <div class="task-edit-actions">
                <button on:click=save_task disabled=move || saving.get()>
                    {move || if saving.get() { "保存中..." } else { "保存" }}
                </button>
                <button on:click=cancel_edit>"キャンセル"</button>
            </div>
        </div>
    }
}
