//! Task Form Component
//!
//! Form for creating new tasks with an optional due date.

use chrono::{Local, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, TimeContext};
use crate::busy::run_guarded;
use crate::context::use_app_context;
use crate::due_date::{self, DueDateError};
use crate::error::TaskFormError;
use crate::messages;
use crate::routes;
use crate::store::{store_clear_messages, store_set_messages, use_todo_store};

#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    let (title, set_title) = signal(String::new());
    let (due_input, set_due_input) = signal(String::new());
    let posting = RwSignal::new(false);

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get_untracked();
        let due_value = due_input.get_untracked();

        spawn_local(async move {
            let time = TimeContext::browser(&ctx.config);
            let create = actions::create_task(&ctx.api, &title_value, &due_value, &time);
            let Some(result) = run_guarded(&posting, create).await else {
                return;
            };
            match result {
                Ok(()) => {
                    set_title.set(String::new());
                    set_due_input.set(String::new());
                    store_clear_messages(&store);
                    ctx.reload();
                }
                Err(TaskFormError::EmptyTitle) => {}
                Err(TaskFormError::DueDate(DueDateError::InPast)) => {
                    routes::alert(messages::DUE_DATE_IN_PAST);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "task creation failed");
                    store_set_messages(&store, actions::task_form_messages(&err));
                }
            }
        });
    };

    view! {
        <form class="task-form" on:submit=add_task>
            <input
                type="text"
                class="task-title-input"
                placeholder="新しいタスクを追加"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="datetime-local"
                class="task-due-input"
                prop:value=move || due_input.get()
                min=move || due_date::min_input_value(Utc::now(), &Local)
                on:input=move |ev| set_due_input.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || posting.get()>"追加"</button>
        </form>
    }
}
