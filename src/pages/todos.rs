//! Task List Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;

use crate::actions;
use crate::components::{ErrorList, LogoutButton, TaskForm, TaskList};
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::messages;
use crate::routes;
use crate::session::{gate, Access, Gate};
use crate::store::{store_clear_messages, store_messages, store_set_messages, store_set_tasks, use_todo_store};

#[component]
pub fn TodosPage() -> impl IntoView {
    let ctx = use_app_context();

    move || match gate(&ctx.session.get(), Access::Protected) {
        Gate::Loading => view! { <div class="status">{messages::LOADING}</div> }.into_any(),
        Gate::Error => view! { <div class="status error">{messages::GENERIC_ERROR}</div> }.into_any(),
        Gate::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
        Gate::Render => view! { <TodoBoard /> }.into_any(),
    }
}

/// Signed-in view; refetches the list whenever the reload trigger fires.
/// Only the response to the newest reload is applied.
#[component]
fn TodoBoard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let session = ctx.session.get_untracked();
        spawn_local(async move {
            let latest = move || ctx.reload_trigger.get_untracked();
            match actions::refresh_tasks(&ctx.api, &session, trigger, latest).await {
                Some(Ok(tasks)) => {
                    tracing::debug!(count = tasks.len(), trigger, "tasks loaded");
                    store_set_tasks(&store, tasks);
                }
                Some(Err(ApiError::Unauthorized)) => routes::full_page_load(routes::LOGIN),
                Some(Err(err)) => {
                    tracing::error!(error = %err, "loading tasks failed");
                    store_set_messages(&store, vec![messages::TASK_LOAD_FAILED.to_string()]);
                }
                None => {}
            }
        });
    });

    on_cleanup(move || store_clear_messages(&store));

    view! {
        <div class="todo-page">
            <header class="todo-header">
                <h1>"タスクリスト"</h1>
                <LogoutButton />
            </header>
            <ErrorList messages=Signal::derive(move || store_messages(&store)) />
            <TaskForm />
            <TaskList />
        </div>
    }
}
