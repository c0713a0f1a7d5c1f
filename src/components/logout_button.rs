//! Logout Button Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::busy::run_guarded;
use crate::context::use_app_context;
use crate::messages;
use crate::routes;
use crate::store::{store_set_messages, use_todo_store};

/// Ends the session and reloads into the login page
#[component]
pub fn LogoutButton() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();
    let logging_out = RwSignal::new(false);

    let on_logout = move |_| {
        spawn_local(async move {
            match run_guarded(&logging_out, actions::logout(&ctx.api)).await {
                Some(Ok(())) => routes::full_page_load(routes::LOGIN),
                Some(Err(err)) => {
                    tracing::error!(error = %err, "logout failed");
                    store_set_messages(&store, vec![messages::LOGOUT_FAILED.to_string()]);
                }
                None => {}
            }
        });
    };

    view! {
        <button class="logout-btn" on:click=on_logout disabled=move || logging_out.get()>
            {move || if logging_out.get() { "ログアウト中…" } else { "ログアウト" }}
        </button>
    }
}
