//! To-do Frontend App
//!
//! Runs the session query, provides shared state, and routes between pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::api::browser_api;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::messages;
use crate::pages::{LoginPage, RegisterPage, TodosPage};
use crate::routes;
use crate::session::{load_session, SessionState};
use crate::store::{TodoState, TodoStore};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    let api = browser_api(config);

    // State
    let (session, set_session) = signal(SessionState::Loading);
    let reload_trigger = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(config, api, session, reload_trigger));
    provide_context(TodoStore::new(TodoState::default()));

    // One session query per page load: no retry, no refetch on focus
    spawn_local(async move {
        set_session.set(load_session(&api).await);
    });

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="status">{messages::NOT_FOUND}</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=routes::TODOS /> } />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/todos") view=TodosPage />
                </Routes>
            </main>
        </Router>
    }
}
