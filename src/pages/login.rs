//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::actions;
use crate::busy::run_guarded;
use crate::context::use_app_context;
use crate::messages;
use crate::models::Credentials;
use crate::routes;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<&'static str>);
    let submitting = RwSignal::new(false);

    let login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        spawn_local(async move {
            match run_guarded(&submitting, actions::login(&ctx.api, &credentials)).await {
                Some(Ok(())) => routes::full_page_load(routes::TODOS),
                // One message for every failure, no field detail
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "login failed");
                    set_error.set(Some(messages::LOGIN_FAILED));
                }
                None => {}
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"ログイン"</h1>
            {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
            <form class="auth-form" on:submit=login>
                <input
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || submitting.get()>"ログイン"</button>
            </form>
            <div class="auth-switch">
                <span>"アカウントをお持ちでない方は "</span>
                <A href=routes::REGISTER>"ユーザー登録はこちら"</A>
            </div>
        </div>
    }
}
