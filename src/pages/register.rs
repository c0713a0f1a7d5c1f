//! Registration Page
//!
//! Registers, signs in with the same credentials, then reloads into the task
//! list. Visitors who already have a session are sent straight there.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::actions;
use crate::busy::run_guarded;
use crate::context::use_app_context;
use crate::error::RegisterError;
use crate::messages;
use crate::models::{Registration, ValidationErrors};
use crate::routes;
use crate::session::{gate, Access, Gate};

/// Messages for one input, rendered beneath it
fn field_errors(errors: RwSignal<ValidationErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .with(|errors| errors.field(field).to_vec())
            .into_iter()
            .map(|message| view! { <p class="field-error">{message}</p> })
            .collect_view()
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Gate::Redirect(path) = gate(&ctx.session.get(), Access::GuestOnly) {
            navigate(path, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (password_confirmation, set_password_confirmation) = signal(String::new());
    let (error, set_error) = signal(None::<&'static str>);
    let errors = RwSignal::new(ValidationErrors::new());
    let submitting = RwSignal::new(false);

    let handle_register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        errors.set(ValidationErrors::new());
        let registration = Registration {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            password_confirmation: password_confirmation.get_untracked(),
        };

        spawn_local(async move {
            match run_guarded(&submitting, actions::register(&ctx.api, &registration)).await {
                Some(Ok(())) => routes::full_page_load(routes::TODOS),
                Some(Err(RegisterError::PasswordMismatch)) => set_error.set(Some(messages::PASSWORD_MISMATCH)),
                Some(Err(RegisterError::Api(err))) => {
                    tracing::warn!(error = %err, "registration failed");
                    if let Some(fields) = err.validation() {
                        errors.set(fields.clone());
                    }
                    set_error.set(Some(messages::REGISTER_FAILED));
                }
                None => {}
            }
        });
    };

    view! {
        <div class="auth-page register">
            <h1>"ユーザー登録"</h1>
            {move || error.get().map(|message| view! { <div class="error">{message}</div> })}
            <form class="auth-form" on:submit=handle_register>
                <div>
                    <label>"名前"</label>
                    <input
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    {field_errors(errors, "name")}
                </div>
                <div>
                    <label>"メールアドレス"</label>
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    {field_errors(errors, "email")}
                </div>
                <div>
                    <label>"パスワード"</label>
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    {field_errors(errors, "password")}
                </div>
                <div>
                    <label>"パスワード（確認）"</label>
                    <input
                        type="password"
                        required
                        prop:value=move || password_confirmation.get()
                        on:input=move |ev| set_password_confirmation.set(event_target_value(&ev))
                    />
                    {field_errors(errors, "password_confirmation")}
                </div>
                <button type="submit" disabled=move || submitting.get()>"登録"</button>
            </form>
            <div class="auth-switch">
                <A href=routes::LOGIN>"ログインはこちら"</A>
            </div>
        </div>
    }
}
