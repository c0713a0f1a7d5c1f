//! Error List Component

use leptos::prelude::*;

/// Messages listed above a form; renders nothing when empty
#[component]
pub fn ErrorList(#[prop(into)] messages: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || !messages.get().is_empty()>
            <ul class="error-list">
                {move || messages.get().into_iter().map(|message| view! { <li>{message}</li> }).collect_view()}
            </ul>
        </Show>
    }
}
