//! Dismissable list of errors reported through the shared sink.

use leptos::prelude::*;

use crate::state::errors::ErrorsState;

#[component]
pub fn ErrorList() -> impl IntoView {
    let errors = expect_context::<RwSignal<ErrorsState>>();

    view! {
        <div class="error-list" role="alert">
            {move || {
                errors
                    .get()
                    .entries
                    .into_iter()
                    .map(|entry| {
                        let id = entry.id;
                        view! {
                            <div class="error-list__item">
                                <span class="error-list__message">{entry.message}</span>
                                <button
                                    class="btn error-list__dismiss"
                                    on:click=move |_| errors.update(|s| s.dismiss(id))
                                    title="Dismiss"
                                    aria-label="Dismiss"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <Show when=move || errors.with(|s| s.entries.len() > 1)>
                <button class="btn error-list__clear" on:click=move |_| errors.update(ErrorsState::clear)>
                    "Dismiss all"
                </button>
            </Show>
        </div>
    }
}
