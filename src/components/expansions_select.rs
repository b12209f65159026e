//! Checkbox list of card expansions offered by the server.

use std::collections::BTreeSet;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::config::ApiConfig;
use crate::state::errors::ErrorsState;

/// Expansion picker. Fetches the available names once on mount; selection
/// lives with the caller and changes are reported through `on_toggle`.
#[component]
pub fn ExpansionsSelect(#[prop(into)] selected: Signal<BTreeSet<String>>, on_toggle: Callback<String>) -> impl IntoView {
    let errors = expect_context::<RwSignal<ErrorsState>>();
    let available = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        use crate::state::errors::ErrorSink as _;

        let config = expect_context::<ApiConfig>();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_expansions(&config).await {
                Ok(names) => available.set(names),
                Err(e) => errors.push_error(&e),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = errors;
    }

    view! {
        <fieldset class="expansions-select">
            <legend class="expansions-select__label">"Expansions"</legend>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="expansions-select__loading">"Loading expansions..."</p> }
            >
                {move || {
                    available
                        .get()
                        .into_iter()
                        .map(|name| {
                            let checked_name = name.clone();
                            let toggle_name = name.clone();
                            view! {
                                <label class="expansions-select__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selected.get().contains(&checked_name)
                                        on:change=move |_| on_toggle.run(toggle_name.clone())
                                    />
                                    {name}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <p class="expansions-select__summary">
                    {move || format!("{} selected", selected.get().len())}
                </p>
            </Show>
        </fieldset>
    }
}
