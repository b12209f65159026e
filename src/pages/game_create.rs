//! Create-game page: room name and optional password.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::net::types::CreateGamePayload;
use crate::routes;
use crate::state::errors::ErrorsState;

#[component]
pub fn GameCreatePage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let errors = expect_context::<RwSignal<ErrorsState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(payload) = CreateGamePayload::from_input(&name.get(), &password.get()) else {
            info.set("Enter a game name first.".to_owned());
            return;
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            use crate::state::errors::ErrorSink as _;

            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_game(&config, &payload).await {
                    Ok(()) => {
                        log::info!("created game {}", payload.name);
                        navigate(routes::MY_GAMES_IN_PROGRESS, NavigateOptions::default());
                    }
                    Err(e) => errors.push_error(&e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &config, &navigate, errors);
            busy.set(false);
        }
    };

    view! {
        <div class="game-create-page">
            <form class="game-create-page__form" on:submit=on_submit>
                <h1>"Create game"</h1>
                <label class="dialog__label">
                    "Game name"
                    <input
                        class="dialog__input"
                        type="text"
                        maxlength="64"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Password (optional)"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="game-create-page__info">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <a class="btn" href=routes::OPEN_GAMES>"Cancel"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
