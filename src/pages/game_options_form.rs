//! Pre-game options form shown to players waiting in a room.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the game room page while the room has not started. The form
//! owns its `StartGameForm` draft; a room poll re-rendering the page must not
//! rebuild this component or the draft is lost.
//!
//! ERROR HANDLING
//! ==============
//! A rejected start is pushed to the shared error list once and the form goes
//! back to editing with the draft intact.

use leptos::prelude::*;

use crate::components::expansions_select::ExpansionsSelect;
use crate::config::ApiConfig;
use crate::routes;
use crate::state::errors::ErrorsState;
use crate::state::game_options::MAX_HAND_SIZE;
use crate::state::games::MIN_PLAYERS;
use crate::state::start_game::{FormStatus, StartGameForm};

/// Options for hand size, round limit, czar order and expansions, plus the
/// start button.
#[component]
pub fn GameOptionsForm(
    game_id: u64,
    #[prop(into)] enough_players: Signal<bool>,
    on_started: Callback<()>,
) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let errors = expect_context::<RwSignal<ErrorsState>>();
    let form = RwSignal::new(StartGameForm::new(game_id));

    let selected = Signal::derive(move || form.with(|f| f.draft().expansions().clone()));
    let on_toggle = Callback::new(move |name: String| form.update(|f| f.toggle_expansion(&name)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(payload)) = form.try_update(|f| f.begin_submit(enough_players.get_untracked())) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::HttpGateway;
            use crate::state::start_game::submit_options;

            let gateway = HttpGateway::new(config.clone());
            leptos::task::spawn_local(async move {
                let result = submit_options(&gateway, &errors, &payload).await;
                form.update(|f| f.finish_submit(&result));
                if result.is_ok() {
                    on_started.run(());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &config, errors, on_started);
            form.update(|f| f.finish_submit(&Err(crate::error::ClientError::Unavailable)));
        }
    };

    view! {
        <form class="game-options" on:submit=on_submit>
            <h2 class="game-options__title">"Game options"</h2>

            <label class="dialog__label">
                {format!("Hand size (0 to {MAX_HAND_SIZE})")}
                <input
                    class="dialog__input"
                    type="number"
                    min="0"
                    max={MAX_HAND_SIZE.to_string()}
                    prop:value=move || form.with(|f| f.draft().hand_size().to_string())
                    on:input=move |ev| form.update(|f| f.set_hand_size(&event_target_value(&ev)))
                />
            </label>

            <label class="dialog__label">
                "Max rounds (0 for no limit)"
                <input
                    class="dialog__input"
                    type="number"
                    min="0"
                    prop:value=move || form.with(|f| f.draft().max_rounds().to_string())
                    on:input=move |ev| form.update(|f| f.set_max_rounds(&event_target_value(&ev)))
                />
            </label>

            <label class="game-options__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.draft().random_first_czar())
                    on:change=move |ev| form.update(|f| f.set_random_first_czar(event_target_checked(&ev)))
                />
                "Random first czar"
            </label>

            <ExpansionsSelect selected=selected on_toggle=on_toggle/>

            <Show when=move || !enough_players.get()>
                <p class="game-options__hint">
                    {format!("At least {MIN_PLAYERS} players are needed to start.")}
                </p>
            </Show>
            <Show when=move || form.with(|f| f.status() == FormStatus::Submitted)>
                <p class="game-options__hint">"Game started. Dealing the first round..."</p>
            </Show>

            <div class="dialog__actions">
                <a class="btn" href=routes::MY_GAMES_IN_PROGRESS>"Back"</a>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || !enough_players.get() || form.with(StartGameForm::is_submitting)
                >
                    {move || if form.with(StartGameForm::is_submitting) { "Starting..." } else { "Start game" }}
                </button>
            </div>
        </form>
    }
}
