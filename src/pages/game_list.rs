//! Lobby pages listing open games and the viewer's games in progress.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both routes render the same list page; the `GameListKind` picks the
//! endpoint. Lists are fetched on mount and on refresh; failures are pushed
//! to the error sink and also kept in `GamesState::error` for inline display.

use leptos::prelude::*;

use crate::components::game_card::GameCard;
use crate::config::ApiConfig;
use crate::routes;
use crate::state::errors::ErrorsState;
use crate::state::games::{GameListKind, GamesState};

#[component]
pub fn OpenGamesPage() -> impl IntoView {
    view! { <GameListPage kind=GameListKind::Open/> }
}

#[component]
pub fn MyGamesInProgressPage() -> impl IntoView {
    view! { <GameListPage kind=GameListKind::InProgress/> }
}

#[component]
fn GameListPage(kind: GameListKind) -> impl IntoView {
    let games = expect_context::<RwSignal<GamesState>>();
    let errors = expect_context::<RwSignal<ErrorsState>>();
    let config = expect_context::<ApiConfig>();

    let refresh = Callback::new(move |()| load_games(config.clone(), kind, games, errors));
    refresh.run(());

    let (title, empty_text) = match kind {
        GameListKind::Open => ("Open games", "No open games right now."),
        GameListKind::InProgress => ("My games in progress", "You are not playing any game yet."),
    };

    view! {
        <div class="game-list-page">
            <header class="game-list-page__header toolbar">
                <nav class="game-list-page__tabs">
                    <a
                        class="game-list-page__tab"
                        class:game-list-page__tab--active={kind == GameListKind::InProgress}
                        href=routes::MY_GAMES_IN_PROGRESS
                    >
                        "My games"
                    </a>
                    <a
                        class="game-list-page__tab"
                        class:game-list-page__tab--active={kind == GameListKind::Open}
                        href=routes::OPEN_GAMES
                    >
                        "Open games"
                    </a>
                </nav>
                <span class="toolbar__spacer"></span>
                <button class="btn" on:click=move |_| refresh.run(()) title="Refresh">
                    "Refresh"
                </button>
            </header>

            <h1 class="game-list-page__title">{title}</h1>
            <Show when=move || games.get().error.is_some()>
                <p class="game-list-page__error">{move || games.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !games.get().loading
                fallback=move || view! { <p>"Loading games..."</p> }
            >
                {move || {
                    let rooms = games.get().list(kind).to_vec();
                    if rooms.is_empty() {
                        view! { <p class="game-list-page__empty">{empty_text}</p> }.into_any()
                    } else {
                        view! {
                            <div class="game-list-page__cards">
                                {rooms
                                    .into_iter()
                                    .map(|room| view! { <GameCard room=room/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}

fn load_games(config: ApiConfig, kind: GameListKind, games: RwSignal<GamesState>, errors: RwSignal<ErrorsState>) {
    games.update(GamesState::begin_load);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::errors::ErrorSink as _;

        let result = match kind {
            GameListKind::Open => crate::net::api::fetch_open_games(&config).await,
            GameListKind::InProgress => crate::net::api::fetch_in_progress_games(&config).await,
        };
        if let Err(e) = &result {
            errors.push_error(e);
        }
        games.update(|s| s.finish_load(kind, result));
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, kind, errors);
        games.update(|s| s.loading = false);
    }
}
