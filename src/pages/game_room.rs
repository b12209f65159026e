//! Game room page: lobby before the game starts, the live table after.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route carries `gameID`. The room's lobby state is fetched on mount and
//! polled while the page is open. Once the room reports a started phase the
//! page subscribes to the state WebSocket for that room's `stateID`; every
//! pushed snapshot replaces the shared `SessionStore`.
//!
//! Player actions (join, leave, play cards, choose winner) are plain REST
//! calls. Their results arrive through the next snapshot or poll, never by
//! editing local state.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::hand::Hand;
use crate::components::table::Table;
use crate::config::ApiConfig;
use crate::net::types::{GameRoom, Phase, PlayCardsPayload, SessionState};
use crate::pages::game_options_form::GameOptionsForm;
use crate::state::errors::ErrorsState;
use crate::state::games::enough_players;
use crate::state::hand::HandSelection;
use crate::state::session::{ConnectionStatus, SessionStore};

#[cfg(feature = "hydrate")]
const LOBBY_POLL_SECS: u64 = 5;

#[component]
pub fn GameRoomPage() -> impl IntoView {
    let params = use_params_map();
    let game_id = move || params.read().get("gameID").and_then(|raw| raw.parse::<u64>().ok());

    move || match game_id() {
        Some(id) => view! { <RoomBody game_id=id/> }.into_any(),
        None => view! { <p class="game-room__missing">"Unknown game."</p> }.into_any(),
    }
}

#[component]
fn RoomBody(game_id: u64) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let errors = expect_context::<RwSignal<ErrorsState>>();
    let session = expect_context::<RwSignal<SessionStore>>();

    let room = RwSignal::new(None::<GameRoom>);
    let selection = RwSignal::new(HandSelection::default());
    session.update(SessionStore::reset);

    let reload = {
        let config = config.clone();
        Callback::new(move |()| load_room(config.clone(), game_id, room, Some(errors)))
    };
    reload.run(());

    // Only flips once per room, so polls that change the player list do not
    // rebuild the options form.
    let state_id = Memo::new(move |_| room.get().filter(GameRoom::has_started).map(|r| r.state_id));
    let started = Memo::new(move |_| state_id.get().is_some());
    let enough = Signal::derive(move || room.with(|r| r.as_ref().is_some_and(enough_players)));

    let round_key = Memo::new(move |_| {
        session.with(|s| s.state.as_ref().map(|st| (st.id, st.current_round, st.phase)))
    });
    Effect::new(move || {
        round_key.track();
        selection.update(HandSelection::clear);
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::net::state_socket::{StateSocketHandle, spawn_state_socket};

        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let poll_config = config.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(LOBBY_POLL_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                load_room(poll_config.clone(), game_id, room, None);
            }
        });

        let socket = StateSocketHandle::new();
        let socket_task = socket.clone();
        let socket_config = config.clone();
        let subscribed = RwSignal::new(false);
        Effect::new(move || {
            let Some(id) = state_id.get() else {
                return;
            };
            if subscribed.get_untracked() {
                return;
            }
            subscribed.set(true);
            log::info!("subscribing to state {id} for game {game_id}");
            spawn_state_socket(socket_config.clone(), id, session, socket_task.clone());
        });

        on_cleanup(move || {
            poll_alive.store(false, std::sync::atomic::Ordering::Relaxed);
            socket.stop();
            session.update(SessionStore::reset);
        });
    }

    let join = {
        let config = config.clone();
        Callback::new(move |()| {
            #[cfg(feature = "hydrate")]
            {
                use crate::state::errors::ErrorSink as _;

                let config = config.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::join_game(&config, game_id).await {
                        Ok(()) => reload.run(()),
                        Err(e) => errors.push_error(&e),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &config;
            }
        })
    };

    let leave = {
        let config = config.clone();
        Callback::new(move |()| {
            #[cfg(feature = "hydrate")]
            {
                use crate::state::errors::ErrorSink as _;

                let config = config.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::leave_game(&config, game_id).await {
                        Ok(()) => reload.run(()),
                        Err(e) => errors.push_error(&e),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &config;
            }
        })
    };

    let play = {
        let config = config.clone();
        Callback::new(move |payload: PlayCardsPayload| {
            let Some(state_id) = state_id.get_untracked() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                use crate::state::errors::ErrorSink as _;

                let config = config.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::play_cards(&config, state_id, &payload).await {
                        Ok(()) => selection.update(HandSelection::clear),
                        Err(e) => errors.push_error(&e),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&config, state_id, payload);
            }
        })
    };

    let choose = Callback::new(move |winner: u64| {
        let Some(state_id) = state_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            use crate::state::errors::ErrorSink as _;

            let config = config.clone();
            let payload = crate::net::types::ChooseWinnerPayload { winner };
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::choose_winner(&config, state_id, &payload).await {
                    errors.push_error(&e);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, state_id, winner);
        }
    });

    view! {
        <div class="game-room">
            <header class="game-room__header toolbar">
                <h1 class="game-room__name">
                    {move || room.get().map_or_else(|| "Loading game...".to_owned(), |r| r.name)}
                </h1>
                <span class="game-room__phase">{move || room.get().map(|r| r.phase().label()).unwrap_or_default()}</span>
                <span class="toolbar__spacer"></span>
                <Show when=move || started.get()>
                    <span
                        class="game-room__connection"
                        title=move || format!("{} updates received", session.with(|s| s.revision))
                    >
                        {move || connection_label(session.get().connection_status)}
                    </span>
                </Show>
            </header>

            <Show
                when=move || started.get()
                fallback=move || {
                    view! {
                        <section class="game-room__lobby">
                            <h2>"Players"</h2>
                            <ul class="game-room__players">
                                {move || {
                                    room.get()
                                        .map(|r| r.players)
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|name| view! { <li>{name}</li> })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                            <div class="game-room__actions">
                                <button class="btn" on:click=move |_| join.run(())>"Join"</button>
                                <button class="btn" on:click=move |_| leave.run(())>"Leave"</button>
                            </div>
                            <GameOptionsForm game_id=game_id enough_players=enough on_started=reload/>
                        </section>
                    }
                }
            >
                {move || match session.get().state {
                    Some(state) => {
                        view! {
                            <RoundStatus state=state.clone()/>
                            <Scoreboard state=state.clone()/>
                            <Table state=state.clone() on_choose_winner=choose/>
                            <Hand state=state selection=selection on_play=play/>
                        }
                            .into_any()
                    }
                    None => view! { <p class="game-room__waiting">"Waiting for the game state..."</p> }.into_any(),
                }}
            </Show>
        </div>
    }
}

/// One-line summary of what the table is waiting on.
#[component]
fn RoundStatus(state: SessionState) -> impl IntoView {
    let czar = state.czar().map(|p| p.name.clone()).unwrap_or_default();
    let round = if state.max_rounds > 0 {
        format!("Round {} of {}", state.current_round, state.max_rounds)
    } else {
        format!("Round {}", state.current_round)
    };
    let waiting = match state.phase {
        Phase::Finished => "Game over.".to_owned(),
        Phase::CzarChoosingWinner if state.viewer_is_czar() => "Pick the winning card.".to_owned(),
        Phase::CzarChoosingWinner => format!("{czar} is choosing a winner."),
        Phase::SinnersPlaying if state.viewer_is_czar() => "You are the czar. Wait for the plays.".to_owned(),
        Phase::SinnersPlaying if state.viewer_has_played() => "Waiting for the other players.".to_owned(),
        Phase::SinnersPlaying => "Pick your white cards.".to_owned(),
        Phase::NotStarted => String::new(),
    };

    view! {
        <p class="game-room__status">
            <span class="game-room__round">{round}</span>
            " "
            <span>{waiting}</span>
        </p>
    }
}

/// Player standings with czar and played markers.
#[component]
fn Scoreboard(state: SessionState) -> impl IntoView {
    let czar_index = state.current_czar_index;
    let rows = state
        .players
        .into_iter()
        .enumerate()
        .map(|(idx, player)| {
            let marker = if idx == czar_index {
                "czar"
            } else if player.has_played {
                "played"
            } else {
                ""
            };
            view! {
                <li class="scoreboard__row" class:scoreboard__row--czar={idx == czar_index}>
                    <span class="scoreboard__name">{player.name}</span>
                    <span class="scoreboard__points">{player.points}</span>
                    <span class="scoreboard__marker">{marker}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! { <ul class="scoreboard">{rows}</ul> }
}

fn connection_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "live",
        ConnectionStatus::Connecting => "connecting",
        ConnectionStatus::Disconnected => "offline",
    }
}

/// Fetch the room's lobby state. Failures go to `errors` when given; the
/// background poll passes `None` and only logs them.
fn load_room(config: ApiConfig, game_id: u64, room: RwSignal<Option<GameRoom>>, errors: Option<RwSignal<ErrorsState>>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::errors::ErrorSink as _;

        match crate::net::api::fetch_lobby_state(&config, game_id).await {
            Ok(next) => {
                if room.get_untracked().as_ref() != Some(&next) {
                    room.set(Some(next));
                }
            }
            Err(e) => match errors {
                Some(errors) => errors.push_error(&e),
                None => log::warn!("lobby poll for game {game_id} failed: {e}"),
            },
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, game_id, room, errors);
    }
}
