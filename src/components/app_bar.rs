//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::{self, AppRoute};

/// Navigation links. The link for the current lobby route is highlighted.
#[component]
pub fn AppBar() -> impl IntoView {
    let location = use_location();
    let current = Memo::new(move |_| AppRoute::resolve(&location.pathname.get()));
    let is_active = move |route: AppRoute| move || current.get() == Some(route);

    view! {
        <header class="app-bar toolbar">
            <span class="app-bar__title">"Cards Against Humanity"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <nav class="app-bar__nav">
                <a
                    class="btn"
                    class:btn--active={is_active(AppRoute::MyGamesInProgress)}
                    href=routes::MY_GAMES_IN_PROGRESS
                >
                    "My games"
                </a>
                <a class="btn" class:btn--active={is_active(AppRoute::OpenGames)} href=routes::OPEN_GAMES>
                    "Open games"
                </a>
                <a
                    class="btn btn--primary"
                    class:btn--active={is_active(AppRoute::GameCreate)}
                    href=routes::GAME_CREATE
                >
                    "+ New game"
                </a>
            </nav>
        </header>
    }
}
