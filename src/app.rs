//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{app_bar::AppBar, error_list::ErrorList};
use crate::config::ApiConfig;
use crate::pages::{
    game_create::GameCreatePage,
    game_list::{MyGamesInProgressPage, OpenGamesPage},
    game_room::GameRoomPage,
};
use crate::routes::AppRoute;
use crate::state::{errors::ErrorsState, games::GamesState, session::SessionStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared error list, session store, lobby lists and API
/// configuration, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(ErrorsState::default()));
    provide_context(RwSignal::new(SessionStore::default()));
    provide_context(RwSignal::new(GamesState::default()));
    provide_context(ApiConfig::from_build_env());

    let home_target = AppRoute::Home.redirect().unwrap_or(AppRoute::MyGamesInProgress).path();

    view! {
        <Stylesheet id="leptos" href="/pkg/cah-client.css"/>
        <Title text="Cards Against Humanity"/>

        <Router>
            <AppBar/>
            <ErrorList/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=move || view! { <Redirect path=home_target.clone()/> }
                    />
                    <Route
                        path=(StaticSegment("game"), StaticSegment("list"), StaticSegment("create"))
                        view=GameCreatePage
                    />
                    <Route
                        path=(StaticSegment("game"), StaticSegment("list"), StaticSegment("my-games-in-progress"))
                        view=MyGamesInProgressPage
                    />
                    <Route
                        path=(StaticSegment("game"), StaticSegment("list"), StaticSegment("open"))
                        view=OpenGamesPage
                    />
                    <Route path=(StaticSegment("game"), StaticSegment("room"), ParamSegment("gameID")) view=GameRoomPage/>
                </Routes>
            </main>
        </Router>
    }
}
