//! Static routing table for the client.
//!
//! `leptos_router` does the actual matching in `app::App`; this table is the
//! single source of the path strings so pages build links without
//! hard-coding them.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const GAME_CREATE: &str = "/game/list/create";
pub const MY_GAMES_IN_PROGRESS: &str = "/game/list/my-games-in-progress";
pub const OPEN_GAMES: &str = "/game/list/open";
pub const GAME_ROOM_PREFIX: &str = "/game/room/";

/// A resolved client route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `/`, redirected to `MyGamesInProgress`.
    Home,
    GameCreate,
    MyGamesInProgress,
    OpenGames,
    GameRoom { game_id: u64 },
}

impl AppRoute {
    /// Resolve a path against the table. Trailing slashes are ignored.
    pub fn resolve(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Self::Home),
            GAME_CREATE => Some(Self::GameCreate),
            MY_GAMES_IN_PROGRESS => Some(Self::MyGamesInProgress),
            OPEN_GAMES => Some(Self::OpenGames),
            _ => {
                let id = trimmed.strip_prefix(GAME_ROOM_PREFIX)?;
                id.parse().ok().map(|game_id| Self::GameRoom { game_id })
            }
        }
    }

    /// Canonical path for this route.
    pub fn path(self) -> String {
        match self {
            Self::Home => HOME.to_owned(),
            Self::GameCreate => GAME_CREATE.to_owned(),
            Self::MyGamesInProgress => MY_GAMES_IN_PROGRESS.to_owned(),
            Self::OpenGames => OPEN_GAMES.to_owned(),
            Self::GameRoom { game_id } => game_room_path(game_id),
        }
    }

    /// Where the router sends this route; only `Home` redirects.
    pub fn redirect(self) -> Option<Self> {
        match self {
            Self::Home => Some(Self::MyGamesInProgress),
            _ => None,
        }
    }
}

pub fn game_room_path(game_id: u64) -> String {
    format!("{GAME_ROOM_PREFIX}{game_id}")
}
