//! Game-list state for the open and in-progress lobby pages.
//!
//! DESIGN
//! ======
//! Both lists share one state value so switching tabs does not refetch a
//! list that is already loaded.

#[cfg(test)]
#[path = "games_test.rs"]
mod games_test;

use crate::error::ClientError;
use crate::net::types::GameRoom;

/// Minimum seated players before the owner may start a game.
pub const MIN_PLAYERS: usize = 3;

/// Which lobby list a request refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameListKind {
    Open,
    InProgress,
}

/// Lobby lists plus loading/error status.
#[derive(Clone, Debug, Default)]
pub struct GamesState {
    pub open: Vec<GameRoom>,
    pub in_progress: Vec<GameRoom>,
    pub loading: bool,
    pub error: Option<String>,
}

impl GamesState {
    pub fn list(&self, kind: GameListKind) -> &[GameRoom] {
        match kind {
            GameListKind::Open => &self.open,
            GameListKind::InProgress => &self.in_progress,
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store a fetched list. On failure the previous list is kept so the
    /// page does not blank out on a transient error.
    pub fn finish_load(&mut self, kind: GameListKind, result: Result<Vec<GameRoom>, ClientError>) {
        self.loading = false;
        match result {
            Ok(mut rooms) => {
                rooms.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()).then(a.id.cmp(&b.id)));
                match kind {
                    GameListKind::Open => self.open = rooms,
                    GameListKind::InProgress => self.in_progress = rooms,
                }
            }
            Err(e) => self.error = Some(e.user_message()),
        }
    }
}

/// Whether a room has enough players to start.
pub fn enough_players(room: &GameRoom) -> bool {
    room.players.len() >= MIN_PLAYERS
}
