//! Latest session snapshot for the open game room.
//!
//! DESIGN
//! ======
//! The server is authoritative. `apply` swaps the whole snapshot; nothing in
//! the client edits a snapshot after it arrives.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionState;

/// Session WebSocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Holder for the current snapshot plus subscription status.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    pub state: Option<SessionState>,
    pub connection_status: ConnectionStatus,
    /// Incremented on every applied snapshot.
    pub revision: u64,
}

impl SessionStore {
    /// Replace the current snapshot with `snapshot`.
    pub fn apply(&mut self, snapshot: SessionState) {
        self.state = Some(snapshot);
        self.revision += 1;
    }

    /// Forget the snapshot when leaving a room.
    pub fn reset(&mut self) {
        self.state = None;
        self.connection_status = ConnectionStatus::Disconnected;
    }
}
