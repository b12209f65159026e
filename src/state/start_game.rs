//! Start-game form state machine.
//!
//! DESIGN
//! ======
//! The form holds an immutable `GameOptions` draft that every field change
//! replaces. Submission is split in three steps so the Leptos component can
//! run the network call between them without holding a borrow:
//!
//! 1. `begin_submit` checks preconditions and marks the request in flight,
//! 2. `submit_options` performs the single gateway call and reports failure,
//! 3. `finish_submit` settles the status.
//!
//! At most one request is in flight per form: a second submit while the
//! first is pending is rejected locally.

#[cfg(test)]
#[path = "start_game_test.rs"]
mod start_game_test;

use crate::error::ClientError;
use crate::net::api::GameGateway;
use crate::state::errors::ErrorSink;
use crate::state::game_options::{GameOptions, parse_number_input};

/// Observable form status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    /// A start request is in flight.
    Submitting,
    /// The server accepted the options; it will push the new session state.
    Submitted,
}

/// Local reasons a submit never reaches the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    NotEnoughPlayers,
    AlreadyInFlight,
}

/// Draft options plus submission status for one game room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartGameForm {
    draft: GameOptions,
    status: FormStatus,
}

impl StartGameForm {
    pub fn new(game_id: u64) -> Self {
        Self { draft: GameOptions::new(game_id), status: FormStatus::Editing }
    }

    pub fn draft(&self) -> &GameOptions {
        &self.draft
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Apply a hand-size text change. Non-numeric input is ignored.
    pub fn set_hand_size(&mut self, raw: &str) {
        if let Some(value) = parse_number_input(raw) {
            self.replace_draft(self.draft.with_hand_size(value));
        }
    }

    /// Apply a max-rounds text change. Non-numeric input is ignored.
    pub fn set_max_rounds(&mut self, raw: &str) {
        if let Some(value) = parse_number_input(raw) {
            self.replace_draft(self.draft.with_max_rounds(value));
        }
    }

    pub fn set_random_first_czar(&mut self, value: bool) {
        self.replace_draft(self.draft.with_random_first_czar(value));
    }

    pub fn set_expansions(&mut self, selected: Vec<String>) {
        self.replace_draft(self.draft.with_expansions(selected));
    }

    pub fn toggle_expansion(&mut self, name: &str) {
        self.replace_draft(self.draft.with_expansion_toggled(name));
    }

    /// Check preconditions and mark the request in flight.
    ///
    /// Returns the payload to send, a snapshot of the draft at this moment.
    ///
    /// # Errors
    ///
    /// Returns `SubmitRejected` without changing the status when there are
    /// not enough players or a request is already pending.
    pub fn begin_submit(&mut self, enough_players: bool) -> Result<GameOptions, SubmitRejected> {
        if !enough_players {
            log::warn!("tried to start game {} without enough players", self.draft.game_id());
            return Err(SubmitRejected::NotEnoughPlayers);
        }
        if self.status == FormStatus::Submitting {
            log::warn!("start request for game {} already in flight", self.draft.game_id());
            return Err(SubmitRejected::AlreadyInFlight);
        }
        log::info!("starting game with options {:?}", self.draft);
        self.status = FormStatus::Submitting;
        Ok(self.draft.clone())
    }

    /// Settle the status after the gateway call. The draft is kept as-is so
    /// the player can retry after a failure.
    pub fn finish_submit(&mut self, result: &Result<(), ClientError>) {
        self.status = match result {
            Ok(()) => FormStatus::Submitted,
            Err(_) => FormStatus::Editing,
        };
    }

    fn replace_draft(&mut self, draft: GameOptions) {
        self.draft = draft;
        if self.status == FormStatus::Submitted {
            self.status = FormStatus::Editing;
        }
    }
}

/// Send `payload` through `gateway`; a failure is pushed to `sink` once.
///
/// # Errors
///
/// Returns the gateway error after it has been reported.
pub async fn submit_options<G, S>(gateway: &G, sink: &S, payload: &GameOptions) -> Result<(), ClientError>
where
    G: GameGateway + ?Sized,
    S: ErrorSink + ?Sized,
{
    let result = gateway.start_game(payload).await;
    if let Err(e) = &result {
        sink.push_error(e);
    }
    result
}
