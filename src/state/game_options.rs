//! Game configuration chosen by the host before starting a game.
//!
//! `GameOptions` is an immutable value: every field change produces a new
//! value with numeric fields already clamped, so a draft is never out of
//! range, not even between two edits.

#[cfg(test)]
#[path = "game_options_test.rs"]
mod game_options_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const DEFAULT_HAND_SIZE: u32 = 10;
pub const DEFAULT_MAX_ROUNDS: u64 = 10;
pub const MAX_HAND_SIZE: u32 = 30;

/// Clamp a raw hand size into `[0, MAX_HAND_SIZE]`.
pub fn clamp_hand_size(raw: i64) -> u32 {
    // The clamp guarantees the value fits.
    u32::try_from(raw.clamp(0, i64::from(MAX_HAND_SIZE))).unwrap_or(MAX_HAND_SIZE)
}

/// Clamp a raw round limit to be non-negative.
pub fn clamp_max_rounds(raw: i64) -> u64 {
    u64::try_from(raw.max(0)).unwrap_or(0)
}

/// Parse a numeric text field. Blank or non-numeric input yields `None`,
/// which callers treat as "leave the draft unchanged".
pub fn parse_number_input(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Options payload sent to `POST /api/game/{gameID}/start`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOptions {
    #[serde(rename = "gameID")]
    game_id: u64,
    expansions: BTreeSet<String>,
    hand_size: u32,
    random_first_czar: bool,
    max_rounds: u64,
}

impl GameOptions {
    /// Fresh defaults for `game_id`.
    pub fn new(game_id: u64) -> Self {
        Self {
            game_id,
            expansions: BTreeSet::new(),
            hand_size: DEFAULT_HAND_SIZE,
            random_first_czar: true,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    pub fn expansions(&self) -> &BTreeSet<String> {
        &self.expansions
    }

    pub fn hand_size(&self) -> u32 {
        self.hand_size
    }

    pub fn random_first_czar(&self) -> bool {
        self.random_first_czar
    }

    pub fn max_rounds(&self) -> u64 {
        self.max_rounds
    }

    #[must_use]
    pub fn with_hand_size(&self, raw: i64) -> Self {
        Self { hand_size: clamp_hand_size(raw), ..self.clone() }
    }

    #[must_use]
    pub fn with_max_rounds(&self, raw: i64) -> Self {
        Self { max_rounds: clamp_max_rounds(raw), ..self.clone() }
    }

    #[must_use]
    pub fn with_random_first_czar(&self, random_first_czar: bool) -> Self {
        Self { random_first_czar, ..self.clone() }
    }

    /// Replace the whole expansion selection.
    #[must_use]
    pub fn with_expansions<I>(&self, expansions: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self { expansions: expansions.into_iter().collect(), ..self.clone() }
    }

    /// Add or remove a single expansion.
    #[must_use]
    pub fn with_expansion_toggled(&self, name: &str) -> Self {
        let mut expansions = self.expansions.clone();
        if !expansions.remove(name) {
            expansions.insert(name.to_owned());
        }
        Self { expansions, ..self.clone() }
    }
}
