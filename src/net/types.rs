//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Field names follow the game server's camelCase JSON. Everything the
//! server may omit carries `#[serde(default)]` so an older server that sends
//! fewer fields still yields a usable snapshot instead of a decode error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// CARDS
// =============================================================================

/// A prompt card. `blanks` is how many white cards each sinner must play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlackCard {
    pub text: String,
    #[serde(default = "default_blanks")]
    pub blanks: u8,
    #[serde(default)]
    pub expansion: Option<String>,
}

/// A response card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhiteCard {
    pub text: String,
    #[serde(default)]
    pub expansion: Option<String>,
}

fn default_blanks() -> u8 {
    1
}

// =============================================================================
// SESSION STATE
// =============================================================================

/// Round lifecycle phase as reported by the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Lobby: the game exists but no round has been dealt.
    #[default]
    NotStarted,
    /// Sinners are choosing white cards for the current prompt.
    SinnersPlaying,
    /// Every sinner has played; the czar picks a winner.
    CzarChoosingWinner,
    Finished,
}

impl Phase {
    /// Parse the server's phase name. Unknown names map to `NotStarted`.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "SinnersPlaying" | "Sinners playing" => Self::SinnersPlaying,
            "CzarChoosingWinner" | "Czar choosing winner" => Self::CzarChoosingWinner,
            "Finished" => Self::Finished,
            _ => Self::NotStarted,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::SinnersPlaying => "Sinners playing",
            Self::CzarChoosingWinner => "Czar choosing winner",
            Self::Finished => "Finished",
        }
    }
}

impl<'de> Deserialize<'de> for Phase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// A seated player as seen by everyone at the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    /// Number of black cards won so far. The server may send the won cards
    /// themselves; only their count is kept.
    #[serde(default, deserialize_with = "deserialize_points")]
    pub points: u32,
    #[serde(default)]
    pub has_played: bool,
    /// This player's own submission for the current round.
    #[serde(default, deserialize_with = "null_as_default")]
    pub white_cards_in_play: Vec<WhiteCard>,
}

/// Accept `points` as a count, as the list of won black cards, or as null.
fn deserialize_points<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Points {
        Count(u32),
        Won(Vec<serde::de::IgnoredAny>),
    }

    Ok(match Option::<Points>::deserialize(deserializer)? {
        Some(Points::Count(count)) => count,
        Some(Points::Won(cards)) => u32::try_from(cards.len()).unwrap_or(u32::MAX),
        None => 0,
    })
}

/// Go servers encode empty slices as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Authoritative snapshot of a game round pushed by the server.
///
/// Snapshots are never patched locally: each push replaces the previous one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionState {
    pub id: u64,
    pub phase: Phase,
    pub players: Vec<PlayerSummary>,
    pub current_czar_index: usize,
    /// Absent before the first round is dealt and between rounds.
    pub black_card_in_play: Option<BlackCard>,
    /// One entry per submitted play, in reveal order.
    pub played_white_cards: Vec<WhiteCard>,
    /// The viewing player's own hand.
    pub my_hand: Vec<WhiteCard>,
    /// Index of the viewing player in `players`, if seated.
    pub my_index: Option<usize>,
    pub hand_size: u32,
    pub current_round: u32,
    pub max_rounds: u32,
}

impl SessionState {
    pub fn czar(&self) -> Option<&PlayerSummary> {
        self.players.get(self.current_czar_index)
    }

    /// Whether the viewing player is judging this round.
    pub fn viewer_is_czar(&self) -> bool {
        self.my_index == Some(self.current_czar_index)
    }

    /// Whether the viewing player has already submitted this round.
    pub fn viewer_has_played(&self) -> bool {
        self.my_index
            .and_then(|idx| self.players.get(idx))
            .is_some_and(|p| p.has_played)
    }

    /// Id of the player who submitted the played card at `index`.
    ///
    /// `playedWhiteCards` is the players' `whiteCardsInPlay` concatenated in
    /// seat order, so a prompt with several blanks maps several consecutive
    /// cards to the same player.
    pub fn card_owner(&self, index: usize) -> Option<u64> {
        let mut end = 0;
        self.players.iter().find_map(|player| {
            end += player.white_cards_in_play.len();
            (index < end).then_some(player.id)
        })
    }
}

// =============================================================================
// LOBBY
// =============================================================================

/// A game room as listed in the lobby and returned by `lobby-state`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRoom {
    pub id: u64,
    pub name: String,
    pub owner: String,
    #[serde(default)]
    pub has_password: bool,
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub phase: String,
    #[serde(rename = "stateID", default)]
    pub state_id: u64,
}

impl GameRoom {
    pub fn phase(&self) -> Phase {
        Phase::from_name(&self.phase)
    }

    pub fn has_started(&self) -> bool {
        self.phase() != Phase::NotStarted
    }
}

/// Body for `POST /api/game/create`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGamePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub password: Option<String>,
}

impl CreateGamePayload {
    /// Normalise raw form input. Returns `None` when the name is blank.
    pub fn from_input(name: &str, password: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let password = (!password.is_empty()).then(|| password.to_owned());
        Some(Self { name: name.to_owned(), password })
    }
}

/// Body for `POST /api/gamestate/{id}/play-cards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayCardsPayload {
    pub card_indexes: Vec<usize>,
}

/// Body for `POST /api/gamestate/{id}/choose-winner`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChooseWinnerPayload {
    /// Player id of the winning submission's author.
    pub winner: u64,
}
