//! Round view model: what the table shows for a session snapshot.
//!
//! The projection is a pure function of the snapshot. A missing black card
//! means no round is running, and the table renders nothing at all.

#[cfg(test)]
#[path = "round_test.rs"]
mod round_test;

use crate::net::types::{BlackCard, SessionState, WhiteCard};

/// A card as displayed: prompt (black) or response (white).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub text: String,
    pub is_black: bool,
    /// Expansion name shown in the card footer.
    pub expansion: Option<String>,
}

impl Card {
    pub fn black(card: &BlackCard) -> Self {
        Self { text: card.text.clone(), is_black: true, expansion: card.expansion.clone() }
    }

    pub fn white(card: &WhiteCard) -> Self {
        Self { text: card.text.clone(), is_black: false, expansion: card.expansion.clone() }
    }
}

/// Everything the table needs to render the current round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundView {
    pub prompt: Card,
    /// Blanks the prompt asks each sinner to fill.
    pub blanks: u8,
    pub played: Vec<Card>,
}

/// Project a snapshot into the table view. `None` before a round starts.
pub fn project(state: &SessionState) -> Option<RoundView> {
    let black = state.black_card_in_play.as_ref()?;
    Some(RoundView { prompt: Card::black(black), blanks: black.blanks, played: played_cards(state) })
}

/// Played white cards in submission order.
pub fn played_cards(state: &SessionState) -> Vec<Card> {
    state.played_white_cards.iter().map(Card::white).collect()
}
