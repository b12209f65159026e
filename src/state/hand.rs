//! Selection of white cards from the viewer's hand before playing them.

#[cfg(test)]
#[path = "hand_test.rs"]
mod hand_test;

use crate::net::types::PlayCardsPayload;

/// Ordered selection of hand indexes, capped at the prompt's blank count.
///
/// Order matters: the first selected card fills the first blank.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HandSelection {
    selected: Vec<usize>,
}

impl HandSelection {
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    pub fn position(&self, index: usize) -> Option<usize> {
        self.selected.iter().position(|&i| i == index)
    }

    /// Select or deselect `index`. Selecting past `blanks` is ignored.
    pub fn toggle(&mut self, index: usize, blanks: u8) {
        if let Some(pos) = self.position(index) {
            self.selected.remove(pos);
        } else if self.selected.len() < usize::from(blanks) {
            self.selected.push(index);
        }
    }

    pub fn is_complete(&self, blanks: u8) -> bool {
        blanks > 0 && self.selected.len() == usize::from(blanks)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Payload for `play-cards`, or `None` until every blank is filled.
    pub fn payload(&self, blanks: u8) -> Option<PlayCardsPayload> {
        self.is_complete(blanks).then(|| PlayCardsPayload { card_indexes: self.selected.clone() })
    }
}
