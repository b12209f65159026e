//! Shared error list and the sink trait pages report remote failures to.
//!
//! DESIGN
//! ======
//! Forms and pages never reach for a global store: they receive an
//! `ErrorSink` (in the app, the `RwSignal<ErrorsState>` context) and push
//! failures into it. The `ErrorList` component renders whatever is queued.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use leptos::prelude::{RwSignal, Update};

use crate::error::ClientError;

/// Oldest entries are dropped past this many queued errors.
pub const MAX_ERRORS: usize = 5;

/// Receives remote failures for user-visible display.
pub trait ErrorSink {
    fn push_error(&self, error: &ClientError);
}

/// One user-visible error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorEntry {
    pub id: u64,
    pub message: String,
}

/// Queue of errors awaiting dismissal.
#[derive(Clone, Debug, Default)]
pub struct ErrorsState {
    pub entries: Vec<ErrorEntry>,
    next_id: u64,
}

impl ErrorsState {
    /// Queue an error and return its id.
    pub fn push(&mut self, error: &ClientError) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ErrorEntry { id, message: error.user_message() });
        if self.entries.len() > MAX_ERRORS {
            let overflow = self.entries.len() - MAX_ERRORS;
            self.entries.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|e| e.id != id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl ErrorSink for RwSignal<ErrorsState> {
    fn push_error(&self, error: &ClientError) {
        log::error!("{error}");
        self.update(|s| {
            s.push(error);
        });
    }
}
