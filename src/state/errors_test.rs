use super::*;

fn request_error(n: usize) -> ClientError {
    ClientError::status(500, &format!("failure {n}"))
}

#[test]
fn errors_state_default_is_empty() {
    let state = ErrorsState::default();
    assert!(state.entries.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ErrorsState::default();
    let a = state.push(&request_error(1));
    let b = state.push(&request_error(2));
    assert!(b > a);
    assert_eq!(state.entries[0].message, "failure 1");
    assert_eq!(state.entries[1].message, "failure 2");
}

#[test]
fn push_drops_oldest_past_limit() {
    let mut state = ErrorsState::default();
    for n in 0..(MAX_ERRORS + 3) {
        state.push(&request_error(n));
    }
    assert_eq!(state.entries.len(), MAX_ERRORS);
    assert_eq!(state.entries[0].message, "failure 3");
}

#[test]
fn dismiss_removes_only_matching_entry() {
    let mut state = ErrorsState::default();
    let a = state.push(&request_error(1));
    let b = state.push(&request_error(2));
    state.dismiss(a);
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].id, b);
    state.dismiss(a);
    assert_eq!(state.entries.len(), 1);
}

#[test]
fn clear_empties_queue() {
    let mut state = ErrorsState::default();
    state.push(&request_error(1));
    state.clear();
    assert!(state.entries.is_empty());
}

// =============================================================
// Signal sink
// =============================================================

#[test]
fn signal_sink_queues_one_entry_per_push() {
    use leptos::prelude::{Owner, With};

    let owner = Owner::new();
    owner.with(|| {
        let errors = RwSignal::new(ErrorsState::default());
        errors.push_error(&ClientError::Request("connection refused".to_owned()));

        errors.with(|s| {
            assert_eq!(s.entries.len(), 1);
            assert_eq!(s.entries[0].message, "Could not reach the game server.");
        });
    });
}
