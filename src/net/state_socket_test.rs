use super::*;

#[test]
fn parse_state_message_reads_snapshot() {
    let text = r#"{"id":3,"phase":"SinnersPlaying","blackCardInPlay":{"text":"What's that smell?"},"playedWhiteCards":[]}"#;
    let state = parse_state_message(text).unwrap();
    assert_eq!(state.id, 3);
    assert_eq!(state.black_card_in_play.map(|c| c.text), Some("What's that smell?".to_owned()));
}

#[test]
fn parse_state_message_rejects_garbage() {
    let err = parse_state_message("not json").unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[test]
fn backoff_doubles_until_cap() {
    assert_eq!(next_backoff(INITIAL_BACKOFF_MS), 2000);
    assert_eq!(next_backoff(4000), 8000);
    assert_eq!(next_backoff(8000), MAX_BACKOFF_MS);
    assert_eq!(next_backoff(MAX_BACKOFF_MS), MAX_BACKOFF_MS);
    assert_eq!(next_backoff(u32::MAX), MAX_BACKOFF_MS);
}

#[test]
fn default_handle_is_stopped() {
    let handle = StateSocketHandle::default();
    assert!(!handle.is_alive());
}

#[test]
fn stop_is_shared_between_clones() {
    let handle = StateSocketHandle::new();
    let loop_side = handle.clone();
    assert!(loop_side.is_alive());

    handle.stop();
    assert!(!loop_side.is_alive());
}

#[test]
fn stopped_stays_pending_while_alive() {
    use futures::FutureExt;

    let handle = StateSocketHandle::new();
    assert!(handle.stopped().now_or_never().is_none());
}

#[test]
fn stop_wakes_a_pending_wait() {
    use std::pin::pin;
    use std::task::{Context, Poll};

    use futures::task::noop_waker;

    let handle = StateSocketHandle::new();
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    let mut wait = pin!(handle.stopped());
    assert_eq!(wait.as_mut().poll(&mut cx), Poll::Pending);

    handle.clone().stop();
    assert_eq!(wait.as_mut().poll(&mut cx), Poll::Ready(()));
}
