//! WebSocket subscription for session state pushes.
//!
//! The server sends a full `SessionState` snapshot as a text message whenever
//! the round changes. Each valid snapshot replaces the store wholesale; there
//! is no merging, so the last message received wins.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment. Parsing and backoff are plain functions so
//! they can be tested natively.

#[cfg(test)]
#[path = "state_socket_test.rs"]
mod state_socket_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::Poll;

use futures::task::AtomicWaker;

use crate::error::ClientError;
use crate::net::types::SessionState;

pub const INITIAL_BACKOFF_MS: u32 = 1000;
pub const MAX_BACKOFF_MS: u32 = 10_000;

/// Decode one pushed text message into a snapshot.
///
/// # Errors
///
/// Returns `ClientError::Decode` if the message is not a session snapshot.
pub fn parse_state_message(text: &str) -> Result<SessionState, ClientError> {
    serde_json::from_str(text).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Exponential backoff step, capped at `MAX_BACKOFF_MS`.
pub fn next_backoff(current_ms: u32) -> u32 {
    current_ms.saturating_mul(2).min(MAX_BACKOFF_MS)
}

/// Shared stop signal for one subscription loop. `stop` wakes the loop
/// whether it is waiting on the socket or sleeping before a reconnect; the
/// socket is closed right away. The default handle starts stopped.
#[derive(Debug, Clone, Default)]
pub struct StateSocketHandle {
    inner: Arc<HandleInner>,
}

#[derive(Debug, Default)]
struct HandleInner {
    alive: AtomicBool,
    waker: AtomicWaker,
}

impl StateSocketHandle {
    /// A live handle, ready to be passed to `spawn_state_socket`.
    pub fn new() -> Self {
        Self { inner: Arc::new(HandleInner { alive: AtomicBool::new(true), waker: AtomicWaker::new() }) }
    }

    pub fn stop(&self) {
        self.inner.alive.store(false, Ordering::Release);
        self.inner.waker.wake();
    }

    pub fn is_alive(&self) -> bool {
        self.inner.alive.load(Ordering::Acquire)
    }

    /// Resolves once `stop` has been called. Only the subscription loop
    /// waits on this; a second concurrent waiter replaces the first.
    pub async fn stopped(&self) {
        futures::future::poll_fn(|cx| {
            self.inner.waker.register(cx.waker());
            if self.is_alive() { Poll::Pending } else { Poll::Ready(()) }
        })
        .await;
    }
}

/// Spawn the state subscription for `state_id` as a local async task.
///
/// Connects, applies every pushed snapshot to `session`, and reconnects with
/// exponential backoff until `handle` is stopped.
#[cfg(feature = "hydrate")]
pub fn spawn_state_socket(
    config: crate::config::ApiConfig,
    state_id: u64,
    session: leptos::prelude::RwSignal<crate::state::session::SessionStore>,
    handle: StateSocketHandle,
) {
    leptos::task::spawn_local(state_socket_loop(config, state_id, session, handle));
}

#[cfg(feature = "hydrate")]
async fn state_socket_loop(
    config: crate::config::ApiConfig,
    state_id: u64,
    session: leptos::prelude::RwSignal<crate::state::session::SessionStore>,
    handle: StateSocketHandle,
) {
    use crate::state::session::ConnectionStatus;
    use leptos::prelude::Update;

    let mut backoff_ms = INITIAL_BACKOFF_MS;

    while handle.is_alive() {
        session.update(|s| s.connection_status = ConnectionStatus::Connecting);

        let location = web_sys::window().map(|w| w.location());
        let protocol = location
            .as_ref()
            .and_then(|l| l.protocol().ok())
            .unwrap_or_else(|| "http:".to_owned());
        let host = location
            .as_ref()
            .and_then(|l| l.host().ok())
            .unwrap_or_else(|| "localhost:8080".to_owned());
        let url = config.state_socket(state_id, &protocol, &host);

        match connect_and_run(&url, session, &handle).await {
            Ok(()) => {
                log::info!("state socket for {state_id} closed");
                backoff_ms = INITIAL_BACKOFF_MS;
            }
            Err(e) => log::warn!("state socket for {state_id} failed: {e}"),
        }

        session.update(|s| s.connection_status = ConnectionStatus::Disconnected);
        if !handle.is_alive() {
            break;
        }

        let sleep = gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms)));
        futures::future::select(std::pin::pin!(sleep), std::pin::pin!(handle.stopped())).await;
        backoff_ms = next_backoff(backoff_ms);
    }
}

#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    session: leptos::prelude::RwSignal<crate::state::session::SessionStore>,
    handle: &StateSocketHandle,
) -> Result<(), ClientError> {
    use crate::state::session::ConnectionStatus;
    use futures::StreamExt;
    use futures::future::Either;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    let mut ws = WebSocket::open(url).map_err(|e| ClientError::Socket(e.to_string()))?;
    session.update(|s| s.connection_status = ConnectionStatus::Connected);

    let mut stopped = std::pin::pin!(handle.stopped());
    loop {
        let next = match futures::future::select(ws.next(), stopped.as_mut()).await {
            Either::Left((msg, _)) => msg,
            Either::Right(_) => None,
        };
        if !handle.is_alive() {
            if let Err(e) = ws.close(None, None) {
                log::debug!("state socket close failed: {e}");
            }
            return Ok(());
        }
        match next {
            Some(Ok(Message::Text(text))) => match parse_state_message(&text) {
                Ok(snapshot) => session.update(|s| s.apply(snapshot)),
                Err(e) => log::warn!("ignoring state push: {e}"),
            },
            Some(Ok(Message::Bytes(_))) => {}
            Some(Err(e)) => return Err(ClientError::Socket(e.to_string())),
            None => return Ok(()),
        }
    }
}
