//! REST API helpers for communicating with the game server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! `ClientError::Unavailable` since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ClientError>`; callers decide whether a
//! failure goes to the shared error sink or is shown inline.

#![allow(clippy::unused_async)]

#[cfg(all(test, not(feature = "hydrate")))]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChooseWinnerPayload, CreateGamePayload, GameRoom, PlayCardsPayload};
use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::state::game_options::GameOptions;

/// Server operations the start-game form depends on.
///
/// Pages use [`HttpGateway`]; tests substitute an in-memory fake.
#[async_trait::async_trait(?Send)]
pub trait GameGateway {
    /// Start a game with the given options (`POST /api/game/{id}/start`).
    async fn start_game(&self, options: &GameOptions) -> Result<(), ClientError>;
}

/// `GameGateway` backed by the real REST API.
#[derive(Debug, Clone, Default)]
pub struct HttpGateway {
    config: ApiConfig,
}

impl HttpGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait(?Send)]
impl GameGateway for HttpGateway {
    async fn start_game(&self, options: &GameOptions) -> Result<(), ClientError> {
        start_game(&self.config, options).await
    }
}

/// Send the game options to `POST /api/game/{gameID}/start`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the options.
pub async fn start_game(config: &ApiConfig, options: &GameOptions) -> Result<(), ClientError> {
    let url = config.start_game(options.game_id());
    post_json(&url, options).await
}

/// Create a new game room via `POST /api/game/create`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the payload.
pub async fn create_game(config: &ApiConfig, payload: &CreateGamePayload) -> Result<(), ClientError> {
    post_json(&config.create_game(), payload).await
}

/// Join a game room via `POST /api/game/{gameID}/join`.
///
/// # Errors
///
/// Returns an error if the request fails or the server refuses the join.
pub async fn join_game(config: &ApiConfig, game_id: u64) -> Result<(), ClientError> {
    post_empty(&config.join_game(game_id)).await
}

/// Leave a game room via `POST /api/game/{gameID}/leave`.
///
/// # Errors
///
/// Returns an error if the request fails or the server refuses the leave.
pub async fn leave_game(config: &ApiConfig, game_id: u64) -> Result<(), ClientError> {
    post_empty(&config.leave_game(game_id)).await
}

/// Fetch a single room's lobby state.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a `GameRoom`.
pub async fn fetch_lobby_state(config: &ApiConfig, game_id: u64) -> Result<GameRoom, ClientError> {
    get_json(&config.lobby_state(game_id)).await
}

/// Fetch games that are open for joining.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a room list.
pub async fn fetch_open_games(config: &ApiConfig) -> Result<Vec<GameRoom>, ClientError> {
    get_json(&config.open_games()).await
}

/// Fetch in-progress games the current user is seated in.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a room list.
pub async fn fetch_in_progress_games(config: &ApiConfig) -> Result<Vec<GameRoom>, ClientError> {
    get_json(&config.in_progress_games()).await
}

/// Fetch the names of the card expansions the server knows about.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a string list.
pub async fn fetch_expansions(config: &ApiConfig) -> Result<Vec<String>, ClientError> {
    let mut names: Vec<String> = get_json(&config.expansions()).await?;
    names.sort();
    names.dedup();
    Ok(names)
}

/// Play white cards from the viewer's hand.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the play.
pub async fn play_cards(config: &ApiConfig, state_id: u64, payload: &PlayCardsPayload) -> Result<(), ClientError> {
    post_json(&config.play_cards(state_id), payload).await
}

/// Pick the round winner as czar.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the choice.
pub async fn choose_winner(
    config: &ApiConfig,
    state_id: u64,
    payload: &ChooseWinnerPayload,
) -> Result<(), ClientError> {
    post_json(&config.choose_winner(state_id), payload).await
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ClientError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    log::warn!("request to {} failed with status {status}", resp.url());
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::status(status, &body))
}

async fn post_json<T: serde::Serialize + ?Sized>(url: &str, body: &T) -> Result<(), ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| ClientError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        ensure_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ClientError::Unavailable)
    }
}

async fn post_empty(url: &str) -> Result<(), ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        ensure_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ClientError::Unavailable)
    }
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        let resp = ensure_ok(resp).await?;
        resp.json::<T>().await.map_err(|e| ClientError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ClientError::Unavailable)
    }
}
