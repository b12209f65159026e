//! REST/WebSocket endpoint configuration and SSR host settings.
//!
//! The browser bundle has no process environment, so the API base is baked
//! in at compile time from `CAH_API_BASE`. An empty base means "same origin",
//! which is how the game server normally serves this client.
//!
//! The SSR host binary reads its own settings from the process environment
//! at startup (`HostConfig`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Endpoint configuration provided to pages via context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build config from a base URL; trailing slashes are dropped.
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Build config from the `CAH_API_BASE` value captured at compile time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CAH_API_BASE").unwrap_or_default())
    }

    pub fn start_game(&self, game_id: u64) -> String {
        self.url(&format!("/api/game/{game_id}/start"))
    }

    pub fn create_game(&self) -> String {
        self.url("/api/game/create")
    }

    pub fn lobby_state(&self, game_id: u64) -> String {
        self.url(&format!("/api/game/{game_id}/lobby-state"))
    }

    pub fn join_game(&self, game_id: u64) -> String {
        self.url(&format!("/api/game/{game_id}/join"))
    }

    pub fn leave_game(&self, game_id: u64) -> String {
        self.url(&format!("/api/game/{game_id}/leave"))
    }

    pub fn open_games(&self) -> String {
        self.url("/api/game/list/open")
    }

    pub fn in_progress_games(&self) -> String {
        self.url("/api/game/list/in-progress")
    }

    pub fn expansions(&self) -> String {
        self.url("/api/game/expansions")
    }

    pub fn play_cards(&self, state_id: u64) -> String {
        self.url(&format!("/api/gamestate/{state_id}/play-cards"))
    }

    pub fn choose_winner(&self, state_id: u64) -> String {
        self.url(&format!("/api/gamestate/{state_id}/choose-winner"))
    }

    /// WebSocket URL for session state pushes.
    ///
    /// With an absolute base the scheme is mapped `http -> ws`, `https -> wss`.
    /// With a same-origin base the page's own protocol and host are used.
    pub fn state_socket(&self, state_id: u64, page_protocol: &str, page_host: &str) -> String {
        let path = format!("/api/gamestate/{state_id}/state-websocket");
        if let Some(rest) = self.base_url.strip_prefix("https://") {
            return format!("wss://{rest}{path}");
        }
        if let Some(rest) = self.base_url.strip_prefix("http://") {
            return format!("ws://{rest}{path}");
        }
        let scheme = if page_protocol.starts_with("https") { "wss" } else { "ws" };
        format!("{scheme}://{page_host}{}{path}", self.base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

// =============================================================================
// SSR HOST
// =============================================================================

pub const DEFAULT_PORT: u16 = 3000;

/// Invalid host settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
}

/// Settings for the SSR host binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
}

impl HostConfig {
    /// Read settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `PORT` is set but not a port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => {
                raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw.clone()))?
            }
            _ => DEFAULT_PORT,
        };
        Ok(Self { port })
    }
}
