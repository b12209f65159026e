use super::*;

// =============================================================
// Base URL normalisation
// =============================================================

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ApiConfig::new("https://cah.example.test//");
    assert_eq!(cfg.create_game(), "https://cah.example.test/api/game/create");
}

#[test]
fn default_is_same_origin() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.create_game(), "/api/game/create");
}

// =============================================================
// REST endpoints
// =============================================================

#[test]
fn game_endpoints_embed_game_id() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.start_game(7), "/api/game/7/start");
    assert_eq!(cfg.lobby_state(7), "/api/game/7/lobby-state");
    assert_eq!(cfg.join_game(7), "/api/game/7/join");
    assert_eq!(cfg.leave_game(7), "/api/game/7/leave");
}

#[test]
fn gamestate_endpoints_embed_state_id() {
    let cfg = ApiConfig::new("http://localhost:8080");
    assert_eq!(cfg.play_cards(3), "http://localhost:8080/api/gamestate/3/play-cards");
    assert_eq!(cfg.choose_winner(3), "http://localhost:8080/api/gamestate/3/choose-winner");
}

#[test]
fn list_endpoints() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.open_games(), "/api/game/list/open");
    assert_eq!(cfg.in_progress_games(), "/api/game/list/in-progress");
    assert_eq!(cfg.expansions(), "/api/game/expansions");
}

// =============================================================
// WebSocket URL
// =============================================================

#[test]
fn state_socket_same_origin_follows_page_protocol() {
    let cfg = ApiConfig::default();
    assert_eq!(
        cfg.state_socket(5, "https:", "cah.example.test"),
        "wss://cah.example.test/api/gamestate/5/state-websocket"
    );
    assert_eq!(
        cfg.state_socket(5, "http:", "localhost:3000"),
        "ws://localhost:3000/api/gamestate/5/state-websocket"
    );
}

#[test]
fn state_socket_absolute_base_maps_scheme() {
    let cfg = ApiConfig::new("https://api.example.test");
    assert_eq!(
        cfg.state_socket(9, "http:", "ignored"),
        "wss://api.example.test/api/gamestate/9/state-websocket"
    );
    let cfg = ApiConfig::new("http://10.0.0.2:80");
    assert_eq!(cfg.state_socket(9, "https:", "ignored"), "ws://10.0.0.2:80/api/gamestate/9/state-websocket");
}

// =============================================================
// SSR host
// =============================================================

#[test]
fn host_port_defaults_when_unset_or_blank() {
    assert_eq!(HostConfig::from_lookup(|_| None).unwrap().port, DEFAULT_PORT);
    assert_eq!(HostConfig::from_lookup(|_| Some("  ".to_owned())).unwrap().port, DEFAULT_PORT);
}

#[test]
fn host_port_reads_env_value() {
    let cfg = HostConfig::from_lookup(|key| (key == "PORT").then(|| " 8080 ".to_owned())).unwrap();
    assert_eq!(cfg.port, 8080);
}

#[test]
fn host_port_rejects_garbage() {
    let err = HostConfig::from_lookup(|_| Some("eighty".to_owned())).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
}
