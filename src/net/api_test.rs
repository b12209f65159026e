use super::*;
use futures::executor::block_on;

// Without the `hydrate` feature every helper is a stub; these tests pin that
// contract so SSR rendering never attempts I/O.

#[test]
fn start_game_is_unavailable_outside_browser() {
    let options = GameOptions::new(3);
    let result = block_on(start_game(&ApiConfig::default(), &options));
    assert_eq!(result, Err(ClientError::Unavailable));
}

#[test]
fn http_gateway_delegates_to_start_game() {
    let gateway = HttpGateway::new(ApiConfig::new("http://localhost:8080"));
    let result = block_on(gateway.start_game(&GameOptions::new(1)));
    assert_eq!(result, Err(ClientError::Unavailable));
}

#[test]
fn list_fetches_are_unavailable_outside_browser() {
    let cfg = ApiConfig::default();
    assert_eq!(block_on(fetch_open_games(&cfg)), Err(ClientError::Unavailable));
    assert_eq!(block_on(fetch_in_progress_games(&cfg)), Err(ClientError::Unavailable));
    assert_eq!(block_on(fetch_expansions(&cfg)), Err(ClientError::Unavailable));
}

#[test]
fn player_actions_are_unavailable_outside_browser() {
    let cfg = ApiConfig::default();
    let play = PlayCardsPayload { card_indexes: vec![0] };
    assert_eq!(block_on(play_cards(&cfg, 1, &play)), Err(ClientError::Unavailable));
    let choose = ChooseWinnerPayload { winner: 0 };
    assert_eq!(block_on(choose_winner(&cfg, 1, &choose)), Err(ClientError::Unavailable));
}
