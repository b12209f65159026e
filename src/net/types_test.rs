use super::*;

// =============================================================
// Cards
// =============================================================

#[test]
fn black_card_defaults_to_one_blank() {
    let card: BlackCard = serde_json::from_value(serde_json::json!({ "text": "Why can't I sleep at night?" })).unwrap();
    assert_eq!(card.blanks, 1);
    assert_eq!(card.expansion, None);
}

#[test]
fn white_card_reads_expansion() {
    let card: WhiteCard =
        serde_json::from_value(serde_json::json!({ "text": "A windmill full of corpses.", "expansion": "Base-UK" }))
            .unwrap();
    assert_eq!(card.expansion.as_deref(), Some("Base-UK"));
}

// =============================================================
// Phase
// =============================================================

#[test]
fn phase_parses_known_names() {
    assert_eq!(Phase::from_name("SinnersPlaying"), Phase::SinnersPlaying);
    assert_eq!(Phase::from_name("Czar choosing winner"), Phase::CzarChoosingWinner);
    assert_eq!(Phase::from_name("Finished"), Phase::Finished);
}

#[test]
fn phase_unknown_name_is_not_started() {
    assert_eq!(Phase::from_name("Lobby"), Phase::NotStarted);
    assert_eq!(Phase::from_name(""), Phase::NotStarted);
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_tolerates_missing_fields() {
    let state: SessionState = serde_json::from_value(serde_json::json!({ "id": 4 })).unwrap();
    assert_eq!(state.id, 4);
    assert_eq!(state.phase, Phase::NotStarted);
    assert!(state.black_card_in_play.is_none());
    assert!(state.played_white_cards.is_empty());
}

#[test]
fn session_state_null_black_card_is_none() {
    let state: SessionState = serde_json::from_value(serde_json::json!({
        "blackCardInPlay": null,
        "playedWhiteCards": [{ "text": "Bees?" }]
    }))
    .unwrap();
    assert!(state.black_card_in_play.is_none());
    assert_eq!(state.played_white_cards.len(), 1);
}

#[test]
fn session_state_reads_full_snapshot() {
    let state: SessionState = serde_json::from_value(serde_json::json!({
        "id": 2,
        "phase": "CzarChoosingWinner",
        "players": [
            { "id": 1, "name": "ana", "points": 2, "hasPlayed": false },
            { "id": 2, "name": "bo", "points": 0, "hasPlayed": true }
        ],
        "currentCzarIndex": 0,
        "blackCardInPlay": { "text": "_ + _ = _", "blanks": 3 },
        "playedWhiteCards": [{ "text": "one" }, { "text": "two" }],
        "myHand": [{ "text": "three" }],
        "myIndex": 1,
        "handSize": 10,
        "currentRound": 3,
        "maxRounds": 10
    }))
    .unwrap();
    assert_eq!(state.phase, Phase::CzarChoosingWinner);
    assert_eq!(state.czar().map(|p| p.name.as_str()), Some("ana"));
    assert!(!state.viewer_is_czar());
    assert!(state.viewer_has_played());
    assert_eq!(state.black_card_in_play.as_ref().map(|c| c.blanks), Some(3));
    assert_eq!(state.played_white_cards[1].text, "two");
}

#[test]
fn points_accept_the_list_of_won_cards() {
    let text = r#"{"players":[{"name":"ana","points":[{"text":"Why?"},{"text":"How?"}]},{"name":"bo","points":null}],"blackCardInPlay":{"text":"_"}}"#;
    let state: SessionState = serde_json::from_str(text).unwrap();
    assert_eq!(state.players[0].points, 2);
    assert_eq!(state.players[1].points, 0);
    assert!(state.black_card_in_play.is_some());
}

#[test]
fn null_cards_in_play_are_empty() {
    let player: PlayerSummary =
        serde_json::from_value(serde_json::json!({ "name": "cy", "whiteCardsInPlay": null })).unwrap();
    assert!(player.white_cards_in_play.is_empty());
}

fn submitted(id: u64, texts: &[&str]) -> PlayerSummary {
    PlayerSummary {
        id,
        name: format!("player-{id}"),
        has_played: !texts.is_empty(),
        white_cards_in_play: texts.iter().map(|t| WhiteCard { text: (*t).to_owned(), expansion: None }).collect(),
        ..PlayerSummary::default()
    }
}

#[test]
fn card_owner_maps_played_cards_to_player_ids() {
    let state = SessionState {
        players: vec![submitted(7, &[]), submitted(9, &["a", "b"]), submitted(12, &["c", "d"])],
        current_czar_index: 0,
        ..SessionState::default()
    };
    assert_eq!(state.card_owner(0), Some(9));
    assert_eq!(state.card_owner(1), Some(9));
    assert_eq!(state.card_owner(2), Some(12));
    assert_eq!(state.card_owner(3), Some(12));
    assert_eq!(state.card_owner(4), None);
}

#[test]
fn viewer_without_seat_is_not_czar() {
    let state = SessionState { my_index: None, ..SessionState::default() };
    assert!(!state.viewer_is_czar());
    assert!(!state.viewer_has_played());
}

// =============================================================
// Lobby payloads
// =============================================================

#[test]
fn game_room_reads_state_id() {
    let room: GameRoom = serde_json::from_value(serde_json::json!({
        "id": 2,
        "name": "Amo a juga",
        "owner": "ana",
        "hasPassword": true,
        "players": ["ana", "bo", "cy"],
        "phase": "Not started",
        "stateID": 11
    }))
    .unwrap();
    assert_eq!(room.state_id, 11);
    assert!(room.has_password);
    assert!(!room.has_started());
    assert_eq!(room.players.len(), 3);
}

#[test]
fn create_game_payload_trims_name_and_omits_empty_password() {
    let payload = CreateGamePayload::from_input("  Friday night  ", "").unwrap();
    assert_eq!(payload.name, "Friday night");
    assert_eq!(serde_json::to_value(&payload).unwrap(), serde_json::json!({ "name": "Friday night" }));
}

#[test]
fn create_game_payload_rejects_blank_name() {
    assert_eq!(CreateGamePayload::from_input("   ", "secret"), None);
}

#[test]
fn choose_winner_payload_carries_player_id() {
    let payload = ChooseWinnerPayload { winner: 12 };
    assert_eq!(serde_json::to_value(&payload).unwrap(), serde_json::json!({ "winner": 12 }));
}

#[test]
fn play_cards_payload_is_camel_case() {
    let payload = PlayCardsPayload { card_indexes: vec![2, 0] };
    assert_eq!(serde_json::to_value(&payload).unwrap(), serde_json::json!({ "cardIndexes": [2, 0] }));
}
