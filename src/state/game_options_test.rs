use super::*;

// =============================================================
// Clamping
// =============================================================

#[test]
fn clamp_hand_size_matches_min_max() {
    for raw in [-1_000_000, -1, 0, 1, 5, 29, 30, 31, 500, i64::MIN, i64::MAX] {
        let expected = raw.max(0).min(30);
        assert_eq!(i64::from(clamp_hand_size(raw)), expected, "raw={raw}");
    }
}

#[test]
fn clamp_max_rounds_is_non_negative() {
    for raw in [i64::MIN, -7, 0, 1, 10, 123_456, i64::MAX] {
        let expected = u64::try_from(raw.max(0)).unwrap();
        assert_eq!(clamp_max_rounds(raw), expected, "raw={raw}");
    }
}

#[test]
fn parse_number_input_trims_and_rejects_text() {
    assert_eq!(parse_number_input(" 12 "), Some(12));
    assert_eq!(parse_number_input("-3"), Some(-3));
    assert_eq!(parse_number_input(""), None);
    assert_eq!(parse_number_input("ten"), None);
}

// =============================================================
// GameOptions value
// =============================================================

#[test]
fn new_uses_defaults() {
    let options = GameOptions::new(9);
    assert_eq!(options.game_id(), 9);
    assert_eq!(options.hand_size(), 10);
    assert_eq!(options.max_rounds(), 10);
    assert!(options.random_first_czar());
    assert!(options.expansions().is_empty());
}

#[test]
fn with_methods_leave_original_untouched() {
    let original = GameOptions::new(1);
    let changed = original.with_hand_size(45).with_max_rounds(-2).with_random_first_czar(false);
    assert_eq!(original, GameOptions::new(1));
    assert_eq!(changed.hand_size(), 30);
    assert_eq!(changed.max_rounds(), 0);
    assert!(!changed.random_first_czar());
}

#[test]
fn expansion_toggle_adds_then_removes() {
    let options = GameOptions::new(1).with_expansion_toggled("Anime");
    assert!(options.expansions().contains("Anime"));
    let options = options.with_expansion_toggled("Anime");
    assert!(options.expansions().is_empty());
}

#[test]
fn with_expansions_deduplicates() {
    let options = GameOptions::new(1).with_expansions(["Base-UK".to_owned(), "Kikis".to_owned(), "Base-UK".to_owned()]);
    assert_eq!(options.expansions().len(), 2);
}

#[test]
fn serializes_to_start_game_body() {
    let options = GameOptions::new(2)
        .with_expansions(["Kikis".to_owned(), "Base-UK".to_owned()])
        .with_hand_size(8);
    assert_eq!(
        serde_json::to_value(&options).unwrap(),
        serde_json::json!({
            "gameID": 2,
            "expansions": ["Base-UK", "Kikis"],
            "handSize": 8,
            "randomFirstCzar": true,
            "maxRounds": 10
        })
    );
}
