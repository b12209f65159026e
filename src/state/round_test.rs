use super::*;

fn white(text: &str) -> WhiteCard {
    WhiteCard { text: text.to_owned(), expansion: None }
}

fn state_with(black: Option<&str>, played: &[&str]) -> SessionState {
    SessionState {
        black_card_in_play: black.map(|t| BlackCard { text: t.to_owned(), blanks: 2, expansion: Some("Base-UK".to_owned()) }),
        played_white_cards: played.iter().map(|t| white(t)).collect(),
        ..SessionState::default()
    }
}

#[test]
fn no_black_card_renders_nothing_even_with_played_cards() {
    assert_eq!(project(&state_with(None, &[])), None);
    assert_eq!(project(&state_with(None, &["stray", "cards"])), None);
}

#[test]
fn prompt_is_black_with_metadata() {
    let view = project(&state_with(Some("_ and _"), &[])).unwrap();
    assert!(view.prompt.is_black);
    assert_eq!(view.prompt.text, "_ and _");
    assert_eq!(view.prompt.expansion.as_deref(), Some("Base-UK"));
    assert_eq!(view.blanks, 2);
    assert!(view.played.is_empty());
}

#[test]
fn played_cards_keep_length_and_order() {
    let texts = ["zebra", "apple", "mango", "apple"];
    let view = project(&state_with(Some("?"), &texts)).unwrap();
    assert_eq!(view.played.len(), texts.len());
    let rendered: Vec<_> = view.played.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(rendered, texts);
    assert!(view.played.iter().all(|c| !c.is_black));
}

#[test]
fn played_cards_projection_ignores_black_card_presence() {
    let state = state_with(None, &["a", "b"]);
    assert_eq!(played_cards(&state).len(), 2);
}
