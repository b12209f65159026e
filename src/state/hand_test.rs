use super::*;

#[test]
fn toggle_selects_in_click_order() {
    let mut sel = HandSelection::default();
    sel.toggle(4, 2);
    sel.toggle(1, 2);
    assert_eq!(sel.selected(), &[4, 1]);
    assert_eq!(sel.position(1), Some(1));
}

#[test]
fn toggle_never_exceeds_blanks() {
    let mut sel = HandSelection::default();
    for idx in 0..5 {
        sel.toggle(idx, 2);
    }
    assert_eq!(sel.selected(), &[0, 1]);
}

#[test]
fn toggle_twice_deselects() {
    let mut sel = HandSelection::default();
    sel.toggle(3, 1);
    sel.toggle(3, 1);
    assert!(sel.selected().is_empty());
}

#[test]
fn payload_only_when_complete() {
    let mut sel = HandSelection::default();
    sel.toggle(2, 2);
    assert_eq!(sel.payload(2), None);
    sel.toggle(0, 2);
    assert_eq!(sel.payload(2), Some(PlayCardsPayload { card_indexes: vec![2, 0] }));
}

#[test]
fn zero_blanks_is_never_complete() {
    let sel = HandSelection::default();
    assert!(!sel.is_complete(0));
}

#[test]
fn clear_resets_selection() {
    let mut sel = HandSelection::default();
    sel.toggle(1, 3);
    sel.clear();
    assert!(sel.selected().is_empty());
}
