//! The viewer's hand with card selection and the play button.

use leptos::prelude::*;

use crate::components::playing_card::PlayingCard;
use crate::net::types::{Phase, PlayCardsPayload, SessionState};
use crate::state::hand::HandSelection;
use crate::state::round::Card;

/// Hand of white cards. Selection is only enabled while the viewer is a
/// sinner who has not played yet this round.
#[component]
pub fn Hand(state: SessionState, selection: RwSignal<HandSelection>, on_play: Callback<PlayCardsPayload>) -> impl IntoView {
    let blanks = state.black_card_in_play.as_ref().map_or(0, |c| c.blanks);
    let can_play = state.phase == Phase::SinnersPlaying && !state.viewer_is_czar() && !state.viewer_has_played();

    let cards = state
        .my_hand
        .iter()
        .enumerate()
        .map(|(idx, white)| {
            let badge = move || selection.get().position(idx).map(|pos| pos + 1);
            let on_click = can_play.then(|| Callback::new(move |()| selection.update(|s| s.toggle(idx, blanks))));
            view! {
                <div class="cah-hand__slot" class:cah-hand__slot--selected=move || badge().is_some()>
                    <PlayingCard card=Card::white(white) on_click=on_click/>
                    <span class="cah-hand__badge">
                        {move || badge().map(|n| n.to_string()).unwrap_or_default()}
                    </span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let on_play_click = move |_| {
        if let Some(payload) = selection.get_untracked().payload(blanks) {
            on_play.run(payload);
        }
    };

    view! {
        <div class="cah-hand">
            <div class="cah-hand__cards">{cards}</div>
            <Show when=move || can_play>
                <button
                    class="btn btn--primary cah-hand__play"
                    disabled=move || !selection.get().is_complete(blanks)
                    on:click=on_play_click
                >
                    {move || format!("Play {}/{blanks} card(s)", selection.with(|s| s.selected().len()))}
                </button>
            </Show>
        </div>
    }
}
