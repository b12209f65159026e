//! Round table: the black card in play and the white cards played for it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The game room page re-renders the table for every pushed snapshot, so both
//! components take a plain `SessionState` and project it with
//! `state::round`. Nothing here talks to the network; choosing a winner is
//! delegated to the caller through `on_choose_winner`.

use leptos::prelude::*;

use crate::components::playing_card::PlayingCard;
use crate::net::types::{Phase, SessionState};
use crate::state::round::{played_cards, project};

/// Prompt card followed by the played white cards. Renders nothing before a
/// round starts.
#[component]
pub fn Table(
    state: SessionState,
    #[prop(optional)] on_choose_winner: Option<Callback<u64>>,
) -> impl IntoView {
    project(&state).map(move |round| {
        view! {
            <div class="cah-table">
                <PlayingCard card=round.prompt/>
                <WhiteCardsPlayed state=state on_choose_winner=on_choose_winner/>
            </div>
        }
    })
}

/// White cards played this round, in reveal order.
///
/// When the viewer is the czar and the round is waiting on a decision, every
/// card becomes a button that reports the id of the player who played it.
#[component]
pub fn WhiteCardsPlayed(
    state: SessionState,
    #[prop(default = None)] on_choose_winner: Option<Callback<u64>>,
) -> impl IntoView {
    let choosing = state.phase == Phase::CzarChoosingWinner && state.viewer_is_czar();
    let on_choose = on_choose_winner.filter(|_| choosing);

    view! {
        <div class="cah-table__played" class:cah-table__played--choosing=choosing>
            {played_cards(&state)
                .into_iter()
                .enumerate()
                .map(|(idx, card)| {
                    let owner = state.card_owner(idx);
                    let on_click = on_choose.zip(owner).map(|(cb, id)| Callback::new(move |()| cb.run(id)));
                    view! { <PlayingCard card=card on_click=on_click/> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
