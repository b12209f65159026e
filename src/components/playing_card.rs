//! Single card face, black or white.

use leptos::prelude::*;

use crate::state::round::Card;

/// A card face. Clickable when `on_click` is set.
#[component]
pub fn PlayingCard(
    card: Card,
    #[prop(default = None)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let is_black = card.is_black;
    let is_white = !is_black;
    let clickable = on_click.is_some();
    let Card { text, expansion, .. } = card;

    view! {
        <div
            class="cah-card"
            class:cah-card--black=is_black
            class:cah-card--white=is_white
            class:cah-card--clickable=clickable
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            <span class="cah-card__text">{text}</span>
            {expansion.map(|name| view! { <span class="cah-card__expansion">{name}</span> })}
        </div>
    }
}
