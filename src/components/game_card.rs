//! Reusable card component for game rooms in the lobby lists.

use leptos::prelude::*;

use crate::net::types::GameRoom;
use crate::routes::game_room_path;

/// A clickable summary of a game room.
#[component]
pub fn GameCard(room: GameRoom) -> impl IntoView {
    let href = game_room_path(room.id);
    let phase = room.phase().label();
    let player_count = room.players.len();
    let locked = room.has_password;
    let GameRoom { name, owner, .. } = room;

    view! {
        <a class="game-card" href=href>
            <span class="game-card__name">{name}</span>
            <span class="game-card__owner">{format!("by {owner}")}</span>
            <span class="game-card__players">{format!("{player_count} players")}</span>
            <span class="game-card__phase">{phase}</span>
            <Show when=move || locked>
                <span class="game-card__lock" title="Password protected">"🔒"</span>
            </Show>
        </a>
    }
}
