//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, lobby items and chrome. They read shared state
//! from Leptos context providers or take it as props. Player actions are
//! reported through callbacks and sent by the pages; the one exception is
//! `ExpansionsSelect`, which loads its own list of expansion names.

pub mod app_bar;
pub mod error_list;
pub mod expansions_select;
pub mod game_card;
pub mod hand;
pub mod playing_card;
pub mod table;
