//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, polling, the state
//! subscription) and delegates rendering details to `components`.

pub mod game_create;
pub mod game_list;
pub(crate) mod game_options_form;
pub mod game_room;
