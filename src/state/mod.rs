//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `games`, `errors`, ...) so components
//! depend on small focused models. Everything here is plain data with pure
//! transitions; Leptos signals wrap these values at the page level.

pub mod errors;
pub mod game_options;
pub mod games;
pub mod hand;
pub mod round;
pub mod session;
pub mod start_game;
