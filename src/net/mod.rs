//! Networking modules for REST calls and session state pushes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `state_socket` manages the session WebSocket,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod state_socket;
pub mod types;
