//! Agents View
//!
//! Client-side controller for the agent administration page of a
//! penetration-testing platform. Keeps a local view of the active workspace,
//! its enrollment token and its agents in sync with the remote API.
//! The binary entry point is in `src/main.rs`.

pub mod api;
pub mod config;
/// The `AgentsView` controller, its event loop and remote-backed actions
pub mod controller;
pub mod error;
/// View state: agents, registry, selection, workspaces and tokens
pub mod state;
/// Collaborator traits for dialogs, notifications and the clipboard
pub mod ui;

pub use controller::{AgentsView, ExecuteState, ViewEvent};
pub use error::ApiError;
