//! Operator-facing strings
//!
//! Centralized so the notification wording stays consistent.

/// Shown once the backend accepts a run request
pub const AGENT_RUNNING: &str = "The Agent is running";

/// Shown after a confirmed delete succeeds
pub const AGENT_REMOVED: &str = "The Agent has been removed";

/// Shown when the server reports the agent inactive after a status change
pub const AGENT_PAUSED: &str = "The Agent has been paused";

/// Shown when the server reports the agent active after a status change
pub const AGENT_ACTIVE: &str = "The Agent is active";

/// Shown after the token is handed to the clipboard
pub const TOKEN_COPIED: &str = "Token copied to clipboard";

/// Confirmation prompt before deleting an agent
pub const DELETE_CONFIRMATION: &str =
    "A agent will be deleted. This action cannot be undone. Are you sure you want to proceed?";
