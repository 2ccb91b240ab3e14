// View events
// Completions of remote calls, delivered back to the owning view

use super::speculation::Speculation;
use crate::error::ApiError;
use crate::state::{Agent, AgentId, AgentStatusUpdate, AgentToken, ScopeTag, Workspace};

/// Outcome of one asynchronous task spawned by the view
#[derive(Debug)]
pub enum ViewEvent {
    /// Workspace list fetched during `init`
    WorkspacesListed {
        /// Selection counter when `init` was called
        generation: u64,
        /// Workspaces in backend order
        result: Result<Vec<Workspace>, ApiError>,
    },

    /// Metadata of a switched-to workspace
    WorkspaceFetched {
        /// Selection the request was issued under
        scope: ScopeTag,
        /// Fetched workspace
        result: Result<Workspace, ApiError>,
    },

    /// Token fetched for a workspace, or reissued when `scope` is None
    TokenFetched {
        /// Selection the request was issued under; None for an unscoped reissue
        scope: Option<ScopeTag>,
        /// Fetched token
        result: Result<AgentToken, ApiError>,
    },

    /// Agents of a workspace
    AgentsListed {
        /// Selection the request was issued under
        scope: ScopeTag,
        /// Agents in backend order
        result: Result<Vec<Agent>, ApiError>,
    },

    /// Run request accepted or rejected
    RunCompleted {
        /// Workspace the run was requested in
        workspace: String,
        /// Agent asked to run
        agent_id: AgentId,
        /// Acceptance of the request
        result: Result<(), ApiError>,
    },

    /// A spawned task ended without producing its completion
    TaskFailed,

    /// Run control cooldown timer fired
    CooldownElapsed,

    /// Operator dismissed the delete confirmation
    DeleteCancelled {
        /// Agent that was not deleted
        agent_id: AgentId,
    },

    /// Confirmed delete finished
    AgentDeleted {
        /// Selection the request was issued under
        scope: ScopeTag,
        /// Deleted agent
        agent_id: AgentId,
        /// Backend acknowledgement
        result: Result<(), ApiError>,
    },

    /// Status change finished
    StatusUpdated {
        /// Selection the request was issued under
        scope: ScopeTag,
        /// Updated agent
        agent_id: AgentId,
        /// Pre-call `active` value, restored on failure
        speculation: Speculation<bool>,
        /// Authoritative active flag and status
        result: Result<AgentStatusUpdate, ApiError>,
    },
}
