//! Remote service contracts
//!
//! The view talks to the platform through two services. [`ApiClient`] implements
//! both over HTTP; tests substitute in-memory fakes.

pub mod http;

pub use http::ApiClient;

use crate::error::ApiError;
use crate::state::{Agent, AgentId, AgentStatusUpdate, AgentToken, AgentUpdate, Workspace};
use async_trait::async_trait;

/// Workspace lookups
#[async_trait]
pub trait WorkspaceService: Send + Sync {
    /// All workspaces, in backend order
    async fn list(&self) -> Result<Vec<Workspace>, ApiError>;

    /// Full metadata of one workspace
    async fn get(&self, name: &str) -> Result<Workspace, ApiError>;
}

/// Agent and enrollment-token operations
#[async_trait]
pub trait AgentService: Send + Sync {
    /// Current enrollment token of a workspace
    async fn get_token(&self, workspace: &str) -> Result<AgentToken, ApiError>;

    /// Issue a new enrollment token (not scoped to a workspace)
    async fn reissue_token(&self) -> Result<AgentToken, ApiError>;

    /// Agents registered to a workspace, in backend order
    async fn list(&self, workspace: &str) -> Result<Vec<Agent>, ApiError>;

    /// Ask the agent to run; resolves once the request is accepted
    async fn run(&self, workspace: &str, agent_id: AgentId) -> Result<(), ApiError>;

    /// Delete an agent
    async fn delete(&self, workspace: &str, agent_id: AgentId) -> Result<(), ApiError>;

    /// Update name/active; returns the authoritative active flag and status
    async fn update(
        &self,
        workspace: &str,
        update: &AgentUpdate,
    ) -> Result<AgentStatusUpdate, ApiError>;
}
