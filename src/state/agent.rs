// Agent model
// Admin-visible metadata of a remote agent plus client-local selection flags

use serde::{Deserialize, Serialize};

/// Unique identifier for an agent
pub type AgentId = u64;

/// Agent status enumeration
/// Reported by the server, never computed locally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    /// Agent is connected and waiting for work
    Online,
    /// Agent is not connected
    #[default]
    Offline,
    /// Agent is currently executing a task
    Running,
    /// Agent has been deactivated by an operator
    Paused,
    /// Any status this client does not know about
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AgentStatus::Online => "online",
            AgentStatus::Offline => "offline",
            AgentStatus::Running => "running",
            AgentStatus::Paused => "paused",
            AgentStatus::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Agent registered to a workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique identifier for the agent
    pub id: AgentId,
    /// Display name of the agent
    pub name: String,
    /// Whether the agent accepts work (false = paused)
    #[serde(default)]
    pub active: bool,
    /// Current status of the agent
    #[serde(default)]
    pub status: AgentStatus,
    /// Checkbox state; drives the select-all flag
    #[serde(skip)]
    pub checked: bool,
    /// Bulk-action membership; read by `current_selection`
    #[serde(skip)]
    pub selected: bool,
}

impl Agent {
    /// Create an active, offline agent with both selection flags cleared
    pub fn new(id: AgentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            active: true,
            status: AgentStatus::Offline,
            checked: false,
            selected: false,
        }
    }
}

/// Body of the status-change request: exactly `{id, name, active}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentUpdate {
    /// Agent being updated
    pub id: AgentId,
    /// Current display name
    pub name: String,
    /// Requested active flag
    pub active: bool,
}

impl From<&Agent> for AgentUpdate {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            name: agent.name.clone(),
            active: agent.active,
        }
    }
}

/// Authoritative fields returned after a status change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AgentStatusUpdate {
    /// Active flag as stored by the server
    pub active: bool,
    /// Status as computed by the server
    #[serde(default)]
    pub status: AgentStatus,
}
