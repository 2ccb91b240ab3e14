// State management module
// Agent model, registry, selection, workspace and token state owned by the view

pub mod agent;
pub mod registry;
pub mod selection;
pub mod token;
pub mod workspace;

pub use agent::{Agent, AgentId, AgentStatus, AgentStatusUpdate, AgentUpdate};
pub use registry::AgentRegistry;
pub use selection::SelectionModel;
pub use token::{AgentToken, TokenManager};
pub use workspace::{ScopeTag, Workspace, WorkspaceSelector};
