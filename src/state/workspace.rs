// Workspace selection
// Tracks the workspace list, the active workspace and the scope of in-flight requests

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Workspace as returned by the backend
/// Everything except the name is kept as an opaque map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    /// Unique workspace name
    pub name: String,
    /// Remaining backend fields, untouched
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Workspace {
    /// Create a workspace with no metadata
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: Map::new(),
        }
    }
}

/// Identifies which workspace selection a request was issued under
///
/// The generation is bumped on every selection, so a response issued for an
/// earlier selection never matches, even when the same name is selected again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopeTag {
    /// Workspace the request targets
    pub workspace: String,
    /// Selection counter at issue time
    pub generation: u64,
}

/// Active workspace and its metadata
#[derive(Debug, Clone, Default)]
pub struct WorkspaceSelector {
    workspaces: Vec<Workspace>,
    active: Option<String>,
    data: Option<Workspace>,
    generation: u64,
}

impl WorkspaceSelector {
    /// Create a selector with no workspaces and nothing active
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly fetched list and activate its first entry
    /// Returns the new scope, or None if the list was empty
    pub fn seed(&mut self, workspaces: Vec<Workspace>) -> Option<ScopeTag> {
        let first = workspaces.first().cloned();
        self.workspaces = workspaces;
        let first = first?;
        let scope = self.activate(first.name.clone());
        self.data = Some(first);
        Some(scope)
    }

    /// Store a list without touching the active selection
    pub fn set_workspaces(&mut self, workspaces: Vec<Workspace>) {
        self.workspaces = workspaces;
    }

    /// Selection counter, bumped by every activation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Make `name` the active workspace and open a new scope
    /// Metadata of the previous workspace is dropped until the new one arrives
    pub fn activate(&mut self, name: String) -> ScopeTag {
        self.generation += 1;
        self.data = None;
        self.active = Some(name.clone());
        ScopeTag {
            workspace: name,
            generation: self.generation,
        }
    }

    /// Scope of the current selection, if any
    pub fn scope(&self) -> Option<ScopeTag> {
        self.active.as_ref().map(|name| ScopeTag {
            workspace: name.clone(),
            generation: self.generation,
        })
    }

    /// True if a response tagged with `tag` still belongs to the current selection
    pub fn is_current(&self, tag: &ScopeTag) -> bool {
        self.generation == tag.generation && self.active.as_deref() == Some(tag.workspace.as_str())
    }

    /// Store metadata fetched for the active workspace
    pub fn set_data(&mut self, workspace: Workspace) {
        self.data = Some(workspace);
    }

    /// Name of the active workspace
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Metadata of the active workspace, once fetched
    pub fn data(&self) -> Option<&Workspace> {
        self.data.as_ref()
    }

    /// All workspaces in backend order
    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }
}
