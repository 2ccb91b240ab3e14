// Workspace selection and dependent reloads
// A new selection discards the token and agent list before refetching both

use super::{AgentsView, ViewEvent};
use crate::error::ApiError;
use crate::state::{Agent, AgentToken, ScopeTag, Workspace};
use std::sync::Arc;
use tracing::{debug, info, warn};

impl AgentsView {
    /// Fetch the workspace list and activate its first entry
    ///
    /// If a workspace is selected before the list arrives, that selection is
    /// kept and only the list is stored.
    pub fn init(&mut self) {
        let workspaces = Arc::clone(&self.services.workspaces);
        let generation = self.selector.generation();
        self.spawn(async move {
            let result = workspaces.list().await;
            ViewEvent::WorkspacesListed { generation, result }
        });
    }

    /// Make `name` the active workspace and reload everything that depends on it
    pub fn switch_workspace(&mut self, name: impl Into<String>) {
        let scope = self.selector.activate(name.into());
        info!(workspace = %scope.workspace, "Switching workspace");
        self.discard_scoped_state();

        let workspaces = Arc::clone(&self.services.workspaces);
        let tag = scope.clone();
        self.spawn(async move {
            let result = workspaces.get(&tag.workspace).await;
            ViewEvent::WorkspaceFetched { scope: tag, result }
        });

        self.load_scope(scope);
    }

    /// Refetch the enrollment token of the active workspace
    pub fn refresh_workspace_token(&mut self) {
        match self.selector.scope() {
            Some(scope) => self.request_token(scope),
            None => debug!("No active workspace, token refresh skipped"),
        }
    }

    /// Refetch the agent list of the active workspace
    pub fn reload_agents(&mut self) {
        match self.selector.scope() {
            Some(scope) => self.request_agents(scope),
            None => debug!("No active workspace, agent reload skipped"),
        }
    }

    fn discard_scoped_state(&mut self) {
        self.tokens.clear();
        self.registry.clear();
        self.selection.reset();
    }

    fn load_scope(&mut self, scope: ScopeTag) {
        self.request_token(scope.clone());
        self.request_agents(scope);
    }

    fn request_token(&mut self, scope: ScopeTag) {
        let agents = Arc::clone(&self.services.agents);
        self.spawn(async move {
            let result = agents.get_token(&scope.workspace).await;
            ViewEvent::TokenFetched {
                scope: Some(scope),
                result,
            }
        });
    }

    fn request_agents(&mut self, scope: ScopeTag) {
        let agents = Arc::clone(&self.services.agents);
        self.spawn(async move {
            let result = agents.list(&scope.workspace).await;
            ViewEvent::AgentsListed { scope, result }
        });
    }

    /// Discard completions issued under an earlier selection
    fn is_stale(&self, scope: &ScopeTag, what: &str) -> bool {
        let stale = !self.selector.is_current(scope);
        if stale {
            debug!(
                workspace = %scope.workspace,
                generation = scope.generation,
                "Discarding stale {}",
                what
            );
        }
        stale
    }

    pub(super) fn on_workspaces_listed(
        &mut self,
        generation: u64,
        result: Result<Vec<Workspace>, ApiError>,
    ) {
        let workspaces = match result {
            Ok(workspaces) => workspaces,
            Err(e) if e.is_unauthorized() => {
                warn!(error = %e, "Failed to fetch workspaces, check AGENTS_API_TOKEN");
                return;
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch workspaces");
                return;
            }
        };

        if self.selector.generation() != generation {
            debug!(
                count = workspaces.len(),
                "Workspace selected during init, keeping it"
            );
            self.selector.set_workspaces(workspaces);
            return;
        }

        match self.selector.seed(workspaces) {
            Some(scope) => {
                info!(workspace = %scope.workspace, "Workspace list loaded");
                self.discard_scoped_state();
                self.load_scope(scope);
            }
            None => warn!("No workspaces available"),
        }
    }

    pub(super) fn on_workspace_fetched(
        &mut self,
        scope: ScopeTag,
        result: Result<Workspace, ApiError>,
    ) {
        if self.is_stale(&scope, "workspace metadata") {
            return;
        }
        match result {
            Ok(workspace) => self.selector.set_data(workspace),
            Err(e) => warn!(workspace = %scope.workspace, error = %e, "Failed to fetch workspace"),
        }
    }

    pub(super) fn on_agents_listed(&mut self, scope: ScopeTag, result: Result<Vec<Agent>, ApiError>) {
        if self.is_stale(&scope, "agent list") {
            return;
        }
        match result {
            Ok(agents) => {
                let count = self.registry.replace(agents);
                self.selection.reset();
                debug!(workspace = %scope.workspace, count = count, "Agents loaded");
            }
            Err(e) => warn!(workspace = %scope.workspace, error = %e, "Failed to fetch agents"),
        }
    }

    pub(super) fn on_token_fetched(
        &mut self,
        scope: Option<ScopeTag>,
        result: Result<AgentToken, ApiError>,
    ) {
        if let Some(scope) = &scope {
            if self.is_stale(scope, "agent token") {
                return;
            }
        }
        match result {
            Ok(token) => self.tokens.replace(token),
            Err(e) => warn!(error = %e, "Failed to fetch agent token"),
        }
    }
}
