//! Agents view controller
//!
//! [`AgentsView`] owns every piece of view state for one session. Operations
//! return immediately: remote calls run as spawned tasks whose completions come
//! back as [`ViewEvent`]s, and all state is mutated only while the owner
//! processes those events, one at a time.
//!
//! ```text
//! operation --spawn--> remote call --ViewEvent--> process_next() --> apply()
//! ```
//!
//! A tokio runtime must be running when operations are invoked.

pub mod constants;
mod actions;
mod events;
mod execute;
mod speculation;
mod token;
mod workspace;

pub use events::ViewEvent;
pub use execute::ExecuteState;
pub use speculation::Speculation;

use crate::api::{AgentService, WorkspaceService};
use crate::config::ViewConfig;
use crate::state::{
    Agent, AgentRegistry, AgentToken, SelectionModel, TokenManager, Workspace, WorkspaceSelector,
};
use crate::ui::{ClipboardSink, ConfirmationDialog, NotificationSink};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

/// External collaborators the view calls into
#[derive(Clone)]
pub struct Services {
    /// Workspace lookups
    pub workspaces: Arc<dyn WorkspaceService>,
    /// Agent and token operations
    pub agents: Arc<dyn AgentService>,
    /// Modal confirmation before destructive actions
    pub dialog: Arc<dyn ConfirmationDialog>,
    /// Success toasts
    pub notifications: Arc<dyn NotificationSink>,
    /// System clipboard
    pub clipboard: Arc<dyn ClipboardSink>,
}

/// Controller for the agents administration page
pub struct AgentsView {
    services: Services,
    config: ViewConfig,
    selector: WorkspaceSelector,
    tokens: TokenManager,
    registry: AgentRegistry,
    selection: SelectionModel,
    execute: ExecuteState,
    events_tx: mpsc::UnboundedSender<ViewEvent>,
    events_rx: mpsc::UnboundedReceiver<ViewEvent>,
    pending: usize,
}

impl AgentsView {
    /// Create an empty view; call [`AgentsView::init`] to load it
    pub fn new(services: Services, config: ViewConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            services,
            config,
            selector: WorkspaceSelector::new(),
            tokens: TokenManager::new(),
            registry: AgentRegistry::new(),
            selection: SelectionModel::new(),
            execute: ExecuteState::default(),
            events_tx,
            events_rx,
            pending: 0,
        }
    }

    /// Run `task` in the background and queue its event for this view
    /// A task that panics or is cancelled still queues [`ViewEvent::TaskFailed`]
    fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ViewEvent> + Send + 'static,
    {
        self.pending += 1;
        let events_tx = self.events_tx.clone();
        let handle = tokio::spawn(task);
        tokio::spawn(async move {
            let event = match handle.await {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!(error = %e, "View task ended without a result");
                    ViewEvent::TaskFailed
                }
            };
            if events_tx.send(event).is_err() {
                tracing::debug!("View dropped before task completed");
            }
        });
    }

    /// Number of spawned tasks whose events have not been applied yet
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Wait for the next completion and apply it
    /// Returns false immediately if nothing is outstanding
    pub async fn process_next(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        match self.events_rx.recv().await {
            Some(event) => {
                self.pending -= 1;
                self.apply(event);
                true
            }
            None => false,
        }
    }

    /// Apply completions that are already queued, without waiting
    /// Returns the number of events applied
    pub fn process_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.pending -= 1;
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Process completions until no task is outstanding
    /// Includes follow-up tasks such as the run cooldown timer
    ///
    /// Every spawned task accounts for exactly one event, so this returns once
    /// each of them has finished. A collaborator that never returns (a dialog
    /// left open, a request without a timeout) keeps it waiting.
    pub async fn settle(&mut self) {
        while self.process_next().await {}
    }

    fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::WorkspacesListed { generation, result } => {
                self.on_workspaces_listed(generation, result)
            }
            ViewEvent::WorkspaceFetched { scope, result } => {
                self.on_workspace_fetched(scope, result)
            }
            ViewEvent::TokenFetched { scope, result } => self.on_token_fetched(scope, result),
            ViewEvent::AgentsListed { scope, result } => self.on_agents_listed(scope, result),
            ViewEvent::RunCompleted {
                workspace,
                agent_id,
                result,
            } => self.on_run_completed(workspace, agent_id, result),
            ViewEvent::TaskFailed => {}
            ViewEvent::CooldownElapsed => self.execute.cool(),
            // Dismissed dialogs are a silent no-op
            ViewEvent::DeleteCancelled { .. } => {}
            ViewEvent::AgentDeleted {
                scope,
                agent_id,
                result,
            } => self.on_agent_deleted(scope, agent_id, result),
            ViewEvent::StatusUpdated {
                scope,
                agent_id,
                speculation,
                result,
            } => self.on_status_updated(scope, agent_id, speculation, result),
        }
    }

    /// Flip `checked` on the agent at `index`
    /// Returns the new value, or None if `index` is out of range
    pub fn toggle_agent(&mut self, index: usize) -> Option<bool> {
        self.selection.toggle_one(&mut self.registry, index)
    }

    /// Set the header checkbox value that `toggle_all` will broadcast
    pub fn set_select_all(&mut self, flag: bool) {
        self.selection.set_select_all(flag);
    }

    /// Apply the current select-all flag to every agent
    pub fn toggle_all(&mut self) {
        self.selection.toggle_all(&mut self.registry);
    }

    /// Agents marked for a bulk action
    pub fn current_selection(&self) -> Vec<&Agent> {
        SelectionModel::current_selection(&self.registry)
    }

    /// All workspaces, in backend order
    pub fn workspaces(&self) -> &[Workspace] {
        self.selector.workspaces()
    }

    /// Name of the active workspace
    pub fn active_workspace(&self) -> Option<&str> {
        self.selector.active()
    }

    /// Metadata of the active workspace, once fetched
    pub fn workspace_data(&self) -> Option<&Workspace> {
        self.selector.data()
    }

    /// Enrollment token of the current context
    pub fn token(&self) -> &AgentToken {
        self.tokens.current()
    }

    /// Agents of the active workspace, in display order
    pub fn agents(&self) -> &[Agent] {
        self.registry.as_slice()
    }

    /// Registry of the active workspace
    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Select-all flag
    pub fn select_all(&self) -> bool {
        self.selection.select_all()
    }

    /// State of the run control
    pub fn execute_state(&self) -> ExecuteState {
        self.execute
    }

    /// True while run requests are refused
    pub fn is_execute_disabled(&self) -> bool {
        self.execute.is_disabled()
    }
}
