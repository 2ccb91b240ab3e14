// Agent actions
// Run, delete and status change, each backed by one remote call

use super::constants::{AGENT_ACTIVE, AGENT_PAUSED, AGENT_REMOVED, AGENT_RUNNING, DELETE_CONFIRMATION};
use super::speculation::Speculation;
use super::{AgentsView, ViewEvent};
use crate::error::ApiError;
use crate::state::{AgentId, AgentStatusUpdate, AgentUpdate, ScopeTag};
use std::sync::Arc;
use tracing::{debug, warn};

impl AgentsView {
    /// Ask an agent to run
    ///
    /// Refused while another run is outstanding or cooling down. Returns true
    /// if the request was issued.
    pub fn run_agent(&mut self, agent_id: AgentId) -> bool {
        let Some(scope) = self.selector.scope() else {
            debug!(agent_id = agent_id, "No active workspace, run skipped");
            return false;
        };
        if !self.execute.begin(agent_id) {
            debug!(agent_id = agent_id, state = ?self.execute, "Run control disabled");
            return false;
        }

        let agents = Arc::clone(&self.services.agents);
        self.spawn(async move {
            let result = agents.run(&scope.workspace, agent_id).await;
            ViewEvent::RunCompleted {
                workspace: scope.workspace,
                agent_id,
                result,
            }
        });
        true
    }

    /// Delete an agent after the operator confirms
    ///
    /// The registry is only touched once the backend acknowledges the delete.
    pub fn delete_agent(&mut self, agent_id: AgentId) {
        let Some(scope) = self.selector.scope() else {
            debug!(agent_id = agent_id, "No active workspace, delete skipped");
            return;
        };

        let dialog = Arc::clone(&self.services.dialog);
        let agents = Arc::clone(&self.services.agents);
        self.spawn(async move {
            if !dialog.confirm(DELETE_CONFIRMATION).await {
                return ViewEvent::DeleteCancelled { agent_id };
            }
            let result = agents.delete(&scope.workspace, agent_id).await;
            ViewEvent::AgentDeleted {
                scope,
                agent_id,
                result,
            }
        });
    }

    /// Toggle an agent between active and paused
    ///
    /// `active` flips locally before the request is sent and is restored if the
    /// server rejects the change. Two overlapping calls on the same agent are
    /// not serialized; the last completion wins. Returns false if the agent is
    /// not in the registry.
    pub fn change_status_agent(&mut self, agent_id: AgentId) -> bool {
        let Some(scope) = self.selector.scope() else {
            return false;
        };
        let agents = Arc::clone(&self.services.agents);
        let Some(agent) = self.registry.find_by_id_mut(agent_id) else {
            debug!(agent_id = agent_id, "Status change for unknown agent");
            return false;
        };

        let desired = !agent.active;
        let speculation = Speculation::apply(&mut agent.active, desired);
        let update = AgentUpdate::from(&*agent);

        self.spawn(async move {
            let result = agents.update(&scope.workspace, &update).await;
            ViewEvent::StatusUpdated {
                scope,
                agent_id,
                speculation,
                result,
            }
        });
        true
    }

    pub(super) fn on_run_completed(
        &mut self,
        workspace: String,
        agent_id: AgentId,
        result: Result<(), ApiError>,
    ) {
        match result {
            Ok(()) => self.services.notifications.success(AGENT_RUNNING),
            Err(e) => warn!(workspace = %workspace, agent_id = agent_id, error = %e, "Failed to run agent"),
        }

        self.execute.finish();
        let cooldown = self.config.run_cooldown;
        self.spawn(async move {
            tokio::time::sleep(cooldown).await;
            ViewEvent::CooldownElapsed
        });
    }

    pub(super) fn on_agent_deleted(
        &mut self,
        scope: ScopeTag,
        agent_id: AgentId,
        result: Result<(), ApiError>,
    ) {
        if let Err(e) = result {
            warn!(workspace = %scope.workspace, agent_id = agent_id, error = %e, "Failed to delete agent");
            return;
        }

        if self.selector.is_current(&scope) {
            self.registry.remove_by_id(agent_id);
            self.selection.recompute(&self.registry);
        }
        self.services.notifications.success(AGENT_REMOVED);
    }

    pub(super) fn on_status_updated(
        &mut self,
        scope: ScopeTag,
        agent_id: AgentId,
        speculation: Speculation<bool>,
        result: Result<AgentStatusUpdate, ApiError>,
    ) {
        let current = self.selector.is_current(&scope);
        match result {
            Ok(update) => {
                if current {
                    if let Some(agent) = self.registry.find_by_id_mut(agent_id) {
                        agent.status = update.status;
                    }
                }
                let message = if update.active { AGENT_ACTIVE } else { AGENT_PAUSED };
                self.services.notifications.success(message);
            }
            Err(e) => {
                warn!(
                    workspace = %scope.workspace,
                    agent_id = agent_id,
                    previous_active = *speculation.snapshot(),
                    error = %e,
                    "Failed to update agent, restoring previous state"
                );
                if !current {
                    return;
                }
                if let Some(agent) = self.registry.find_by_id_mut(agent_id) {
                    speculation.rollback(&mut agent.active);
                }
            }
        }
    }
}
