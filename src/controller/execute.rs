// Run control state machine
// One run request at a time across the whole view, followed by a cooldown

use crate::state::AgentId;

/// State of the global run control
///
/// ```text
/// Idle --run_agent--> Running --completion--> CoolingDown --timer--> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecuteState {
    /// Run requests are accepted
    #[default]
    Idle,
    /// A run request for this agent is outstanding
    Running {
        /// Agent the outstanding request targets
        agent_id: AgentId,
    },
    /// The request finished; waiting for the cooldown timer
    CoolingDown,
}

impl ExecuteState {
    /// True while run requests are refused
    pub fn is_disabled(&self) -> bool {
        !matches!(self, ExecuteState::Idle)
    }

    /// Enter `Running` if idle
    /// Returns false if the control is disabled
    pub(crate) fn begin(&mut self, agent_id: AgentId) -> bool {
        if self.is_disabled() {
            return false;
        }
        *self = ExecuteState::Running { agent_id };
        true
    }

    /// The outstanding request completed, success or not
    pub(crate) fn finish(&mut self) {
        *self = ExecuteState::CoolingDown;
    }

    /// Cooldown timer fired
    pub(crate) fn cool(&mut self) {
        if *self == ExecuteState::CoolingDown {
            *self = ExecuteState::Idle;
        }
    }
}
