// Selection model
// Per-agent checkbox flags and the derived select-all flag

use super::agent::Agent;
use super::registry::AgentRegistry;

/// Tracks the select-all checkbox for the agent table
///
/// Agents carry two flags. `checked` mirrors the row checkbox and is what the
/// select-all flag is derived from. `selected` marks membership in the bulk
/// action set and is only written by [`SelectionModel::toggle_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionModel {
    select_all: bool,
}

impl SelectionModel {
    /// Create a selection model with the select-all flag cleared
    pub fn new() -> Self {
        Self::default()
    }

    /// Current select-all flag
    pub fn select_all(&self) -> bool {
        self.select_all
    }

    /// Set the select-all flag without touching any agent
    /// The UI binds the header checkbox here before calling `toggle_all`
    pub fn set_select_all(&mut self, flag: bool) {
        self.select_all = flag;
    }

    /// Clear the flag, used whenever the registry is replaced
    pub fn reset(&mut self) {
        self.select_all = false;
    }

    /// Flip `checked` on the agent at `index`
    /// Returns the new `checked` value, or None if the index is out of range
    pub fn toggle_one(&mut self, registry: &mut AgentRegistry, index: usize) -> Option<bool> {
        let agent = registry.get_mut(index)?;
        agent.checked = !agent.checked;
        let checked = agent.checked;

        if checked {
            self.recompute(registry);
        } else {
            self.select_all = false;
        }
        Some(checked)
    }

    /// Broadcast the current flag to every agent's `checked` and `selected`
    /// The flag itself is not inverted
    pub fn toggle_all(&self, registry: &mut AgentRegistry) {
        let flag = self.select_all;
        for agent in registry.iter_mut() {
            agent.checked = flag;
            agent.selected = flag;
        }
    }

    /// Re-derive the flag: true iff the registry is non-empty and all agents are checked
    pub fn recompute(&mut self, registry: &AgentRegistry) {
        self.select_all = !registry.is_empty() && registry.iter().all(|agent| agent.checked);
    }

    /// Agents currently marked for a bulk action
    pub fn current_selection(registry: &AgentRegistry) -> Vec<&Agent> {
        registry.iter().filter(|agent| agent.selected).collect()
    }
}
