// Agent registry
// In-memory list of the active workspace's agents, in server order

use super::agent::{Agent, AgentId};
use std::collections::HashSet;

/// Ordered list of agents for the active workspace
/// Holds at most one agent per id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentRegistry {
    agents: Vec<Agent>,
}

impl AgentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a fresh server response
    /// Order is preserved; a repeated id keeps its first occurrence
    /// Returns the number of agents now held
    pub fn replace(&mut self, agents: Vec<Agent>) -> usize {
        let mut seen = HashSet::with_capacity(agents.len());
        self.agents = agents
            .into_iter()
            .filter(|agent| {
                let fresh = seen.insert(agent.id);
                if !fresh {
                    tracing::warn!(agent_id = agent.id, "Dropping duplicate agent from listing");
                }
                fresh
            })
            .collect();
        self.agents.len()
    }

    /// Drop every agent
    pub fn clear(&mut self) {
        self.agents.clear();
    }

    /// Remove the agent with the given ID
    /// Returns the removed agent if it existed
    pub fn remove_by_id(&mut self, id: AgentId) -> Option<Agent> {
        let index = self.agents.iter().position(|agent| agent.id == id)?;
        Some(self.agents.remove(index))
    }

    /// Get an agent by ID
    pub fn find_by_id(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    /// Get an agent by ID
    /// Returns a mutable reference to the agent if found
    pub fn find_by_id_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|agent| agent.id == id)
    }

    /// Get the agent at a display position
    pub fn get(&self, index: usize) -> Option<&Agent> {
        self.agents.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Agent> {
        self.agents.get_mut(index)
    }

    /// Iterate agents in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Agent> {
        self.agents.iter_mut()
    }

    /// All agents as a slice, in display order
    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    /// Get the number of agents in the registry
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// True if the registry holds no agents
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
