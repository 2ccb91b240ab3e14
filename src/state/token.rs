// Enrollment token
// Credential new agents use to register into a workspace

use serde::{Deserialize, Serialize};

/// Enrollment token record, replaced wholesale on every fetch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentToken {
    /// Server-side token identifier
    #[serde(default)]
    pub id: Option<u64>,
    /// Token value, percent-encoded as delivered by the server
    #[serde(default)]
    pub token: Option<String>,
}

impl AgentToken {
    /// The token value with percent-encoding removed
    /// Falls back to the raw value if it does not decode to UTF-8
    pub fn decoded(&self) -> Option<String> {
        let raw = self.token.as_deref()?;
        Some(match urlencoding::decode(raw) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => raw.to_string(),
        })
    }
}

/// Holds the token of the current workspace context
#[derive(Debug, Clone, Default)]
pub struct TokenManager {
    current: AgentToken,
}

impl TokenManager {
    /// Create a manager with an empty token
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the token record; never merges fields
    pub fn replace(&mut self, token: AgentToken) {
        self.current = token;
    }

    /// Reset to the empty record
    pub fn clear(&mut self) {
        self.current = AgentToken::default();
    }

    /// Current token record
    pub fn current(&self) -> &AgentToken {
        &self.current
    }
}
