// Enrollment token actions

use super::constants::TOKEN_COPIED;
use super::{AgentsView, ViewEvent};
use std::sync::Arc;
use tracing::debug;

impl AgentsView {
    /// Request a brand-new enrollment token
    ///
    /// Not scoped to a workspace and never de-duplicated: when several requests
    /// overlap, the last response to arrive wins.
    pub fn refresh_token(&mut self) {
        let agents = Arc::clone(&self.services.agents);
        self.spawn(async move {
            ViewEvent::TokenFetched {
                scope: None,
                result: agents.reissue_token().await,
            }
        });
    }

    /// Copy the decoded token to the clipboard and notify the operator
    ///
    /// The clipboard is best-effort, so success is reported whenever a token
    /// was handed over. Returns false (and stays silent) if there is no token.
    pub fn copy_to_clipboard(&self) -> bool {
        let Some(text) = self.tokens.current().decoded() else {
            debug!("No token to copy");
            return false;
        };
        self.services.clipboard.copy(&text);
        self.services.notifications.success(TOKEN_COPIED);
        true
    }
}
