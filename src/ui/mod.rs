// UI collaborators
// Services the view calls into but does not own: dialogs, toasts and the clipboard

pub mod console;

pub use console::{ConsoleNotifications, DeclineAll, StdoutClipboard};

use async_trait::async_trait;

/// Modal confirmation dialog
#[async_trait]
pub trait ConfirmationDialog: Send + Sync {
    /// Show `message` and wait for the operator
    /// Returns true on confirm, false if the dialog was dismissed
    async fn confirm(&self, message: &str) -> bool;
}

/// Success toasts
pub trait NotificationSink: Send + Sync {
    /// Show a success message; fire-and-forget
    fn success(&self, message: &str);
}

/// System clipboard
pub trait ClipboardSink: Send + Sync {
    /// Copy `text`; best-effort, failures are not reported
    fn copy(&self, text: &str);
}
