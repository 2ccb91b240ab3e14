// Console collaborators
// Stand-ins used by the binary when no interactive UI is attached

use super::{ClipboardSink, ConfirmationDialog, NotificationSink};
use async_trait::async_trait;
use tracing::info;

/// Writes success notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifications;

impl NotificationSink for ConsoleNotifications {
    fn success(&self, message: &str) {
        info!(notification = message, "Success");
    }
}

/// Dismisses every confirmation dialog
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclineAll;

#[async_trait]
impl ConfirmationDialog for DeclineAll {
    async fn confirm(&self, message: &str) -> bool {
        info!(prompt = message, "No interactive operator, declining");
        false
    }
}

/// Prints copied text to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutClipboard;

impl ClipboardSink for StdoutClipboard {
    fn copy(&self, text: &str) {
        println!("{}", text);
    }
}
