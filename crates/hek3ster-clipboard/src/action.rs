//! The copy action: write text, then report the outcome exactly once.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::backend::{Clipboard, ClipboardError};
use crate::notify::{Notification, Notifier};

/// Result of a single copy.
#[derive(Debug)]
pub enum CopyOutcome {
    Copied,
    Failed(ClipboardError),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied)
    }
}

/// Copies literal text to a clipboard and notifies the user of the outcome.
///
/// Every invocation is independent: no retry, no timeout, no cancellation.
pub struct ClipboardAction<C, N> {
    clipboard: Arc<C>,
    notifier: Arc<N>,
}

impl<C, N> Clone for ClipboardAction<C, N> {
    fn clone(&self) -> Self {
        Self {
            clipboard: Arc::clone(&self.clipboard),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<C: Clipboard, N: Notifier> ClipboardAction<C, N> {
    pub fn new(clipboard: Arc<C>, notifier: Arc<N>) -> Self {
        Self {
            clipboard,
            notifier,
        }
    }

    /// Copy `text` verbatim and wait for the outcome.
    ///
    /// Failures are reported through the notifier and the returned outcome,
    /// never as a panic.
    pub async fn copy(&self, text: &str) -> CopyOutcome {
        match self.clipboard.write_text(text).await {
            Ok(()) => {
                tracing::debug!(
                    backend = self.clipboard.name(),
                    bytes = text.len(),
                    "Copied text to clipboard"
                );
                self.notifier.notify(Notification::copied());
                CopyOutcome::Copied
            }
            Err(e) => {
                tracing::debug!(backend = self.clipboard.name(), "Clipboard write failed: {}", e);
                self.notifier.notify(Notification::copy_failed(&e));
                CopyOutcome::Failed(e)
            }
        }
    }

    /// Fire-and-forget copy on the tokio runtime.
    ///
    /// The handle may be dropped; the copy and its notification still happen.
    pub fn spawn(&self, text: impl Into<String>) -> JoinHandle<CopyOutcome> {
        let action = self.clone();
        let text = text.into();
        tokio::spawn(async move { action.copy(&text).await })
    }
}
