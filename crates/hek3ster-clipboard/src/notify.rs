//! Transient notifications reporting copy outcomes.

use std::sync::Mutex;

/// Message shown after a successful copy.
pub const COPY_SUCCESS_MESSAGE: &str = "Copied to clipboard!";

/// Message shown when the clipboard refused the write.
pub const COPY_FAILURE_MESSAGE: &str = "Could not copy to clipboard";

/// A transient, user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Failure(String),
}

impl Notification {
    pub fn copied() -> Self {
        Self::Success(COPY_SUCCESS_MESSAGE.to_string())
    }

    pub fn copy_failed(reason: impl std::fmt::Display) -> Self {
        Self::Failure(format!("{}: {}", COPY_FAILURE_MESSAGE, reason))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Failure(m) => m,
        }
    }
}

/// Surface that displays notifications.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, notification: Notification);
}

/// Emits notifications as log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification {
            Notification::Success(message) => tracing::info!("{}", message),
            Notification::Failure(message) => tracing::warn!("{}", message),
        }
    }
}

/// Keeps every notification it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications received so far, oldest first.
    pub fn received(&self) -> Vec<Notification> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notification);
    }
}
