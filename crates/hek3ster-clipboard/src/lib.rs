//! Copy-to-clipboard action with outcome notifications.
//!
//! The action writes literal text to a [`Clipboard`] backend and reports the
//! outcome through a [`Notifier`]: one success notification per successful
//! copy, one failure notification otherwise.

pub mod action;
pub mod backend;
pub mod notify;

pub use action::{ClipboardAction, CopyOutcome};
pub use backend::{
    Clipboard, ClipboardError, CommandClipboard, MemoryClipboard, UnavailableClipboard,
};
pub use notify::{
    Notification, Notifier, RecordingNotifier, TracingNotifier, COPY_FAILURE_MESSAGE,
    COPY_SUCCESS_MESSAGE,
};
