//! Copy an onboarding step's code to the system clipboard.

use std::sync::Arc;

use anyhow::Result;
use hek3ster_catalog::Catalog;
use hek3ster_clipboard::{
    Clipboard, ClipboardAction, CommandClipboard, CopyOutcome, Notifier, TracingNotifier,
    UnavailableClipboard,
};

/// Run the copy command.
pub async fn run(step: usize) -> Result<()> {
    let step = Catalog::builtin().step(step)?;

    match CommandClipboard::detect() {
        Some(clipboard) => {
            tracing::debug!("Using {} for clipboard access", clipboard.program());
            copy_with(Arc::new(clipboard), Arc::new(TracingNotifier), step.code).await
        }
        None => {
            let clipboard = UnavailableClipboard::new("no clipboard program found on PATH");
            copy_with(Arc::new(clipboard), Arc::new(TracingNotifier), step.code).await
        }
    }
}

async fn copy_with<C: Clipboard, N: Notifier>(
    clipboard: Arc<C>,
    notifier: Arc<N>,
    text: &str,
) -> Result<()> {
    let action = ClipboardAction::new(clipboard, notifier);

    match action.copy(text).await {
        CopyOutcome::Copied => Ok(()),
        CopyOutcome::Failed(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hek3ster_clipboard::{MemoryClipboard, Notification, RecordingNotifier};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn copies_step_code_verbatim() {
        let clipboard = Arc::new(MemoryClipboard::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let code = Catalog::builtin().step(3).unwrap().code;

        copy_with(Arc::clone(&clipboard), Arc::clone(&notifier), code)
            .await
            .unwrap();

        assert_eq!(clipboard.contents().as_deref(), Some(code));
        assert_eq!(notifier.received(), vec![Notification::copied()]);
    }

    #[tokio::test]
    async fn unavailable_clipboard_fails() {
        let notifier = Arc::new(RecordingNotifier::new());
        let result = copy_with(
            Arc::new(UnavailableClipboard::new("headless")),
            Arc::clone(&notifier),
            "hek3ster create --config cluster.yaml",
        )
        .await;

        assert!(result.is_err());
        let received = notifier.received();
        assert_eq!(received.len(), 1);
        assert!(!received[0].is_success());
    }

    #[tokio::test]
    async fn unknown_step_is_an_error() {
        let err = run(7).await.unwrap_err();
        assert!(err.to_string().contains('7'));
    }
}
