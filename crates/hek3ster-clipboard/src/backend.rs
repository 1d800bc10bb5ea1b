//! Clipboard backends.

use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::sync::Mutex;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// A place text can be copied to.
///
/// The clipboard is owned by the host; concurrent writers simply overwrite
/// each other.
pub trait Clipboard: Send + Sync + 'static {
    /// Short backend name for logs.
    fn name(&self) -> &str;

    /// Replace the clipboard contents with `text`, verbatim.
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> + Send;
}

/// Errors raised by clipboard backends.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to {program}: {source}")]
    Write {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    CommandFailed { program: String, status: String },
}

/// In-process clipboard.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents, if anything was copied.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut contents = self
            .contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *contents = Some(text.to_string());
        Ok(())
    }
}

/// A clipboard that refuses every write, e.g. when no system utility exists.
#[derive(Debug, Clone)]
pub struct UnavailableClipboard {
    reason: String,
}

impl UnavailableClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Clipboard for UnavailableClipboard {
    fn name(&self) -> &str {
        "unavailable"
    }

    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(self.reason.clone()))
    }
}

/// System clipboard reached through a platform utility reading stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Use an explicit program and arguments.
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Pick the first clipboard utility available on this machine.
    pub fn detect() -> Option<Self> {
        candidates()
            .into_iter()
            .find(|c| find_in_path(&c.program).is_some())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command_failed(&self, status: ExitStatus) -> ClipboardError {
        ClipboardError::CommandFailed {
            program: self.program.clone(),
            status: status.to_string(),
        }
    }
}

impl Clipboard for CommandClipboard {
    fn name(&self) -> &str {
        &self.program
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(source) = stdin.write_all(text.as_bytes()).await {
                drop(stdin);
                // A utility that exits without reading breaks the pipe.
                if let Ok(status) = child.wait().await {
                    if !status.success() {
                        return Err(self.command_failed(status));
                    }
                }
                return Err(ClipboardError::Write {
                    program: self.program.clone(),
                    source,
                });
            }
            // Closing stdin signals end of input.
            drop(stdin);
        }

        let status = child.wait().await.map_err(|source| ClipboardError::Write {
            program: self.program.clone(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(self.command_failed(status))
        }
    }
}

/// Clipboard utilities to try, in preference order for this platform.
fn candidates() -> Vec<CommandClipboard> {
    if cfg!(target_os = "macos") {
        return vec![CommandClipboard::new("pbcopy", &[])];
    }
    if cfg!(target_os = "windows") {
        return vec![CommandClipboard::new("clip.exe", &[])];
    }

    let mut list = Vec::new();
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        list.push(CommandClipboard::new("wl-copy", &[]));
    }
    list.push(CommandClipboard::new("xclip", &["-selection", "clipboard"]));
    list.push(CommandClipboard::new("xsel", &["--clipboard", "--input"]));
    // WSL exposes the Windows clipboard.
    list.push(CommandClipboard::new("clip.exe", &[]));
    list
}

fn find_in_path(program: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}
