//! Writing text to the system clipboard.

use std::env;
use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

/// Errors raised by a [`Clipboard`].
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard is available in this session.
    #[error("no clipboard available")]
    Unavailable,
    /// The clipboard tool could not be started or fed.
    #[error("could not run {tool}: {source}")]
    Spawn {
        /// The clipboard tool.
        tool: String,
        /// The underlying error.
        source: io::Error,
    },
    /// The clipboard tool exited with an error.
    #[error("{tool} failed: {status}")]
    Failed {
        /// The clipboard tool.
        tool: String,
        /// How the tool exited.
        status: ExitStatus,
    },
}

/// Something text can be copied to.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

/// The display server of the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayServer {
    /// A Wayland compositor, served by `wl-copy`.
    Wayland,
    /// An X11 server, served by `xclip`.
    X11,
    /// Neither could be found.
    Unknown,
}

impl DisplayServer {
    /// Detect which display server is currently running.
    pub fn detect() -> Self {
        Self::from_env(|key| env::var(key).ok())
    }

    fn from_env(var: impl Fn(&str) -> Option<String>) -> Self {
        if var("WAYLAND_DISPLAY").is_some() || var("XDG_SESSION_TYPE").as_deref() == Some("wayland")
        {
            return DisplayServer::Wayland;
        }

        if var("DISPLAY").is_some() {
            return DisplayServer::X11;
        }

        DisplayServer::Unknown
    }

    /// The command that reads clipboard contents from stdin.
    fn clipboard_command(&self) -> Option<Command> {
        match self {
            DisplayServer::Wayland => {
                let mut cmd = Command::new("wl-copy");
                cmd.args(["--type", "text/plain;charset=utf-8"]);
                Some(cmd)
            }
            DisplayServer::X11 => {
                let mut cmd = Command::new("xclip");
                cmd.args(["-selection", "clipboard"]);
                Some(cmd)
            }
            DisplayServer::Unknown => None,
        }
    }
}

/// The session clipboard, reached through `wl-copy` or `xclip`.
#[derive(Clone, Debug)]
pub struct SystemClipboard {
    display_server: DisplayServer,
}

impl SystemClipboard {
    /// Create a clipboard for the detected display server.
    pub fn new() -> Self {
        let display_server = DisplayServer::detect();
        log::debug!("Clipboard uses display server {display_server:?}");
        Self { display_server }
    }

    /// The display server clipboard writes go to.
    pub fn display_server(&self) -> DisplayServer {
        self.display_server
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let cmd = self
            .display_server
            .clipboard_command()
            .ok_or(ClipboardError::Unavailable)?;
        pipe_to(cmd, text)
    }
}

/// Feed `text` to `cmd` on stdin and wait for it to exit.
///
/// Clipboard tools fork a child that keeps serving the selection, so only
/// the exit status is awaited. Its output streams are discarded, since the
/// forked child would hold a pipe open until the selection changes.
fn pipe_to(mut cmd: Command, text: &str) -> Result<(), ClipboardError> {
    let tool = cmd.get_program().to_string_lossy().to_string();
    let spawn_error = |source| ClipboardError::Spawn {
        tool: tool.clone(),
        source,
    };

    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(spawn_error)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(spawn_error)?;
    }

    let status = child.wait().map_err(spawn_error)?;

    if !status.success() {
        return Err(ClipboardError::Failed { tool, status });
    }

    Ok(())
}

/// A clipboard that refuses every write.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}
