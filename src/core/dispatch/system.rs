//! Launcher and clipboard implementations backed by desktop tools.
//!
//! URIs are handed to the platform opener (`xdg-open`, `open`, or
//! `cmd /C start`); clipboard copies go through `xclip`/`wl-copy`,
//! `pbcopy`, or `clip`. A missing tool maps to the same non-fatal
//! "no handler" outcome as a platform with no app for the URI.

use super::{ActionLauncher, ActionRequest, Clipboard, ScanAction};
use crate::error::DispatchError;
use std::io::Write;
use std::process::{Command, Stdio};

/// Launches actions through the desktop URI opener
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    /// Create a new launcher
    pub fn new() -> Self {
        Self
    }
}

impl ActionLauncher for SystemLauncher {
    fn launch(&self, request: &ActionRequest) -> Result<(), DispatchError> {
        // Desktops have no generic share sheet; callers fall back to
        // printing or copying the payload
        if request.action == ScanAction::Share {
            return Err(DispatchError::NoHandler {
                action: request.action.to_string(),
            });
        }

        let mut command = opener_command();
        command.arg(&request.target);

        command
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    DispatchError::NoHandler {
                        action: request.action.to_string(),
                    }
                } else {
                    DispatchError::LaunchFailed {
                        action: request.action.to_string(),
                        source: e,
                    }
                }
            })
    }
}

#[cfg(target_os = "macos")]
fn opener_command() -> Command {
    Command::new("open")
}

#[cfg(target_os = "windows")]
fn opener_command() -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command() -> Command {
    Command::new("xdg-open")
}

/// Copies text through the platform clipboard tool
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Create a new clipboard
    pub fn new() -> Self {
        Self
    }

    fn copy_via(&self, mut command: Command, text: &str) -> Result<(), DispatchError> {
        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| DispatchError::ClipboardUnavailable {
                reason: e.to_string(),
            })?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| DispatchError::ClipboardUnavailable {
                    reason: e.to_string(),
                })?;
        }

        let status = child
            .wait()
            .map_err(|e| DispatchError::ClipboardUnavailable {
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(DispatchError::ClipboardUnavailable {
                reason: format!("clipboard tool exited with {status}"),
            })
        }
    }
}

impl Clipboard for SystemClipboard {
    #[cfg(target_os = "macos")]
    fn copy(&self, text: &str) -> Result<(), DispatchError> {
        self.copy_via(Command::new("pbcopy"), text)
    }

    #[cfg(target_os = "windows")]
    fn copy(&self, text: &str) -> Result<(), DispatchError> {
        self.copy_via(Command::new("clip"), text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn copy(&self, text: &str) -> Result<(), DispatchError> {
        let mut xclip = Command::new("xclip");
        xclip.args(["-selection", "clipboard"]);
        self.copy_via(xclip, text)
            .or_else(|_| self.copy_via(Command::new("wl-copy"), text))
    }
}
