//! # Error Module
//!
//! User-friendly error types for the QR code reader.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths, actions, what went wrong
//! - **Non-fatal by default** - a frame that won't decode or an action
//!   with no handler is a notice, not a crash
//! - **Recovery hints** - suggest how to fix when possible

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum QrReaderError {
    #[error("Decoding error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Scan session error: {0}")]
    Session(#[from] SessionError),

    #[error("Action dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors that occur while loading or decoding a frame
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Image not found: {path}")]
    ImageNotFound { path: PathBuf },

    #[error("Failed to decode image {path}: {reason}")]
    ImageDecode { path: PathBuf, reason: String },

    #[error("A code was detected but could not be read: {reason}")]
    Unreadable { reason: String },
}

/// Errors that occur in the scan session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("The decode worker stopped unexpectedly")]
    WorkerStopped,
}

/// Errors that occur while dispatching an action
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("No application available to handle {action}")]
    NoHandler { action: String },

    #[error("Failed to launch handler for {action}: {source}")]
    LaunchFailed {
        action: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Clipboard is not available: {reason}")]
    ClipboardUnavailable { reason: String },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, QrReaderError>;
