//! # QR Code Reader
//!
//! Scans QR codes from images and turns the decoded text into something
//! you can act on: open a URL, dial a number, compose an email or SMS,
//! copy, or share.
//!
//! ## Core Philosophy
//! - **Classify, then act** - every payload gets a semantic content type
//!   before an action is suggested
//! - **One scan, one result** - a scan gate suppresses duplicate decode
//!   callbacks racing on consecutive frames
//! - **Never crash on bad input** - decode failures and missing handlers
//!   are surfaced as notices, not errors
//!
//! ## Architecture
//! The library is split into a core engine (UI-agnostic) and presentation layers:
//! - `core` - classification, decoding, dispatch, and the scan session
//! - `events` - event-driven status reporting (GUI-ready)
//! - `error` - user-friendly error types
//! - `cli` - command-line interface

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{QrReaderError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point (CLI or GUI).
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
