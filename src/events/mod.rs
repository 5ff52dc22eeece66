//! # Events Module
//!
//! Event-driven architecture for GUI-ready status reporting.
//!
//! ## Design
//! The core library emits events through channels, allowing any UI
//! (CLI, GUI, web) to subscribe and display scan status.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! // In a separate thread, listen for events
//! std::thread::spawn(move || {
//!     for event in receiver.iter() {
//!         match event {
//!             Event::Scan(ScanEvent::EmptyPayload) => println!("Align the code"),
//!             Event::Scan(ScanEvent::PayloadFound { .. }) => println!("Got it!"),
//!             _ => {}
//!         }
//!     }
//! });
//!
//! // Run the session with the sender
//! let session = ScanSession::spawn(decoder, config, sender, hits);
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
