//! # Core Module
//!
//! The UI-agnostic scanning engine.
//!
//! ## Modules
//! - `classify` - Maps decoded payloads to semantic content types
//! - `decode` - Frames, the barcode decoder seam, and the rqrr decoder
//! - `dispatch` - Turns a classified payload into a launchable action
//! - `report` - The result view handed to presentation layers
//! - `session` - The scan session: gate, frame feed, decode worker

pub mod classify;
pub mod decode;
pub mod dispatch;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use classify::{classify, ContentType};
pub use decode::{BarcodeDecoder, BarcodeFormat, DecodedBarcode, Frame};
pub use dispatch::{ActionDispatcher, ActionRequest, ScanAction};
pub use report::ScanReport;
pub use session::{ScanHit, ScanSession, SessionConfig};
