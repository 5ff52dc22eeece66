//! Event type definitions for scan status reporting.

use crate::core::classify::ContentType;
use crate::core::dispatch::ScanAction;
use serde::{Deserialize, Serialize};

/// All events emitted by the scanner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Scan flow events
    Scan(ScanEvent),
    /// Action dispatch events
    Dispatch(DispatchEvent),
}

/// Events from the scan session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScanEvent {
    /// The decode worker is up and waiting for frames
    Started,
    /// A frame failed to decode; scanning continues
    DecodeFailed { message: String },
    /// A code was detected but carried no content; the user should realign
    EmptyPayload,
    /// A non-empty payload was decoded; the scan gate is now closed
    PayloadFound {
        content_type: ContentType,
        format: String,
    },
    /// The session finished and the worker exited
    Finished { frames_processed: usize },
}

/// Events from the action dispatcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DispatchEvent {
    /// An external handler was launched for the action
    Launched { action: ScanAction },
    /// No application could handle the action; not fatal, no retry
    NoHandler { action: ScanAction },
    /// The payload was copied to the clipboard
    Copied,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_serializable() {
        let event = Event::Scan(ScanEvent::PayloadFound {
            content_type: ContentType::Url,
            format: "QR_CODE".to_string(),
        });

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();

        match deserialized {
            Event::Scan(ScanEvent::PayloadFound { content_type, format }) => {
                assert_eq!(content_type, ContentType::Url);
                assert_eq!(format, "QR_CODE");
            }
            _ => panic!("Wrong event type"),
        }
    }

    #[test]
    fn dispatch_events_are_serializable() {
        let event = Event::Dispatch(DispatchEvent::NoHandler {
            action: ScanAction::Dial,
        });

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("NoHandler"));
    }
}
