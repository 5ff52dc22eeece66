//! # Dispatch Module
//!
//! Turns a classified payload into a launchable action.
//!
//! The platform-bound pieces (opening a browser, dialing, the clipboard)
//! sit behind the [`ActionLauncher`] and [`Clipboard`] traits so the
//! preparation logic stays testable without any external mechanism.
//! Dispatch is single-shot: a missing handler is surfaced as a notice,
//! never retried.

mod system;

pub use system::{SystemClipboard, SystemLauncher};

use crate::core::classify::ContentType;
use crate::error::DispatchError;
use crate::events::{DispatchEvent, Event, EventSender};
use serde::{Deserialize, Serialize};

/// The capability a payload is handed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanAction {
    /// Open in a browser
    ViewUrl,
    /// Start a phone call
    Dial,
    /// Compose an email
    ComposeEmail,
    /// Compose a text message
    ComposeSms,
    /// Generic share fallback
    Share,
    /// Copy the payload verbatim
    CopyToClipboard,
}

impl std::fmt::Display for ScanAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ScanAction::ViewUrl => "open URL",
            ScanAction::Dial => "dial",
            ScanAction::ComposeEmail => "compose email",
            ScanAction::ComposeSms => "compose SMS",
            ScanAction::Share => "share",
            ScanAction::CopyToClipboard => "copy",
        };
        f.write_str(label)
    }
}

/// A prepared action: what to do and the exact target to hand the handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: ScanAction,
    pub target: String,
}

/// Prepare the primary action for a classified payload.
///
/// - URLs get an `https://` prefix when no scheme is present
/// - phone / email / SMS payloads have their scheme stripped and are
///   re-targeted as `tel:` / `mailto:` / `smsto:` URIs
/// - everything else falls back to a generic share of the raw payload
pub fn action_for(content: &str, content_type: ContentType) -> ActionRequest {
    match content_type {
        ContentType::Url => ActionRequest {
            action: ScanAction::ViewUrl,
            target: ensure_url_scheme(content),
        },
        ContentType::PhoneNumber => ActionRequest {
            action: ScanAction::Dial,
            target: format!("tel:{}", strip_scheme(content, &["tel:"])),
        },
        ContentType::Email => ActionRequest {
            action: ScanAction::ComposeEmail,
            target: format!("mailto:{}", strip_scheme(content, &["mailto:"])),
        },
        ContentType::Sms => ActionRequest {
            action: ScanAction::ComposeSms,
            // smsto: before sms:, longest prefix first
            target: format!("smsto:{}", strip_scheme(content, &["smsto:", "sms:"])),
        },
        _ => ActionRequest {
            action: ScanAction::Share,
            target: content.to_string(),
        },
    }
}

/// Prefix `https://` unless an http(s) scheme is already present.
///
/// The scheme check ignores ASCII case so `HTTPS://…` is never
/// double-prefixed.
fn ensure_url_scheme(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Strip the first matching leading scheme, ignoring ASCII case
fn strip_scheme<'a>(content: &'a str, schemes: &[&str]) -> &'a str {
    for scheme in schemes {
        // get() avoids slicing inside a multibyte character
        if let Some(prefix) = content.get(..scheme.len()) {
            if prefix.eq_ignore_ascii_case(scheme) {
                return &content[scheme.len()..];
            }
        }
    }
    content
}

/// Trait for the platform action mechanism
///
/// Implement this trait to route actions somewhere else (e.g., for
/// testing, or a GUI shell with its own handlers).
pub trait ActionLauncher {
    /// Hand the prepared request to an external handler
    fn launch(&self, request: &ActionRequest) -> Result<(), DispatchError>;
}

/// Trait for the platform clipboard
pub trait Clipboard {
    /// Copy plain text
    fn copy(&self, text: &str) -> Result<(), DispatchError>;
}

/// Dispatches prepared actions through a launcher, reporting the outcome
/// as events
pub struct ActionDispatcher {
    launcher: Box<dyn ActionLauncher>,
}

impl ActionDispatcher {
    /// Create a dispatcher over the given launcher
    pub fn new(launcher: Box<dyn ActionLauncher>) -> Self {
        Self { launcher }
    }

    /// Dispatch the primary action for a payload.
    ///
    /// Returns true when a handler was launched. A missing or failing
    /// handler is reported as a [`DispatchEvent::NoHandler`] notice and
    /// logged; it is never fatal and never retried.
    pub fn dispatch(&self, content: &str, content_type: ContentType, events: &EventSender) -> bool {
        let request = action_for(content, content_type);
        match self.launcher.launch(&request) {
            Ok(()) => {
                events.send(Event::Dispatch(DispatchEvent::Launched {
                    action: request.action,
                }));
                true
            }
            Err(e) => {
                tracing::warn!("dispatch failed for {}: {e}", request.action);
                events.send(Event::Dispatch(DispatchEvent::NoHandler {
                    action: request.action,
                }));
                false
            }
        }
    }
}

/// Copy a payload through the clipboard seam, reporting the outcome
/// as events.
///
/// Returns true on success; failure is a non-fatal notice like any other
/// missing handler.
pub fn copy_to_clipboard(clipboard: &dyn Clipboard, text: &str, events: &EventSender) -> bool {
    match clipboard.copy(text) {
        Ok(()) => {
            events.send(Event::Dispatch(DispatchEvent::Copied));
            true
        }
        Err(e) => {
            tracing::warn!("clipboard copy failed: {e}");
            events.send(Event::Dispatch(DispatchEvent::NoHandler {
                action: ScanAction::CopyToClipboard,
            }));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventChannel;
    use std::cell::RefCell;

    /// Launcher that records requests instead of launching anything
    struct RecordingLauncher {
        requests: RefCell<Vec<ActionRequest>>,
        fail: bool,
    }

    impl RecordingLauncher {
        fn new(fail: bool) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    impl ActionLauncher for RecordingLauncher {
        fn launch(&self, request: &ActionRequest) -> Result<(), DispatchError> {
            self.requests.borrow_mut().push(request.clone());
            if self.fail {
                Err(DispatchError::NoHandler {
                    action: request.action.to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn bare_url_gets_https_prefix() {
        let request = action_for("example.com", ContentType::Url);
        assert_eq!(request.action, ScanAction::ViewUrl);
        assert_eq!(request.target, "https://example.com");
    }

    #[test]
    fn existing_scheme_is_kept() {
        let request = action_for("http://example.com", ContentType::Url);
        assert_eq!(request.target, "http://example.com");
    }

    #[test]
    fn uppercase_scheme_is_not_double_prefixed() {
        let request = action_for("HTTPS://EXAMPLE.COM", ContentType::Url);
        assert_eq!(request.target, "HTTPS://EXAMPLE.COM");
    }

    #[test]
    fn tel_scheme_is_stripped_before_dialing() {
        let request = action_for("tel:+1-555-0100", ContentType::PhoneNumber);
        assert_eq!(request.action, ScanAction::Dial);
        assert_eq!(request.target, "tel:+1-555-0100");

        let request = action_for("+1-555-0100", ContentType::PhoneNumber);
        assert_eq!(request.target, "tel:+1-555-0100");
    }

    #[test]
    fn mailto_scheme_is_stripped_before_composing() {
        let request = action_for("mailto:user@example.com", ContentType::Email);
        assert_eq!(request.action, ScanAction::ComposeEmail);
        assert_eq!(request.target, "mailto:user@example.com");

        let request = action_for("user@example.com", ContentType::Email);
        assert_eq!(request.target, "mailto:user@example.com");
    }

    #[test]
    fn sms_schemes_are_normalized_to_smsto() {
        let request = action_for("sms:+15550100", ContentType::Sms);
        assert_eq!(request.action, ScanAction::ComposeSms);
        assert_eq!(request.target, "smsto:+15550100");

        let request = action_for("smsto:+15550100", ContentType::Sms);
        assert_eq!(request.target, "smsto:+15550100");
    }

    #[test]
    fn other_types_fall_back_to_share() {
        for content_type in [
            ContentType::WifiConfig,
            ContentType::Location,
            ContentType::Number,
            ContentType::Contact,
            ContentType::CalendarEvent,
            ContentType::PlainText,
        ] {
            let request = action_for("payload", content_type);
            assert_eq!(request.action, ScanAction::Share);
            assert_eq!(request.target, "payload");
        }
    }

    #[test]
    fn successful_dispatch_reports_launched() {
        let (sender, receiver) = EventChannel::new();
        let dispatcher = ActionDispatcher::new(Box::new(RecordingLauncher::new(false)));

        assert!(dispatcher.dispatch("example.com", ContentType::Url, &sender));

        match receiver.try_recv() {
            Some(Event::Dispatch(DispatchEvent::Launched { action })) => {
                assert_eq!(action, ScanAction::ViewUrl);
            }
            other => panic!("expected Launched event, got {other:?}"),
        }
    }

    #[test]
    fn missing_handler_is_a_notice_not_an_error() {
        let (sender, receiver) = EventChannel::new();
        let dispatcher = ActionDispatcher::new(Box::new(RecordingLauncher::new(true)));

        assert!(!dispatcher.dispatch("tel:5550100123", ContentType::PhoneNumber, &sender));

        match receiver.try_recv() {
            Some(Event::Dispatch(DispatchEvent::NoHandler { action })) => {
                assert_eq!(action, ScanAction::Dial);
            }
            other => panic!("expected NoHandler event, got {other:?}"),
        }
    }

    #[test]
    fn clipboard_failure_is_a_notice() {
        struct BrokenClipboard;
        impl Clipboard for BrokenClipboard {
            fn copy(&self, _text: &str) -> Result<(), DispatchError> {
                Err(DispatchError::ClipboardUnavailable {
                    reason: "no display".to_string(),
                })
            }
        }

        let (sender, receiver) = EventChannel::new();
        assert!(!copy_to_clipboard(&BrokenClipboard, "payload", &sender));
        assert!(matches!(
            receiver.try_recv(),
            Some(Event::Dispatch(DispatchEvent::NoHandler { .. }))
        ));
    }
}
