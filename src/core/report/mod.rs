//! # Report Module
//!
//! The result-flow view of one scan: the payload, its format tag, the
//! classified content type, and when it was scanned. Presentation layers
//! render this directly; a report never changes after construction.

use crate::core::classify::{classify, ContentType};
use crate::core::dispatch::{action_for, ActionRequest};
use crate::core::session::ScanHit;
use chrono::{DateTime, Local};
use serde::Serialize;

/// A classified scan result
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Raw decoded payload
    pub content: String,
    /// Barcode format wire name
    pub format: String,
    /// Semantic content type, classified once at construction
    pub content_type: ContentType,
    /// Local time the payload was scanned
    pub scanned_at: DateTime<Local>,
}

impl ScanReport {
    /// Build a report from a scan hit, classifying the payload
    pub fn new(hit: ScanHit) -> Self {
        Self::from_parts(hit.content, hit.format)
    }

    /// Build a report from raw payload and format strings
    pub fn from_parts(content: String, format: String) -> Self {
        let content_type = classify(&content);
        Self {
            content,
            format,
            content_type,
            scanned_at: Local::now(),
        }
    }

    /// Human-readable label for the content type
    pub fn type_label(&self) -> &'static str {
        self.content_type.label()
    }

    /// The primary action suggested for this payload
    pub fn primary_action(&self) -> ActionRequest {
        action_for(&self.content, self.content_type)
    }

    /// Scan time rendered for result screens
    pub fn scanned_at_display(&self) -> String {
        self.scanned_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dispatch::ScanAction;

    fn hit(content: &str) -> ScanHit {
        ScanHit {
            content: content.to_string(),
            format: "QR_CODE".to_string(),
        }
    }

    #[test]
    fn report_classifies_its_payload() {
        let report = ScanReport::new(hit("https://example.com"));
        assert_eq!(report.content_type, ContentType::Url);
        assert_eq!(report.type_label(), "URL");
        assert_eq!(report.format, "QR_CODE");
    }

    #[test]
    fn primary_action_matches_the_content_type() {
        let report = ScanReport::new(hit("example.com/page"));
        // No scheme and no phone/email shape: plain text, shared as-is
        assert_eq!(report.primary_action().action, ScanAction::Share);

        let report = ScanReport::new(hit("tel:+1-555-0100"));
        assert_eq!(report.primary_action().action, ScanAction::Dial);
        assert_eq!(report.primary_action().target, "tel:+1-555-0100");
    }

    #[test]
    fn scan_time_renders_as_date_and_time() {
        let report = ScanReport::new(hit("anything"));
        let rendered = report.scanned_at_display();
        // yyyy-MM-dd HH:mm:ss
        assert_eq!(rendered.len(), 19);
        assert_eq!(&rendered[4..5], "-");
        assert_eq!(&rendered[13..14], ":");
    }

    #[test]
    fn report_serializes_for_json_output() {
        let report = ScanReport::new(hit("user@example.com"));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("user@example.com"));
        assert!(json.contains("Email"));
    }
}
