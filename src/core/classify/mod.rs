//! # Classify Module
//!
//! Maps a decoded payload to a semantic content type.
//!
//! Classification is a pure, total function of the payload string: the
//! same input always yields the same type, nothing external is consulted,
//! and unmatched or empty input falls back to [`ContentType::PlainText`].
//!
//! The rules are ordered and the first match wins - the patterns overlap,
//! so reordering them changes behavior. The digit threshold for phone
//! numbers (at least 8) and the phone/email/number ordering are product
//! heuristics carried over as-is.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Optional leading +, then digits, hyphens, spaces, and parentheses only
static PHONE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9\-\s()]+$").expect("phone pattern is valid"));

/// One or more digits and nothing else (a leading + is not a digit)
static DIGITS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("digits pattern is valid"));

/// Minimum digit count for a bare string to count as a phone number
const MIN_PHONE_DIGITS: usize = 8;

/// Semantic category of a decoded payload, used to choose a follow-up action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    /// A web address (http/https)
    Url,
    /// A dialable phone number
    PhoneNumber,
    /// An email address
    Email,
    /// An SMS target (sms:/smsto:)
    Sms,
    /// A WiFi network configuration
    WifiConfig,
    /// A geographic location or maps link
    Location,
    /// A bare numeric string
    Number,
    /// A vCard contact
    Contact,
    /// A vEvent calendar entry
    CalendarEvent,
    /// Anything else
    PlainText,
}

impl ContentType {
    /// Human-readable label for result screens
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Url => "URL",
            ContentType::PhoneNumber => "Phone number",
            ContentType::Email => "Email",
            ContentType::Sms => "SMS",
            ContentType::WifiConfig => "WiFi",
            ContentType::Location => "Location",
            ContentType::Number => "Number",
            ContentType::Contact => "Contact",
            ContentType::CalendarEvent => "Event",
            ContentType::PlainText => "Text",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a decoded payload.
///
/// Ordered, first match wins:
/// 1. empty -> PlainText
/// 2. `http://` / `https://` prefix -> Url
/// 3. `tel:` prefix, or phone-shaped with >= 8 digits -> PhoneNumber
/// 4. `mailto:` prefix, or `@` and `.` with no whitespace -> Email
/// 5. `sms:` / `smsto:` prefix -> Sms
/// 6. `wifi:` prefix -> WifiConfig
/// 7. `geo:` prefix or a Google Maps link -> Location
/// 8. digits only -> Number
/// 9. `begin:vcard` prefix or contains `vcard` -> Contact
/// 10. `begin:vevent` prefix or contains `vevent` -> CalendarEvent
/// 11. otherwise -> PlainText
///
/// Prefix checks run on a lowercased, trimmed copy; content checks (the `@`
/// test, digit counting) run on the original string.
pub fn classify(content: &str) -> ContentType {
    if content.is_empty() {
        return ContentType::PlainText;
    }

    let lower = content.trim().to_lowercase();

    if lower.starts_with("http://") || lower.starts_with("https://") {
        ContentType::Url
    } else if lower.starts_with("tel:") || is_bare_phone_number(content) {
        ContentType::PhoneNumber
    } else if lower.starts_with("mailto:") || looks_like_email(content) {
        ContentType::Email
    } else if lower.starts_with("sms:") || lower.starts_with("smsto:") {
        ContentType::Sms
    } else if lower.starts_with("wifi:") {
        ContentType::WifiConfig
    } else if lower.starts_with("geo:")
        || lower.contains("maps.google.com")
        || lower.contains("maps.app.goo.gl")
    {
        ContentType::Location
    } else if DIGITS_ONLY.is_match(content) {
        ContentType::Number
    } else if lower.starts_with("begin:vcard") || lower.contains("vcard") {
        ContentType::Contact
    } else if lower.starts_with("begin:vevent") || lower.contains("vevent") {
        ContentType::CalendarEvent
    } else {
        ContentType::PlainText
    }
}

/// Phone-shaped and carrying enough digits to be dialable.
///
/// The digit count is taken from the original content with non-digits
/// stripped, not from the lowercased copy.
fn is_bare_phone_number(content: &str) -> bool {
    PHONE_SHAPE.is_match(content)
        && content.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

fn looks_like_email(content: &str) -> bool {
    content.contains('@')
        && content.contains('.')
        && !content.chars().any(char::is_whitespace)
}
