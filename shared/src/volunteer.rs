//! Parsing of individual volunteer slot values.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Spreadsheet hyperlink formula: `=HYPERLINK("<url>";"<label>")`
static HYPERLINK_FORMULA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^=HYPERLINK\("([^"]+)"\s*;\s*"([^"]+)"\)$"#).unwrap()
});

/// A booked slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerEntry {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl VolunteerEntry {
    pub fn named(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }

    pub fn linked(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    /// `mailto:` links stay in the current browsing context.
    pub fn opens_new_context(&self) -> bool {
        self.href
            .as_deref()
            .is_some_and(|href| !href.starts_with("mailto:"))
    }
}

/// Parse one raw `volontario_<n>` cell. `None` means the slot is open.
pub fn parse_volunteer_entry(raw: &str) -> Option<VolunteerEntry> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = HYPERLINK_FORMULA.captures(trimmed) {
        return Some(VolunteerEntry::linked(&caps[2], &caps[1]));
    }

    Some(VolunteerEntry::named(trimmed))
}

/// Parse a slot field straight from the record JSON.
///
/// Spreadsheet exports occasionally turn cells into numbers or booleans;
/// those are stringified, and falsy values (`0`, `false`) count as open.
pub fn parse_volunteer_value(raw: Option<&Value>) -> Option<VolunteerEntry> {
    match raw? {
        Value::String(text) => parse_volunteer_entry(text),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::Number(number) => parse_volunteer_entry(&number.to_string()),
        Value::Bool(true) => parse_volunteer_entry("true"),
        _ => None,
    }
}
