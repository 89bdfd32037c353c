//! One-shot outcome banner driven by the page query string.
//!
//! The callback webhook redirects back to the page with either `?error=...`
//! or `?message=...`.

use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Error,
    Success,
}

impl FeedbackKind {
    pub fn css_class(self) -> &'static str {
        match self {
            FeedbackKind::Error => "error",
            FeedbackKind::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    /// Read the banner from `location.search`. `error` wins over `message`.
    pub fn from_query(search: &str) -> Option<Self> {
        let query = search.strip_prefix('?').unwrap_or(search);

        let mut error = None;
        let mut message = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "error" if error.is_none() => error = Some(value.into_owned()),
                "message" if message.is_none() => message = Some(value.into_owned()),
                _ => {}
            }
        }

        let (kind, raw) = match (error, message) {
            (Some(error), _) if !error.is_empty() => (FeedbackKind::Error, error),
            (_, Some(message)) if !message.is_empty() => (FeedbackKind::Success, message),
            _ => return None,
        };

        Some(Self {
            kind,
            message: decode_message(raw),
        })
    }

    pub fn css_class(&self) -> String {
        format!("feedback-banner {}", self.kind.css_class())
    }
}

/// Second percent-decoding pass for values the webhook encoded twice.
fn decode_message(raw: String) -> String {
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}
