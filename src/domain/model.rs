use crate::utils::error::ValidationFailure;
use serde::Serialize;

pub const NAME_FIELD: &str = "name";
pub const SRN_FIELD: &str = "srn";

/// A form input with surrounding whitespace removed.
///
/// Trimming follows the browser's `String.prototype.trim`, which also strips
/// the byte order mark but keeps U+0085 (NEL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue(String);

impl FieldValue {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim_matches(is_trimmable).to_string())
    }

    /// Absent inputs behave like empty ones.
    pub fn from_optional(raw: Option<&str>) -> Self {
        Self::new(raw.unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in Unicode scalar values, not bytes or UTF-16 units.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

fn is_trimmable(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub failure: Option<&'static str>,
    pub message: Option<String>,
}

impl ValidationReport {
    pub fn from_outcome(outcome: &std::result::Result<(), ValidationFailure>) -> Self {
        match outcome {
            Ok(()) => Self {
                passed: true,
                failure: None,
                message: None,
            },
            Err(failure) => Self {
                passed: false,
                failure: Some(failure.kind()),
                message: Some(failure.to_string()),
            },
        }
    }
}
