//! Candidate classification and violation reporting types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::charset::LabelCharset;

/// A validation input, classified once at the engine boundary.
///
/// Record-validation layers hand the engine whatever a field held, so the
/// input is not always a string. Classification replaces per-check type
/// tests: the length checks reject anything that is not a non-empty string,
/// the format checks treat such values as vacuously valid.
///
/// ```
/// use valid_hostname::Candidate;
///
/// assert_eq!(Candidate::from("test.org").text(), "test.org");
/// assert_eq!(Candidate::from(None::<&str>), Candidate::Absent);
/// assert_eq!(Candidate::from(&serde_json::json!(42)), Candidate::NonString);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// No value was supplied (missing field, JSON `null`).
    Absent,
    /// A string value, possibly empty.
    Text(&'a str),
    /// A value of a non-string type (number, boolean, array, object).
    NonString,
}

impl<'a> Candidate<'a> {
    /// The candidate text, with absent and non-string values normalized to
    /// the empty string.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match *self {
            Self::Text(text) => text,
            Self::Absent | Self::NonString => "",
        }
    }

    /// The candidate text, only when it is a non-empty string.
    #[must_use]
    pub fn non_empty_text(&self) -> Option<&'a str> {
        match *self {
            Self::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Whether the candidate is a string at all.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<Option<&'a str>> for Candidate<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Absent, Self::Text)
    }
}

impl<'a> From<&'a Value> for Candidate<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(text) => Self::Text(text),
            _ => Self::NonString,
        }
    }
}

/// Stable identifiers for violated rules.
///
/// These are the engine's external contract: message layers map them to
/// user-facing text. They serialize as exactly the snake_case strings
/// returned by [`ViolationCode::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// Total length outside 1..=255, or the value is absent or not a string.
    InvalidLength,
    /// Some label length outside 1..=63, or the value is absent or not a string.
    InvalidLabelLength,
    /// Some label starts or ends with a hyphen.
    LabelBeginsOrEndsWithHyphen,
    /// The value contains consecutive dots.
    ContainsConsecutiveDots,
    /// Trailing root dot without `allow_root_label`.
    EndsWithDot,
    /// Some label contains characters outside the allowed class.
    LabelContainsInvalidCharacters,
    /// The first label is all digits without `allow_numeric_hostname`.
    LabelIsNumeric,
    /// The last label is not a recognized TLD.
    NotFqdn,
    /// A domain name consisting of a single all-digit label.
    SingleNumericHostnameLabel,
}

impl ViolationCode {
    /// The stable identifier, exactly as serialized.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidLength => "invalid_length",
            Self::InvalidLabelLength => "invalid_label_length",
            Self::LabelBeginsOrEndsWithHyphen => "label_begins_or_ends_with_hyphen",
            Self::ContainsConsecutiveDots => "contains_consecutive_dots",
            Self::EndsWithDot => "ends_with_dot",
            Self::LabelContainsInvalidCharacters => "label_contains_invalid_characters",
            Self::LabelIsNumeric => "label_is_numeric",
            Self::NotFqdn => "not_fqdn",
            Self::SingleNumericHostnameLabel => "single_numeric_hostname_label",
        }
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A violated rule plus any interpolation data for message formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Stable identifier of the violated rule.
    pub code: ViolationCode,
    /// Allowed character class descriptor, carried by
    /// [`ViolationCode::LabelContainsInvalidCharacters`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_chars: Option<String>,
}

impl Violation {
    #[must_use]
    pub const fn new(code: ViolationCode) -> Self {
        Self {
            code,
            valid_chars: None,
        }
    }

    /// A character-class violation carrying the descriptor of `charset`.
    #[must_use]
    pub fn invalid_characters(charset: LabelCharset) -> Self {
        Self {
            code: ViolationCode::LabelContainsInvalidCharacters,
            valid_chars: Some(charset.descriptor().to_string()),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.valid_chars {
            Some(chars) => write!(f, "{} (valid characters: {chars})", self.code),
            None => write!(f, "{}", self.code),
        }
    }
}

/// Violations accumulated by a diagnostic validation pass.
///
/// Entries keep the order the checks ran in; each check contributes at most
/// one violation, so duplicates cannot occur. Serializes as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolationReport {
    violations: Vec<Violation>,
}

impl ViolationReport {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Whether the candidate passed every check.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether `code` was violated.
    #[must_use]
    pub fn contains(&self, code: ViolationCode) -> bool {
        self.violations.iter().any(|violation| violation.code == code)
    }

    /// The violations, in the order the checks ran.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The violated codes, in the order the checks ran.
    pub fn codes(&self) -> impl Iterator<Item = ViolationCode> + '_ {
        self.violations.iter().map(|violation| violation.code)
    }
}
