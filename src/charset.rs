//! Allowed character class for hostname labels.

/// The character set a hostname label may draw from: ASCII letters
/// (case-insensitive), digits and hyphen, plus underscore when enabled.
///
/// The printable descriptor doubles as interpolation data in diagnostic
/// reports, so message layers can tell users which characters were allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelCharset {
    allow_underscore: bool,
}

impl LabelCharset {
    #[must_use]
    pub const fn new(allow_underscore: bool) -> Self {
        Self { allow_underscore }
    }

    /// Whether `ch` belongs to the class.
    #[must_use]
    pub const fn contains(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '-' || (self.allow_underscore && ch == '_')
    }

    /// Printable descriptor of the class, e.g. `a-z0-9-_`.
    #[must_use]
    pub const fn descriptor(&self) -> &'static str {
        if self.allow_underscore {
            "a-z0-9-_"
        } else {
            "a-z0-9-"
        }
    }
}
