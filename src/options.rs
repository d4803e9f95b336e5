//! Validation option resolution.

use serde::{Deserialize, Serialize};

/// A resolved validation option set.
///
/// Options are a value object: resolved once from a defaults table plus
/// caller overrides, never mutated afterward. [`ValidationOptions::hostname`]
/// and [`ValidationOptions::domain_name`] are the two documented defaults
/// tables; [`ValidationOptions::merged`] overlays caller overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ValidationOptions {
    /// Adds `_` to the allowed label characters.
    pub allow_underscore: bool,
    /// Requires the last label to be a recognized TLD.
    pub require_valid_tld: bool,
    /// Permits the first label to consist solely of digits.
    pub allow_numeric_hostname: bool,
    /// Permits the first label to be exactly `*`.
    pub allow_wildcard_hostname: bool,
    /// Permits a trailing root dot, including the sole value `.`.
    pub allow_root_label: bool,
    /// Overrides the shared TLD registry. An empty list fails every
    /// candidate; `None` consults the registry. Stored lowercased.
    pub valid_tlds: Option<Vec<String>>,
    /// Hint for validation adapters: diagnostic mode vs boolean mode. The
    /// engine itself exposes the two modes as two entry points.
    pub verbose: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self::hostname()
    }
}

impl ValidationOptions {
    /// Hostname defaults: every extension off, no TLD enforcement.
    #[must_use]
    pub fn hostname() -> Self {
        Self {
            allow_underscore: false,
            require_valid_tld: false,
            allow_numeric_hostname: false,
            allow_wildcard_hostname: false,
            allow_root_label: false,
            valid_tlds: None,
            verbose: true,
        }
    }

    /// Domain-name defaults: hostname defaults with `require_valid_tld` and
    /// `allow_numeric_hostname` on. These flip before caller overrides
    /// merge, so callers can still disable them explicitly.
    #[must_use]
    pub fn domain_name() -> Self {
        Self {
            require_valid_tld: true,
            allow_numeric_hostname: true,
            ..Self::hostname()
        }
    }

    /// Overlays every set field of `overrides` onto `self`. TLD overrides
    /// are normalized to ASCII lowercase.
    #[must_use]
    pub fn merged(mut self, overrides: &OptionOverrides) -> Self {
        if let Some(allow_underscore) = overrides.allow_underscore {
            self.allow_underscore = allow_underscore;
        }
        if let Some(require_valid_tld) = overrides.require_valid_tld {
            self.require_valid_tld = require_valid_tld;
        }
        if let Some(allow_numeric_hostname) = overrides.allow_numeric_hostname {
            self.allow_numeric_hostname = allow_numeric_hostname;
        }
        if let Some(allow_wildcard_hostname) = overrides.allow_wildcard_hostname {
            self.allow_wildcard_hostname = allow_wildcard_hostname;
        }
        if let Some(allow_root_label) = overrides.allow_root_label {
            self.allow_root_label = allow_root_label;
        }
        if let Some(valid_tlds) = &overrides.valid_tlds {
            self.valid_tlds = Some(
                valid_tlds
                    .iter()
                    .map(|tld| tld.to_ascii_lowercase())
                    .collect(),
            );
        }
        if let Some(verbose) = overrides.verbose {
            self.verbose = verbose;
        }
        self
    }
}

/// Caller-supplied option overrides.
///
/// Field-for-field mirror of [`ValidationOptions`]; unset fields keep the
/// defaults of the validator they are merged into. Unknown fields are
/// ignored on deserialization so option payloads stay forward-compatible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_underscore: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_valid_tld: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_numeric_hostname: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_wildcard_hostname: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_root_label: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_tlds: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}
