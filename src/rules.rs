//! Syntactic predicates over hostname candidates.
//!
//! Each predicate is a pure, total function: no state, no panics, malformed
//! input is part of the domain. The two length checks are the only ones that
//! reject absent, non-string or empty candidates; the format checks treat
//! those as vacuously valid, leaving the "empty but required" judgment to a
//! presence concern outside the engine.

use crate::charset::LabelCharset;
use crate::error::ValidationResult;
use crate::tld::TldRegistry;
use crate::types::Candidate;

/// Longest accepted candidate, in characters.
pub const MAX_HOSTNAME_LENGTH: usize = 255;
/// Longest accepted label, in characters.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Splits a candidate into labels on `.`, preserving empty labels so
/// consecutive dots and a trailing dot stay observable. An empty input
/// yields one empty label.
#[must_use]
pub fn segment(value: &str) -> Vec<&str> {
    value.split('.').collect()
}

/// [`segment`] minus the trailing run of empty labels: the label-wise checks
/// do not judge the root labels a trailing dot produces (the trailing-dot
/// rule owns that), while leading and interior empty labels stay visible.
/// A value consisting only of dots has no counted labels.
#[must_use]
pub fn counted_labels(value: &str) -> Vec<&str> {
    let mut labels = segment(value);
    while labels.last().is_some_and(|label| label.is_empty()) {
        labels.pop();
    }
    labels
}

/// Total length within 1..=255 characters.
#[must_use]
pub fn valid_length(candidate: Candidate<'_>) -> bool {
    candidate
        .non_empty_text()
        .is_some_and(|text| text.chars().count() <= MAX_HOSTNAME_LENGTH)
}

/// Every counted label length within 1..=63 characters.
#[must_use]
pub fn valid_label_length(candidate: Candidate<'_>) -> bool {
    candidate.non_empty_text().is_some_and(|text| {
        counted_labels(text)
            .iter()
            .all(|label| !label.is_empty() && label.chars().count() <= MAX_LABEL_LENGTH)
    })
}

/// No label starts or ends with a hyphen.
#[must_use]
pub fn valid_hyphens(candidate: Candidate<'_>) -> bool {
    segment(candidate.text())
        .iter()
        .all(|label| !label.starts_with('-') && !label.ends_with('-'))
}

/// No two consecutive dots anywhere in the candidate.
#[must_use]
pub fn valid_dots(candidate: Candidate<'_>) -> bool {
    !candidate.text().contains("..")
}

/// A trailing root dot (including the sole value `.`) only when permitted.
#[must_use]
pub fn valid_trailing_dot(candidate: Candidate<'_>, allow_root_label: bool) -> bool {
    allow_root_label || !candidate.text().ends_with('.')
}

/// Every counted label consists solely of characters in `charset`, with at
/// least one character. The first label may instead be exactly `*` when
/// wildcards are permitted.
#[must_use]
pub fn valid_characters(
    candidate: Candidate<'_>,
    charset: LabelCharset,
    allow_wildcard_hostname: bool,
) -> bool {
    let Some(text) = candidate.non_empty_text() else {
        return true;
    };
    counted_labels(text)
        .iter()
        .enumerate()
        .all(|(index, label)| {
            if allow_wildcard_hostname && index == 0 && *label == "*" {
                return true;
            }
            !label.is_empty() && label.chars().all(|ch| charset.contains(ch))
        })
}

/// The first label is not all digits, unless numeric hostnames are allowed.
#[must_use]
pub fn valid_numeric_only(candidate: Candidate<'_>, allow_numeric_hostname: bool) -> bool {
    if allow_numeric_hostname {
        return true;
    }
    let Some(text) = candidate.non_empty_text() else {
        return true;
    };
    counted_labels(text)
        .first()
        .is_none_or(|label| !is_numeric(label))
}

/// The last counted label is a recognized TLD, when `require_valid_tld`.
///
/// `valid_tlds` overrides the shared registry and is compared ASCII
/// case-insensitively; an empty override fails every candidate. The sole
/// value `.` and absent, empty or non-string candidates are vacuously valid.
/// Fallible because the first registry consultation parses the bundled data.
pub fn valid_tld(
    candidate: Candidate<'_>,
    require_valid_tld: bool,
    valid_tlds: Option<&[String]>,
) -> ValidationResult<bool> {
    let Some(text) = candidate.non_empty_text() else {
        return Ok(true);
    };
    if !require_valid_tld || text == "." {
        return Ok(true);
    }
    let labels = counted_labels(text);
    let Some(&last) = labels.last() else {
        return Ok(true);
    };
    match valid_tlds {
        Some(tlds) => Ok(tlds.iter().any(|tld| tld.eq_ignore_ascii_case(last))),
        None => TldRegistry::contains(last),
    }
}

/// Domain-name rule, layered after the base rules: a bare, single-label,
/// all-digit value is rejected even when numeric hostnames are allowed.
/// `allow_numeric_hostname` is meant to permit numeric subdomains, not a
/// numeric top-level value.
#[must_use]
pub fn valid_single_numeric_hostname(
    candidate: Candidate<'_>,
    allow_numeric_hostname: bool,
) -> bool {
    if !allow_numeric_hostname {
        return true;
    }
    let Some(text) = candidate.non_empty_text() else {
        return true;
    };
    match counted_labels(text).as_slice() {
        [label] => !is_numeric(label),
        _ => true,
    }
}

fn is_numeric(label: &str) -> bool {
    !label.is_empty() && label.bytes().all(|byte| byte.is_ascii_digit())
}
