//! Rule engine: one ordered rule table, two combinators over it.

use crate::charset::LabelCharset;
use crate::error::ValidationResult;
use crate::options::{OptionOverrides, ValidationOptions};
use crate::rules;
use crate::types::{Candidate, Violation, ViolationCode, ViolationReport};

/// Everything a rule needs to run.
struct RuleContext<'a> {
    candidate: Candidate<'a>,
    options: &'a ValidationOptions,
    charset: LabelCharset,
}

type RuleFn = fn(&RuleContext<'_>) -> ValidationResult<Option<Violation>>;

/// Fixed evaluation order. The boolean combinator short-circuits on the
/// first entry that yields a violation; the diagnostic combinator runs every
/// entry, with the TLD check last so the report always ends on the
/// fully-qualified-name signal.
const RULES: [RuleFn; 8] = [
    length,
    label_length,
    hyphens,
    dots,
    trailing_dot,
    characters,
    numeric_only,
    tld,
];

fn check(passed: bool, code: ViolationCode) -> Option<Violation> {
    if passed {
        None
    } else {
        Some(Violation::new(code))
    }
}

fn length(ctx: &RuleContext<'_>) -> ValidationResult<Option<Violation>> {
    Ok(check(
        rules::valid_length(ctx.candidate),
        ViolationCode::InvalidLength,
    ))
}

fn label_length(ctx: &RuleContext<'_>) -> ValidationResult<Option<Violation>> {
    Ok(check(
        rules::valid_label_length(ctx.candidate),
        ViolationCode::InvalidLabelLength,
    ))
}

fn hyphens(ctx: &RuleContext<'_>) -> ValidationResult<Option<Violation>> {
    Ok(check(
        rules::valid_hyphens(ctx.candidate),
        ViolationCode::LabelBeginsOrEndsWithHyphen,
    ))
}

fn dots(ctx: &RuleContext<'_>) -> ValidationResult<Option<Violation>> {
    Ok(check(
        rules::valid_dots(ctx.candidate),
        ViolationCode::ContainsConsecutiveDots,
    ))
}

fn trailing_dot(ctx: &RuleContext<'_>) -> ValidationResult<Option<Violation>> {
    Ok(check(
        rules::valid_trailing_dot(ctx.candidate, ctx.options.allow_root_label),
        ViolationCode::EndsWithDot,
    ))
}

fn characters(ctx: &RuleContext<'_>) -> ValidationResult<Option<Violation>> {
    if rules::valid_characters(
        ctx.candidate,
        ctx.charset,
        ctx.options.allow_wildcard_hostname,
    ) {
        Ok(None)
    } else {
        Ok(Some(Violation::invalid_characters(ctx.charset)))
    }
}

fn numeric_only(ctx: &RuleContext<'_>) -> ValidationResult<Option<Violation>> {
    Ok(check(
        rules::valid_numeric_only(ctx.candidate, ctx.options.allow_numeric_hostname),
        ViolationCode::LabelIsNumeric,
    ))
}

fn tld(ctx: &RuleContext<'_>) -> ValidationResult<Option<Violation>> {
    let passed = rules::valid_tld(
        ctx.candidate,
        ctx.options.require_valid_tld,
        ctx.options.valid_tlds.as_deref(),
    )?;
    Ok(check(passed, ViolationCode::NotFqdn))
}

/// Short-circuiting fold over the rule table.
fn evaluate(ctx: &RuleContext<'_>) -> ValidationResult<bool> {
    for rule in RULES {
        if rule(ctx)?.is_some() {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Full map over the rule table, accumulating every violation.
fn diagnose(ctx: &RuleContext<'_>) -> ValidationResult<ViolationReport> {
    let mut report = ViolationReport::new();
    for rule in RULES {
        if let Some(violation) = rule(ctx)? {
            report.push(violation);
        }
    }
    Ok(report)
}

/// Validates hostnames under a resolved option set.
///
/// ```
/// use valid_hostname::{HostnameValidator, OptionOverrides};
///
/// let validator = HostnameValidator::default();
/// assert!(validator.validate("test.org")?);
/// assert!(!validator.validate("test..org")?);
///
/// let wildcard = HostnameValidator::new(&OptionOverrides {
///     allow_wildcard_hostname: Some(true),
///     ..OptionOverrides::default()
/// });
/// assert!(wildcard.validate("*.test.org")?);
/// # Ok::<(), valid_hostname::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HostnameValidator {
    options: ValidationOptions,
}

impl HostnameValidator {
    /// Hostname defaults overlaid with `overrides`.
    #[must_use]
    pub fn new(overrides: &OptionOverrides) -> Self {
        Self::with_options(ValidationOptions::hostname().merged(overrides))
    }

    /// Uses `options` as-is, without resolving any defaults.
    #[must_use]
    pub fn with_options(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// The resolved option set this validator applies.
    #[must_use]
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Boolean mode: rules run in fixed order, stopping at the first
    /// violation.
    pub fn validate<'a>(&self, candidate: impl Into<Candidate<'a>>) -> ValidationResult<bool> {
        evaluate(&self.context(candidate.into()))
    }

    /// Diagnostic mode: every rule runs, each violation is reported once,
    /// in rule order.
    pub fn validate_verbose<'a>(
        &self,
        candidate: impl Into<Candidate<'a>>,
    ) -> ValidationResult<ViolationReport> {
        diagnose(&self.context(candidate.into()))
    }

    fn context<'a>(&'a self, candidate: Candidate<'a>) -> RuleContext<'a> {
        RuleContext {
            candidate,
            options: &self.options,
            charset: LabelCharset::new(self.options.allow_underscore),
        }
    }
}

/// Validates domain names: the hostname rules with TLD enforcement and
/// numeric labels on by default, plus a guard against bare numeric values.
///
/// ```
/// use valid_hostname::DomainNameValidator;
///
/// let validator = DomainNameValidator::default();
/// assert!(validator.validate("12345.org")?);
/// assert!(!validator.validate("12345")?);
/// # Ok::<(), valid_hostname::ValidationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DomainNameValidator {
    base: HostnameValidator,
}

impl DomainNameValidator {
    /// Domain-name defaults overlaid with `overrides`.
    #[must_use]
    pub fn new(overrides: &OptionOverrides) -> Self {
        Self::with_options(ValidationOptions::domain_name().merged(overrides))
    }

    /// Uses `options` as-is, without resolving any defaults.
    #[must_use]
    pub fn with_options(options: ValidationOptions) -> Self {
        Self {
            base: HostnameValidator::with_options(options),
        }
    }

    /// The resolved option set this validator applies.
    #[must_use]
    pub fn options(&self) -> &ValidationOptions {
        self.base.options()
    }

    /// Boolean mode: the base rules, then the single-numeric-label rule.
    pub fn validate<'a>(&self, candidate: impl Into<Candidate<'a>>) -> ValidationResult<bool> {
        let candidate = candidate.into();
        if !self.base.validate(candidate)? {
            return Ok(false);
        }
        Ok(rules::valid_single_numeric_hostname(
            candidate,
            self.options().allow_numeric_hostname,
        ))
    }

    /// Diagnostic mode: the base rules, then the single-numeric-label rule.
    pub fn validate_verbose<'a>(
        &self,
        candidate: impl Into<Candidate<'a>>,
    ) -> ValidationResult<ViolationReport> {
        let candidate = candidate.into();
        let mut report = self.base.validate_verbose(candidate)?;
        if !rules::valid_single_numeric_hostname(candidate, self.options().allow_numeric_hostname)
        {
            report.push(Violation::new(ViolationCode::SingleNumericHostnameLabel));
        }
        Ok(report)
    }
}

impl Default for DomainNameValidator {
    fn default() -> Self {
        Self::with_options(ValidationOptions::domain_name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ==================== boolean mode tests ====================

    #[test]
    fn test_valid_hostnames_under_defaults() {
        let validator = HostnameValidator::default();
        for value in ["test", "test1.test2.com", "my-host.hostname", "0x12345"] {
            assert!(validator.validate(value).unwrap(), "{value} should pass");
        }
    }

    #[test]
    fn test_invalid_hostnames_under_defaults() {
        let validator = HostnameValidator::default();
        let my = format!("my{}.hostname", "t".repeat(62));
        let cases = [
            my.as_str(),
            "-myhost.hostname",
            "myhost-.hostname",
            "test..org",
            "test.",
            ".",
            "",
            "test.host_name",
            "*.test.org",
            "12345",
        ];
        for value in cases {
            assert!(!validator.validate(value).unwrap(), "{value:?} should fail");
        }
    }

    #[test]
    fn test_boolean_mode_matches_diagnostic_emptiness() {
        let validator = HostnameValidator::new(&OptionOverrides {
            require_valid_tld: Some(true),
            ..OptionOverrides::default()
        });
        for value in [
            "test.org",
            "test.invalidtld",
            "te...st",
            "-a.org",
            "a_b.org",
            "",
            ".",
            "test.",
        ] {
            let valid = validator.validate(value).unwrap();
            let report = validator.validate_verbose(value).unwrap();
            assert_eq!(valid, report.is_empty(), "{value:?}");
        }
    }

    // ==================== diagnostic mode tests ====================

    #[test]
    fn test_diagnostic_reports_every_violation() {
        let validator = HostnameValidator::new(&OptionOverrides {
            require_valid_tld: Some(true),
            ..OptionOverrides::default()
        });
        let report = validator.validate_verbose("-myhost..example_").unwrap();
        assert_eq!(
            report.codes().collect::<Vec<_>>(),
            vec![
                ViolationCode::InvalidLabelLength,
                ViolationCode::LabelBeginsOrEndsWithHyphen,
                ViolationCode::ContainsConsecutiveDots,
                ViolationCode::LabelContainsInvalidCharacters,
                ViolationCode::NotFqdn,
            ],
            "violations come back in rule order"
        );
    }

    #[test]
    fn test_diagnostic_charset_interpolation_data() {
        let validator = HostnameValidator::default();
        let report = validator.validate_verbose("bad,label").unwrap();
        let violation = &report.violations()[0];
        assert_eq!(violation.code, ViolationCode::LabelContainsInvalidCharacters);
        assert_eq!(violation.valid_chars.as_deref(), Some("a-z0-9-"));

        let validator = HostnameValidator::new(&OptionOverrides {
            allow_underscore: Some(true),
            ..OptionOverrides::default()
        });
        let report = validator.validate_verbose("bad,label").unwrap();
        assert_eq!(
            report.violations()[0].valid_chars.as_deref(),
            Some("a-z0-9-_")
        );
    }

    #[test]
    fn test_diagnostic_root_label_report_is_exactly_ends_with_dot() {
        let validator = HostnameValidator::default();
        let report = validator.validate_verbose(".").unwrap();
        assert_eq!(
            report.codes().collect::<Vec<_>>(),
            vec![ViolationCode::EndsWithDot]
        );
    }

    #[test]
    fn test_diagnostic_absent_and_non_string_reports() {
        let validator = HostnameValidator::default();
        for candidate in [Candidate::Absent, Candidate::NonString, Candidate::Text("")] {
            let report = validator.validate_verbose(candidate).unwrap();
            assert_eq!(
                report.codes().collect::<Vec<_>>(),
                vec![
                    ViolationCode::InvalidLength,
                    ViolationCode::InvalidLabelLength
                ],
                "{candidate:?}"
            );
        }
    }

    #[test]
    fn test_diagnostic_tld_check_runs_even_after_earlier_failures() {
        let validator = HostnameValidator::new(&OptionOverrides {
            require_valid_tld: Some(true),
            ..OptionOverrides::default()
        });
        let report = validator.validate_verbose("te...st").unwrap();
        assert!(report.contains(ViolationCode::ContainsConsecutiveDots));
        assert!(report.contains(ViolationCode::NotFqdn));
    }

    // ==================== option wiring tests ====================

    #[test]
    fn test_wildcard_option() {
        let on = HostnameValidator::new(&OptionOverrides {
            allow_wildcard_hostname: Some(true),
            ..OptionOverrides::default()
        });
        let off = HostnameValidator::default();
        assert!(on.validate("*.test.org").unwrap());
        assert!(!off.validate("*.test.org").unwrap());
        assert!(off
            .validate_verbose("*.test.org")
            .unwrap()
            .contains(ViolationCode::LabelContainsInvalidCharacters));
    }

    #[test]
    fn test_underscore_option() {
        let on = HostnameValidator::new(&OptionOverrides {
            allow_underscore: Some(true),
            ..OptionOverrides::default()
        });
        assert!(on.validate("test.host_name").unwrap());
        assert!(!HostnameValidator::default()
            .validate("test.host_name")
            .unwrap());
    }

    #[test]
    fn test_numeric_option() {
        let on = HostnameValidator::new(&OptionOverrides {
            allow_numeric_hostname: Some(true),
            ..OptionOverrides::default()
        });
        assert!(on.validate("12345").unwrap());
        let report = HostnameValidator::default().validate_verbose("12345").unwrap();
        assert_eq!(
            report.codes().collect::<Vec<_>>(),
            vec![ViolationCode::LabelIsNumeric]
        );
    }

    #[test]
    fn test_root_label_option() {
        let on = HostnameValidator::new(&OptionOverrides {
            allow_root_label: Some(true),
            ..OptionOverrides::default()
        });
        assert!(on.validate(".").unwrap());
        assert!(on.validate("test.").unwrap());
        assert!(!HostnameValidator::default().validate("test.").unwrap());
    }

    #[test]
    fn test_tld_override_beats_registry() {
        let validator = HostnameValidator::new(&OptionOverrides {
            require_valid_tld: Some(true),
            valid_tlds: Some(vec!["CCC".to_string()]),
            ..OptionOverrides::default()
        });
        assert!(validator.validate("test.ccc").unwrap());
        assert!(!validator.validate("test.org").unwrap());
    }

    #[test]
    fn test_empty_tld_override_always_fails_tld_check() {
        let validator = HostnameValidator::new(&OptionOverrides {
            require_valid_tld: Some(true),
            valid_tlds: Some(Vec::new()),
            ..OptionOverrides::default()
        });
        assert!(!validator.validate("test.org").unwrap());
        assert!(validator
            .validate_verbose("test.org")
            .unwrap()
            .contains(ViolationCode::NotFqdn));
    }

    // ==================== domain name tests ====================

    #[test]
    fn test_domain_name_defaults_enforce_tld() {
        let validator = DomainNameValidator::default();
        assert!(validator.validate("test.org").unwrap());
        assert!(!validator.validate("test.invalidtld").unwrap());
        assert!(validator
            .validate_verbose("test.invalidtld")
            .unwrap()
            .contains(ViolationCode::NotFqdn));
    }

    #[test]
    fn test_domain_name_rejects_bare_numeric_label() {
        let validator = DomainNameValidator::new(&OptionOverrides {
            require_valid_tld: Some(false),
            ..OptionOverrides::default()
        });
        assert!(!validator.validate("12345").unwrap());
        let report = validator.validate_verbose("12345").unwrap();
        assert_eq!(
            report.codes().collect::<Vec<_>>(),
            vec![ViolationCode::SingleNumericHostnameLabel]
        );
        assert!(validator.validate("12345.org").unwrap());
        assert!(validator.validate("0x12345").unwrap());
    }

    #[test]
    fn test_domain_name_numeric_guard_off_with_numeric_hostname_disabled() {
        let validator = DomainNameValidator::new(&OptionOverrides {
            allow_numeric_hostname: Some(false),
            require_valid_tld: Some(false),
            ..OptionOverrides::default()
        });
        let report = validator.validate_verbose("12345").unwrap();
        assert_eq!(
            report.codes().collect::<Vec<_>>(),
            vec![ViolationCode::LabelIsNumeric],
            "the base numeric rule reports instead"
        );
    }

    #[test]
    fn test_domain_name_root_label() {
        let validator = DomainNameValidator::new(&OptionOverrides {
            allow_root_label: Some(true),
            ..OptionOverrides::default()
        });
        assert!(validator.validate(".").unwrap());
        assert!(validator.validate("test.org.").unwrap());
    }

    // ==================== candidate classification tests ====================

    #[test]
    fn test_non_string_candidates_fail_length_checks_only() {
        let validator = HostnameValidator::new(&OptionOverrides {
            require_valid_tld: Some(true),
            ..OptionOverrides::default()
        });
        let number = serde_json::json!(12345);
        assert!(!validator.validate(&number).unwrap());

        let report = validator.validate_verbose(&number).unwrap();
        assert!(report.contains(ViolationCode::InvalidLength));
        assert!(report.contains(ViolationCode::InvalidLabelLength));
        assert!(
            !report.contains(ViolationCode::NotFqdn),
            "the TLD check is vacuous for non-strings"
        );
    }

    #[test]
    fn test_json_string_candidates_validate_normally() {
        let validator = HostnameValidator::default();
        let value = serde_json::json!("test.org");
        assert!(validator.validate(&value).unwrap());
    }
}
