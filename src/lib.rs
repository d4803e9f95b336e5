//! Hostname and domain name validation.
//!
//! Checks whether a value is a syntactically legal DNS hostname or domain
//! name under a configurable rule set: RFC-952/1123-style length, hyphen,
//! dot and character constraints plus practical extensions (wildcard
//! labels, underscore tolerance, numeric-label policy, TLD allow-listing,
//! root-label handling).
//!
//! Two modes run over one rule table: a short-circuiting boolean check, and
//! a diagnostic pass that reports every violated rule as a stable code an
//! external message layer can map to text.
//!
//! ```
//! use valid_hostname::{HostnameValidator, ViolationCode};
//!
//! let validator = HostnameValidator::default();
//! assert!(validator.validate("test.org")?);
//!
//! let report = validator.validate_verbose("-test.org")?;
//! assert!(report.contains(ViolationCode::LabelBeginsOrEndsWithHyphen));
//! # Ok::<(), valid_hostname::ValidationError>(())
//! ```
//!
//! Domain names are hostnames with TLD enforcement and numeric labels on by
//! default, plus a guard against bare numeric values:
//!
//! ```
//! use valid_hostname::DomainNameValidator;
//!
//! let validator = DomainNameValidator::default();
//! assert!(validator.validate("12345.org")?);
//! assert!(!validator.validate("12345")?);
//! # Ok::<(), valid_hostname::ValidationError>(())
//! ```

mod charset;
mod engine;
mod error;
mod options;
pub mod rules;
mod tld;
mod types;

pub use charset::LabelCharset;
pub use engine::{DomainNameValidator, HostnameValidator};
pub use error::{ValidationError, ValidationResult};
pub use options::{OptionOverrides, ValidationOptions};
pub use tld::TldRegistry;
pub use types::{Candidate, Violation, ViolationCode, ViolationReport};
