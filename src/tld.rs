//! Process-wide registry of recognized top-level domains.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock, PoisonError};

use serde::Deserialize;

use crate::error::{ValidationError, ValidationResult};

const ALLOWED_TLDS: &str = include_str!("allowed_tlds.json");

static REGISTRY: OnceLock<HashSet<String>> = OnceLock::new();
static LOAD: Mutex<()> = Mutex::new(());

#[derive(Deserialize)]
struct TldFile {
    allowed_tlds: Vec<String>,
}

/// Read-only, lazily-initialized set of recognized TLDs.
///
/// The bundled data is parsed once, on first lookup. Concurrent first
/// lookups cannot race into a partial set, and readers never block once the
/// set exists. A parse failure is returned to the caller and retried on the
/// next lookup rather than cached. The set never changes for the lifetime of
/// the process; callers wanting a different set pass the `valid_tlds`
/// option instead of mutating process state.
pub struct TldRegistry;

impl TldRegistry {
    /// The shared TLD set, loading it on first call.
    pub fn shared() -> ValidationResult<&'static HashSet<String>> {
        if let Some(set) = REGISTRY.get() {
            return Ok(set);
        }
        let _guard = LOAD.lock().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have finished the load while we waited.
        if let Some(set) = REGISTRY.get() {
            return Ok(set);
        }
        let set = parse(ALLOWED_TLDS)?;
        log::debug!("TLD registry loaded with {} entries", set.len());
        Ok(REGISTRY.get_or_init(|| set))
    }

    /// Whether `tld` is a recognized TLD, ASCII case-insensitively.
    pub fn contains(tld: &str) -> ValidationResult<bool> {
        Ok(Self::shared()?.contains(tld.to_ascii_lowercase().as_str()))
    }
}

fn parse(raw: &str) -> ValidationResult<HashSet<String>> {
    let file: TldFile = serde_json::from_str(raw)
        .map_err(|err| ValidationError::TldRegistry(format!("malformed TLD data: {err}")))?;
    if file.allowed_tlds.is_empty() {
        return Err(ValidationError::TldRegistry(
            "TLD data contains no entries".to_string(),
        ));
    }
    Ok(file
        .allowed_tlds
        .into_iter()
        .map(|tld| tld.to_ascii_lowercase())
        .collect())
}
