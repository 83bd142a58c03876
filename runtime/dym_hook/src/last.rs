//! Legacy process-wide "last suggestion" slot.
//!
//! Calling code that predates [`SuggestionError`] read the most recent
//! match out of one global variable. The slot survives as a best-effort
//! compatibility shim only: concurrent lookups race on it, and nothing
//! may rely on it for correctness. The [`SuggestionError`] return value
//! is the API.
//!
//! [`SuggestionError`]: dym_core::SuggestionError

use parking_lot::Mutex;

static LAST_SUGGESTION: Mutex<Option<String>> = Mutex::new(None);

/// Record the best match of the most recent lookup.
///
/// Lookups with no match leave the previous value in place, matching
/// the legacy behavior of a slot that only ever held found matches.
pub(crate) fn record(name: &str) {
    *LAST_SUGGESTION.lock() = Some(name.to_string());
}

/// Most recent best match, if any lookup has produced one.
///
/// Best-effort: with concurrent lookups the value may belong to any of
/// them. Prefer [`SuggestionError::suggestions`].
///
/// [`SuggestionError::suggestions`]: dym_core::SuggestionError::suggestions
pub fn last_suggestion() -> Option<String> {
    LAST_SUGGESTION.lock().clone()
}
