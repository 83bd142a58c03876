//! Structured error value for an unresolved-name failure.
//!
//! The error is a self-contained value: it owns its suggestion list and
//! carries the original failure description unchanged. Hosts decide
//! whether to raise it, return it, or just render it — catching code
//! can branch on [`SuggestionError::has_suggestions`] without parsing
//! the message.

use crate::candidates::ScopeId;
use std::error::Error;
use std::fmt;

/// One unresolved-reference event: the name that failed to resolve and
/// the scope it failed in. Built by the interception adapter, consumed
/// once, discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedLookup {
    /// The spelling that did not resolve.
    pub name: String,
    /// The scope the lookup ran in.
    pub scope: ScopeId,
}

impl FailedLookup {
    /// Record a failed lookup of `name` in `scope`.
    pub fn new(name: impl Into<String>, scope: ScopeId) -> Self {
        FailedLookup {
            name: name.into(),
            scope,
        }
    }
}

/// The enriched failure handed back to the host: the original lookup
/// failure plus the nearest valid names, best match first.
///
/// Immutable once built. The suggestion list holds only names at the
/// single minimum observed distance, in candidate discovery order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "suggestion errors should be raised or returned, not silently dropped"]
pub struct SuggestionError {
    failed: FailedLookup,
    original_message: String,
    suggestions: Vec<String>,
}

impl SuggestionError {
    /// Build an error with the default message for `failed`.
    pub fn new(failed: FailedLookup, suggestions: Vec<String>) -> Self {
        let original_message = format!(
            "`{}` is not defined in scope `{}`",
            failed.name, failed.scope
        );
        SuggestionError {
            failed,
            original_message,
            suggestions,
        }
    }

    /// Carry the host runtime's own failure text instead of the default
    /// message. The suggestion clause only ever appends; the original
    /// description is never rewritten or lost.
    pub fn with_original_message(mut self, message: impl Into<String>) -> Self {
        self.original_message = message.into();
        self
    }

    /// The spelling that failed to resolve.
    pub fn failed_name(&self) -> &str {
        &self.failed.name
    }

    /// The scope the lookup ran in.
    pub fn scope(&self) -> &ScopeId {
        &self.failed.scope
    }

    /// Nearest valid names, best match first. May be empty.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Whether any close match was found.
    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// The host's failure description, without the suggestion clause.
    pub fn original_message(&self) -> &str {
        &self.original_message
    }

    /// The deterministic human-readable form; identical to `Display`.
    pub fn rendered_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SuggestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_message)?;
        if !self.suggestions.is_empty() {
            write!(f, ". Did you mean {}?", self.suggestions.join(", "))?;
        }
        Ok(())
    }
}

impl Error for SuggestionError {}

/// Unresolved name with its suggestions already ranked.
#[cold]
pub fn unresolved_name(name: &str, scope: ScopeId, suggestions: Vec<String>) -> SuggestionError {
    SuggestionError::new(FailedLookup::new(name, scope), suggestions)
}

#[cfg(test)]
mod tests;
