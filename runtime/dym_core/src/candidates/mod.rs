//! Candidate-set construction for a failed lookup.
//!
//! The host runtime owns its namespaces; this module only asks it
//! questions through [`NameSource`] and assembles the answers into a
//! deduplicated candidate list. Output order matters: the ranking
//! tie-break preserves it (see [`crate::rank`]), so [`collect`] keeps
//! names in discovery order.

use rustc_hash::FxHashSet;
use std::fmt;

/// Opaque identifier for a lookup scope (a namespace, a package, the
/// top-level execution context).
///
/// The core never interprets the contents; it only forwards the id to
/// the [`NameSource`] collaborators and uses it as a hash/equality key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(String);

impl ScopeId {
    /// Wrap a host-provided scope identifier.
    pub fn new(id: impl Into<String>) -> Self {
        ScopeId(id.into())
    }

    /// The identifier as the host reported it.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScopeId {
    fn from(id: &str) -> Self {
        ScopeId::new(id)
    }
}

/// Host-runtime collaborators for candidate enumeration.
///
/// `defined_names` must report only names that currently resolve in
/// `scope`, in a stable order — the order feeds the suggestion
/// tie-break. `is_default_scope` marks the scope whose lookups also see
/// the host's reserved/built-in vocabulary (the place where built-in
/// typos are most common).
///
/// Implementations are expected to enumerate an in-memory symbol
/// registry: synchronous and fast, never a disk or network call.
pub trait NameSource {
    /// Names that resolve successfully in `scope`, in stable order.
    fn defined_names(&self, scope: &ScopeId) -> Vec<String>;

    /// Whether `scope` is the host's top-level/default lookup context.
    fn is_default_scope(&self, scope: &ScopeId) -> bool;
}

/// Assemble the deduplicated candidate list for a failed lookup.
///
/// Defined names come first, in the source's enumeration order; when
/// `scope` is the default scope, `reserved` is appended in list order.
/// Duplicates keep their first occurrence. A missing source degrades to
/// an empty list — an unavailable enumeration collaborator must never
/// turn into a secondary failure that masks the original lookup error.
pub fn collect<R: AsRef<str>>(
    scope: &ScopeId,
    source: Option<&dyn NameSource>,
    reserved: &[R],
) -> Vec<String> {
    let Some(source) = source else {
        return Vec::new();
    };

    let mut seen = FxHashSet::default();
    let mut names = Vec::new();

    for name in source.defined_names(scope) {
        if seen.insert(name.clone()) {
            names.push(name);
        }
    }

    if source.is_default_scope(scope) {
        for name in reserved {
            let name = name.as_ref();
            if seen.insert(name.to_string()) {
                names.push(name.to_string());
            }
        }
    }

    names
}
