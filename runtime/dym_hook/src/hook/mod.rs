//! The `on_unresolved_reference` entry point.
//!
//! One [`LookupHook`] wraps one host [`NameSource`]. Each failed lookup
//! flows through it exactly once: collect candidates, rank them, apply
//! the plausibility threshold, build the [`SuggestionError`]. The hook
//! itself never fails — a degraded collaborator means fewer candidates,
//! never a secondary error that masks the original failure.

use crate::{builtins, last};
use dym_core::{
    collect, default_threshold, nearest_tier, unresolved_name, NameSource, ScopeId,
    SuggestionError,
};

/// Adapter between a host runtime's failure path and the suggestion
/// core.
///
/// Holds the injected name source, the reserved vocabulary for the
/// default scope, and the sentinel names to keep out of suggestions.
/// Stateless across lookups apart from the documented-racy
/// [`crate::last`] compat slot.
pub struct LookupHook<S> {
    source: S,
    reserved: Vec<String>,
    sentinels: Vec<String>,
}

impl<S: NameSource> LookupHook<S> {
    /// Hook up a name source with the default reserved vocabulary and
    /// sentinel list.
    pub fn new(source: S) -> Self {
        LookupHook {
            source,
            reserved: to_owned(builtins::RESERVED_NAMES),
            sentinels: to_owned(builtins::FALLBACK_SENTINELS),
        }
    }

    /// Replace the reserved vocabulary unioned into default-scope
    /// candidate sets.
    #[must_use]
    pub fn with_reserved<I, N>(mut self, reserved: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.reserved = reserved.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the sentinel names excluded from ranking.
    #[must_use]
    pub fn with_sentinels<I, N>(mut self, sentinels: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.sentinels = sentinels.into_iter().map(Into::into).collect();
        self
    }

    /// Handle one unresolved reference. Called exactly once per failed
    /// lookup; always returns an error value, possibly without
    /// suggestions.
    pub fn on_unresolved_reference(&self, name: &str, scope: &ScopeId) -> SuggestionError {
        let candidates = collect(scope, Some(&self.source as &dyn NameSource), &self.reserved);
        tracing::debug!(
            name,
            scope = %scope,
            candidates = candidates.len(),
            "collected candidates for failed lookup"
        );

        let sentinels: Vec<&str> = self.sentinels.iter().map(String::as_str).collect();
        let threshold = default_threshold(name.chars().count());
        let suggestions = match nearest_tier(name, &candidates, &sentinels) {
            Some((distance, tier)) if distance <= threshold => tier,
            Some((distance, _)) => {
                tracing::debug!(name, distance, threshold, "nearest tier beyond threshold");
                Vec::new()
            }
            None => Vec::new(),
        };

        if let Some(best) = suggestions.first() {
            tracing::debug!(name, best = best.as_str(), "nearest match found");
            last::record(best);
        }

        unresolved_name(name, scope.clone(), suggestions)
    }

    /// Like [`Self::on_unresolved_reference`], preserving the host's
    /// own failure text for rendering.
    pub fn on_failure(
        &self,
        original_message: &str,
        name: &str,
        scope: &ScopeId,
    ) -> SuggestionError {
        self.on_unresolved_reference(name, scope)
            .with_original_message(original_message)
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}
