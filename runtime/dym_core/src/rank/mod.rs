//! Scoring and selection of nearest-name suggestions.
//!
//! Given the name that failed to resolve and the candidate list from
//! [`crate::candidates::collect`], the ranker surfaces only the single
//! nearest tier: every returned name sits at the minimum observed edit
//! distance. One typo usually has one or few exact nearest spellings, so
//! a best-distance tier beats a fuzzy top-K here. Ties keep candidate
//! order, which the collector guarantees to be deterministic.

use crate::distance::edit_distance;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Rank `candidates` against the name that failed to resolve.
///
/// Returns the minimum-distance tier in candidate order; empty when
/// there are no candidates. The failed name itself is never returned.
pub fn rank<S: AsRef<str>>(failed_name: &str, candidates: &[S]) -> Vec<String> {
    rank_filtered(failed_name, candidates, &[])
}

/// Like [`rank`], additionally dropping `excluded` names — the
/// sentinels a host reserves for its own interception plumbing, which
/// must never be recommended back to the user.
pub fn rank_filtered<S: AsRef<str>>(
    failed_name: &str,
    candidates: &[S],
    excluded: &[&str],
) -> Vec<String> {
    nearest_tier(failed_name, candidates, excluded)
        .map(|(_, tier)| tier)
        .unwrap_or_default()
}

/// The minimum-distance tier together with its distance.
///
/// `None` when nothing is in play (no candidates, or all excluded).
/// Callers that apply a plausibility threshold before surfacing
/// suggestions need the distance; plain [`rank`] discards it.
pub fn nearest_tier<S: AsRef<str>>(
    failed_name: &str,
    candidates: &[S],
    excluded: &[&str],
) -> Option<(usize, Vec<String>)> {
    let excluded: FxHashSet<&str> = excluded.iter().copied().collect();

    // (candidate index, distance) for everything still in play. Scope
    // sizes are tens to low hundreds, so a small inline buffer covers
    // the common case.
    let mut scored: SmallVec<[(usize, usize); 16]> = SmallVec::new();
    let mut best = usize::MAX;

    for (idx, candidate) in candidates.iter().enumerate() {
        let candidate = candidate.as_ref();
        if candidate == failed_name || excluded.contains(candidate) {
            continue;
        }
        let distance = edit_distance(failed_name, candidate);
        best = best.min(distance);
        scored.push((idx, distance));
    }

    if scored.is_empty() {
        return None;
    }

    let tier = scored
        .iter()
        .filter(|&&(_, distance)| distance == best)
        .map(|&(idx, _)| candidates[idx].as_ref().to_string())
        .collect();
    Some((best, tier))
}

/// Plausibility threshold scaled to the failed name's length.
///
/// Short names tolerate fewer edits before a "nearest" match stops
/// being a believable typo: 1 edit for 1-2 chars, 2 for 3-5, 3 for
/// 6-10, then half the length capped at 5.
pub fn default_threshold(name_len: usize) -> usize {
    match name_len {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=10 => 3,
        n => (n / 2).min(5),
    }
}

#[cfg(test)]
mod tests;
