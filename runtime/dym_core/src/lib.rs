//! Core of the "did you mean" engine for unresolved-name failures.
//!
//! When a host runtime fails to resolve a function, method, or variable
//! name, this crate finds the closest names that *would* have resolved
//! in the same scope and packages them into a structured error:
//!
//! - [`distance`] — Levenshtein edit distance between two names
//! - [`candidates`] — candidate-set construction from an injected
//!   [`NameSource`] plus an optional reserved-name list
//! - [`rank`] — scoring and minimum-distance-tier selection
//! - [`error`] — the [`SuggestionError`] value handed back to the host
//!
//! The crate is pure: no I/O, no logging, no global state. Each failed
//! lookup is processed start to finish as an independent value; nothing
//! is shared between lookups. The interception plumbing that feeds this
//! crate lives in `dym_hook`.

pub mod candidates;
pub mod distance;
pub mod error;
pub mod rank;

pub use candidates::{collect, NameSource, ScopeId};
pub use distance::edit_distance;
pub use error::{unresolved_name, FailedLookup, SuggestionError};
pub use rank::{default_threshold, nearest_tier, rank, rank_filtered};
