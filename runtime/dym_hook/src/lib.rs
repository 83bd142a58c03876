//! Interception boundary for the dym suggestion engine.
//!
//! The host runtime detects a failed lookup however it likes — a
//! dispatch fallback, a global uncaught-error handler — and hands this
//! crate a `(name, scope)` pair through [`LookupHook::on_unresolved_reference`].
//! Everything downstream is deterministic: candidates are collected
//! through the host's [`NameSource`], ranked in `dym_core`, and the
//! result comes back as a [`SuggestionError`] value.
//!
//! Also shipped here: the static reserved-name vocabulary for the
//! default scope ([`builtins`]) and the legacy process-wide
//! "last suggestion" slot ([`last`]), kept as a documented best-effort
//! shim for calling code that predates the structured error.

pub mod builtins;
pub mod hook;
pub mod last;

pub use dym_core::{NameSource, ScopeId, SuggestionError};
pub use hook::LookupHook;
pub use last::last_suggestion;
