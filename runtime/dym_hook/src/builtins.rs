//! Static reserved-name vocabulary for the default scope.
//!
//! Lookups in the host's top-level context resolve built-in functions
//! and keywords as well as user definitions, so built-in typos are most
//! common there. The list is static configuration, not computed: hosts
//! with a different vocabulary substitute their own through
//! [`crate::LookupHook::with_reserved`].
//!
//! The shipped list covers a Perl-style host: the built-in functions
//! and flow keywords a top-level lookup would resolve.

/// Built-in names resolvable in the default scope.
pub const RESERVED_NAMES: &[&str] = &[
    // Output and formatting
    "print", "printf", "sprintf", "say", "warn", "die",
    // Strings
    "length", "substr", "index", "rindex", "join", "split", "reverse", "lc", "uc", "lcfirst",
    "ucfirst", "chomp", "chop", "chr", "ord", "hex", "oct", "quotemeta", "pack", "unpack",
    // Lists and hashes
    "push", "pop", "shift", "unshift", "splice", "sort", "grep", "map", "keys", "values", "each",
    "exists", "delete", "wantarray", "scalar",
    // Numbers
    "abs", "int", "sqrt", "exp", "log", "sin", "cos", "atan2", "rand", "srand",
    // Files and I/O
    "open", "close", "read", "eof", "seek", "tell", "binmode", "mkdir", "rmdir", "unlink",
    "rename", "stat", "chdir",
    // References and packages
    "ref", "bless", "defined", "undef", "local", "caller", "require",
    // Control flow
    "return", "last", "next", "redo", "goto", "exit", "eval",
    // Time
    "time", "sleep", "localtime", "gmtime",
];

/// Names the interception plumbing itself occupies in a host namespace.
///
/// A dispatch-fallback hook resolves under these names, so the ranker
/// must never recommend them back to the user.
pub const FALLBACK_SENTINELS: &[&str] = &["AUTOLOAD", "DESTROY"];

/// Membership test against [`RESERVED_NAMES`].
pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}
