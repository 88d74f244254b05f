//! Typed errors for config path resolution.

use thiserror::Error;

/// Fatal errors raised while resolving config-provided paths.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Neither the analysis directory nor the defaults fallback holds the file.
    #[error(
        "unable to resolve config-provided path {template:?}\n  \
         checked {primary:?} (relative to the analysis directory)\n  \
         checked {fallback:?} (defaults fallback)\n\
         neither location exists"
    )]
    Unresolved {
        template: String,
        primary: String,
        fallback: String,
    },

    /// A `{placeholder}` in a path template has no binding in the context.
    #[error(
        "no substitution available for {{{placeholder}}} in path template {template:?}\n  \
         available substitutions: {available}\n\
         the placeholder may be misspelled, or this path may only be resolvable \
         inside a task that binds {{{placeholder}}}"
    )]
    MissingSubstitution {
        placeholder: String,
        template: String,
        /// Comma-separated binding names, or `(none)`.
        available: String,
    },

    /// A terminal config value was not a string or a list of strings.
    #[error(
        "config value at {key_path:?} must be a path string or a list of path strings, found {found}"
    )]
    TypeMismatch {
        key_path: String,
        found: &'static str,
    },
}
