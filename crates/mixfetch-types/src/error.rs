//! Error types for the host binding layer.
//!
//! Only two things can go wrong here: the host lacks a built-in the client
//! tried to use ([`TypeBindingError`]), or the host reports an origin that is
//! not a URL ([`OriginError`]). The latter is fatal when it comes from the
//! host itself; the resolver panics rather than returning it.

use thiserror::Error;

use crate::builtin::Builtin;

/// A host built-in was used but the host does not provide it.
///
/// Raised on dereference, never at resolution time, so a host that lacks a
/// capability the caller never touches keeps working.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TypeBindingError {
    /// The named global is `undefined` or `null` on this host.
    #[error("required host capability missing: {builtin}")]
    MissingCapability {
        /// The built-in that could not be found.
        builtin: Builtin,
    },
}

impl TypeBindingError {
    /// The built-in this error refers to.
    pub fn builtin(&self) -> Builtin {
        match self {
            TypeBindingError::MissingCapability { builtin } => *builtin,
        }
    }
}

/// An origin string could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OriginError {
    /// The string is not a syntactically valid absolute URL.
    #[error("malformed origin {origin:?}: {source}")]
    Malformed {
        /// The string as reported by the host.
        origin: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },
}
