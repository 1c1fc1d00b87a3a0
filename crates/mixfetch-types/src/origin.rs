//! Structured page origin.
//!
//! [`Origin`] is what the request-handling code consults before letting an
//! intercepted request through the mixnet: same-origin requests keep their
//! credentials, cross-origin ones are screened. A host without any notion of
//! a page location (Node, Deno, bare workers) yields [`Origin::Unspecified`],
//! which places no constraint on outbound requests.

use std::fmt;

use url::Url;

use crate::error::OriginError;

/// Serialisation browsers use for an opaque origin.
pub const OPAQUE_ORIGIN: &str = "null";

/// The origin of the hosting page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Origin {
    /// The host has no page location. No origin constraint applies.
    #[default]
    Unspecified,
    /// The host reports an opaque origin (sandboxed frame, `file:` page).
    /// It is never same-origin with anything.
    Opaque,
    /// A scheme/host/port tuple origin.
    Tuple(Url),
}

impl Origin {
    /// Parse an origin string as reported by the host's `location.origin`.
    ///
    /// The empty string maps to [`Origin::Unspecified`] and `"null"` to
    /// [`Origin::Opaque`]. Anything else must be an absolute URL.
    pub fn parse(origin: &str) -> Result<Self, OriginError> {
        if origin.is_empty() {
            return Ok(Origin::Unspecified);
        }
        if origin == OPAQUE_ORIGIN {
            return Ok(Origin::Opaque);
        }

        let malformed = |source| OriginError::Malformed {
            origin: origin.to_string(),
            source,
        };
        let url = Url::parse(origin).map_err(malformed)?;

        let tuple = url.origin();
        if !tuple.is_tuple() {
            return Ok(Origin::Opaque);
        }
        // Keep scheme, host and port only; path, query and userinfo are not
        // part of an origin.
        let url = Url::parse(&tuple.ascii_serialization()).map_err(malformed)?;
        Ok(Origin::Tuple(url))
    }

    /// True for [`Origin::Unspecified`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Origin::Unspecified)
    }

    /// The parsed URL, for tuple origins.
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            Origin::Tuple(url) => Some(url),
            _ => None,
        }
    }

    /// URL scheme, e.g. `https`.
    pub fn scheme(&self) -> Option<&str> {
        self.as_url().map(Url::scheme)
    }

    /// Host name or address.
    pub fn host(&self) -> Option<&str> {
        self.as_url().and_then(Url::host_str)
    }

    /// Explicit port. `None` when the origin uses the scheme's default port.
    pub fn port(&self) -> Option<u16> {
        self.as_url().and_then(Url::port)
    }

    /// Port, falling back to the scheme's well-known default.
    pub fn port_or_known_default(&self) -> Option<u16> {
        self.as_url().and_then(Url::port_or_known_default)
    }

    /// Whether a request to `target` passes same-origin screening.
    ///
    /// An unspecified origin accepts every target; an opaque one accepts none.
    pub fn matches(&self, target: &Url) -> bool {
        match self {
            Origin::Unspecified => true,
            Origin::Opaque => false,
            Origin::Tuple(url) => url.origin() == target.origin(),
        }
    }

    /// Serialise the way `location.origin` does: `scheme://host[:port]`,
    /// `"null"` for opaque origins and `""` when unspecified.
    pub fn ascii_serialization(&self) -> String {
        match self {
            Origin::Unspecified => String::new(),
            Origin::Opaque => OPAQUE_ORIGIN.to_string(),
            Origin::Tuple(url) => url.origin().ascii_serialization(),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ascii_serialization())
    }
}
