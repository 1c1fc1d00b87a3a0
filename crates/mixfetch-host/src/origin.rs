//! Origin resolution.
//!
//! Reads the host's `location.origin` and turns it into an [`Origin`]. Hosts
//! without a location (Node and friends) resolve to [`Origin::Unspecified`].
//! A host that has a location but reports something that is not a URL leaves
//! the same-origin checks downstream with nothing trustworthy to work from, so
//! resolution panics instead of guessing.

use std::sync::OnceLock;

use mixfetch_types::{BindingConfig, Origin};
use tracing::{debug, error};

use crate::scope::HostScope;

/// Resolves the hosting page's origin.
pub struct OriginResolver<S> {
    scope: S,
    cache: bool,
    cached: OnceLock<Origin>,
}

impl<S: HostScope> OriginResolver<S> {
    /// Create a resolver with the default configuration (origin cached).
    pub fn new(scope: S) -> Self {
        Self::with_config(scope, &BindingConfig::default())
    }

    /// Create a resolver honouring `config.cache_origin`.
    pub fn with_config(scope: S, config: &BindingConfig) -> Self {
        Self {
            scope,
            cache: config.cache_origin,
            cached: OnceLock::new(),
        }
    }

    /// The raw origin string, or `""` when the host has no location.
    pub fn current_origin_string(&self) -> String {
        match self.scope.location_origin() {
            Some(origin) => {
                if origin.is_empty() {
                    debug!("host location reports an empty origin");
                }
                origin
            }
            None => String::new(),
        }
    }

    /// The parsed origin.
    ///
    /// # Panics
    ///
    /// Panics if the host reports a non-empty origin that does not parse as
    /// a URL.
    pub fn current_origin(&self) -> Origin {
        if !self.cache {
            return self.resolve();
        }
        self.cached.get_or_init(|| self.resolve()).clone()
    }

    /// The underlying host.
    pub fn scope(&self) -> &S {
        &self.scope
    }

    fn resolve(&self) -> Origin {
        let raw = self.current_origin_string();
        match Origin::parse(&raw) {
            Ok(origin) => {
                debug!(origin = %origin, "resolved host origin");
                origin
            }
            Err(err) => {
                error!(error = %err, "host reported a malformed origin");
                panic!("could not obtain origin: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryHost;

    #[test]
    fn no_location_is_empty_string() {
        let resolver = OriginResolver::new(MemoryHost::node());
        assert_eq!(resolver.current_origin_string(), "");
        assert_eq!(resolver.current_origin(), Origin::Unspecified);
    }

    #[test]
    fn location_origin_is_returned_verbatim() {
        let resolver = OriginResolver::new(MemoryHost::browser("https://example.com"));
        assert_eq!(resolver.current_origin_string(), "https://example.com");
    }

    #[test]
    fn empty_location_origin_collapses_to_unspecified() {
        let resolver = OriginResolver::new(MemoryHost::browser(""));
        assert_eq!(resolver.current_origin(), Origin::Unspecified);
    }

    #[test]
    fn parsed_origin_has_components() {
        let resolver = OriginResolver::new(MemoryHost::browser("http://localhost:8080"));
        let origin = resolver.current_origin();
        assert_eq!(origin.scheme(), Some("http"));
        assert_eq!(origin.host(), Some("localhost"));
        assert_eq!(origin.port(), Some(8080));
    }

    #[test]
    fn cached_origin_reads_location_once() {
        let host = MemoryHost::browser("https://example.com");
        let resolver = OriginResolver::new(host.clone());
        let first = resolver.current_origin();
        let second = resolver.current_origin();
        assert_eq!(first, second);
        assert_eq!(host.location_reads(), 1);
    }

    #[test]
    fn uncached_origin_reads_location_each_time() {
        let host = MemoryHost::browser("https://example.com");
        let config = BindingConfig {
            cache_origin: false,
            ..BindingConfig::default()
        };
        let resolver = OriginResolver::with_config(host.clone(), &config);
        resolver.current_origin();
        resolver.current_origin();
        assert_eq!(host.location_reads(), 2);
    }

    #[test]
    #[should_panic(expected = "could not obtain origin")]
    fn malformed_origin_panics() {
        let resolver = OriginResolver::new(MemoryHost::browser(" \t "));
        resolver.current_origin();
    }

    #[test]
    fn malformed_origin_string_does_not_panic() {
        let resolver = OriginResolver::new(MemoryHost::browser("\u{0}\u{1}"));
        assert_eq!(resolver.current_origin_string(), "\u{0}\u{1}");
    }
}
