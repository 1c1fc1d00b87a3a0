//! Bundle of both binding components for one host.

use mixfetch_types::{BindingConfig, Builtin, Origin};

use crate::globals::{GlobalRegistry, Handle};
use crate::origin::OriginResolver;
use crate::scope::HostScope;

/// The handle registry and origin resolver for one host.
///
/// The two components share nothing but the host; neither calls the other.
pub struct HostBindings<S: HostScope> {
    registry: GlobalRegistry<S>,
    origin: OriginResolver<S>,
}

impl<S: HostScope + Clone> HostBindings<S> {
    /// Bind to `scope` with the default configuration.
    pub fn new(scope: S) -> Self {
        Self::with_config(scope, BindingConfig::default())
    }

    /// Bind to `scope` with an explicit configuration.
    pub fn with_config(scope: S, config: BindingConfig) -> Self {
        let origin = OriginResolver::with_config(scope.clone(), &config);
        Self {
            registry: GlobalRegistry::with_config(scope, config),
            origin,
        }
    }
}

impl<S: HostScope> HostBindings<S> {
    /// The global handle registry.
    pub fn registry(&self) -> &GlobalRegistry<S> {
        &self.registry
    }

    /// The origin resolver.
    pub fn origin(&self) -> &OriginResolver<S> {
        &self.origin
    }

    /// Handle for `builtin`, resolving the registry on first use.
    pub fn handle(&self, builtin: Builtin) -> &Handle<S::Value> {
        self.registry.get(builtin)
    }

    /// See [`OriginResolver::current_origin_string`].
    pub fn current_origin_string(&self) -> String {
        self.origin.current_origin_string()
    }

    /// See [`OriginResolver::current_origin`].
    pub fn current_origin(&self) -> Origin {
        self.origin.current_origin()
    }
}
