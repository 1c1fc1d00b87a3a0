//! Global handle registry.
//!
//! Resolves every [`Builtin`] from the host exactly once and hands out
//! read-only [`Handle`]s. A built-in the host does not provide resolves to an
//! absent handle; the failure surfaces as a [`TypeBindingError`] only when a
//! caller dereferences it.

use std::sync::OnceLock;

use mixfetch_types::{BindingConfig, Builtin, TypeBindingError};
use tracing::{debug, warn};

use crate::scope::HostScope;

/// A resolved reference to one host built-in, or the absent sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle<V> {
    builtin: Builtin,
    value: Option<V>,
}

impl<V> Handle<V> {
    /// Look `builtin` up on `scope`.
    pub fn resolve<S>(scope: &S, builtin: Builtin) -> Self
    where
        S: HostScope<Value = V>,
    {
        Self {
            builtin,
            value: scope.global(builtin.global_name()),
        }
    }

    /// A handle for a built-in the host does not provide.
    pub fn absent(builtin: Builtin) -> Self {
        Self {
            builtin,
            value: None,
        }
    }

    /// Which built-in this handle refers to.
    pub fn builtin(&self) -> Builtin {
        self.builtin
    }

    /// Whether the host provided this built-in.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Dereference the handle.
    pub fn value(&self) -> Result<&V, TypeBindingError> {
        self.value
            .as_ref()
            .ok_or(TypeBindingError::MissingCapability {
                builtin: self.builtin,
            })
    }
}

/// The full set of resolved handles, one per [`Builtin`].
#[derive(Debug, Clone)]
pub struct GlobalHandles<V> {
    handles: [Handle<V>; Builtin::ALL.len()],
}

impl<V> GlobalHandles<V> {
    /// Resolve every built-in from `scope`.
    ///
    /// Absent built-ins listed in `config.required_builtins` are logged at
    /// `warn`; nothing here fails.
    pub fn resolve<S>(scope: &S, config: &BindingConfig) -> Self
    where
        S: HostScope<Value = V>,
    {
        let handles = Builtin::ALL.map(|builtin| Handle::resolve(scope, builtin));

        for handle in &handles {
            if handle.is_present() {
                continue;
            }
            if config.is_required(handle.builtin()) {
                warn!(builtin = %handle.builtin(), "required host built-in is missing");
            } else {
                debug!(builtin = %handle.builtin(), "host built-in is missing");
            }
        }
        debug!(
            present = handles.iter().filter(|h| h.is_present()).count(),
            total = handles.len(),
            "resolved host built-ins"
        );

        Self { handles }
    }

    /// Handle for `builtin`.
    pub fn get(&self, builtin: Builtin) -> &Handle<V> {
        &self.handles[builtin.index()]
    }

    /// Built-ins the host did not provide.
    pub fn missing(&self) -> Vec<Builtin> {
        self.handles
            .iter()
            .filter(|h| !h.is_present())
            .map(Handle::builtin)
            .collect()
    }

    /// Iterate over all handles in [`Builtin::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &Handle<V>> {
        self.handles.iter()
    }

    /// `Error`.
    pub fn error(&self) -> &Handle<V> {
        self.get(Builtin::Error)
    }

    /// `Promise`.
    pub fn promise(&self) -> &Handle<V> {
        self.get(Builtin::Promise)
    }

    /// `Reflect`.
    pub fn reflect(&self) -> &Handle<V> {
        self.get(Builtin::Reflect)
    }

    /// `Object`.
    pub fn object(&self) -> &Handle<V> {
        self.get(Builtin::Object)
    }

    /// `Response`.
    pub fn response(&self) -> &Handle<V> {
        self.get(Builtin::Response)
    }

    /// `Request`.
    pub fn request(&self) -> &Handle<V> {
        self.get(Builtin::Request)
    }

    /// `Proxy`.
    pub fn proxy(&self) -> &Handle<V> {
        self.get(Builtin::Proxy)
    }

    /// `Headers`.
    pub fn headers(&self) -> &Handle<V> {
        self.get(Builtin::Headers)
    }
}

/// Lazily resolved, write-once [`GlobalHandles`] for one host.
///
/// The first call to [`GlobalRegistry::handles`] performs the lookups; every
/// later call returns the same set without touching the host again.
pub struct GlobalRegistry<S: HostScope> {
    scope: S,
    config: BindingConfig,
    handles: OnceLock<GlobalHandles<S::Value>>,
}

impl<S: HostScope> GlobalRegistry<S> {
    /// Create a registry with the default configuration.
    pub fn new(scope: S) -> Self {
        Self::with_config(scope, BindingConfig::default())
    }

    /// Create a registry with an explicit configuration.
    pub fn with_config(scope: S, config: BindingConfig) -> Self {
        Self {
            scope,
            config,
            handles: OnceLock::new(),
        }
    }

    /// The resolved handle set, resolving it on first use.
    pub fn handles(&self) -> &GlobalHandles<S::Value> {
        self.handles
            .get_or_init(|| GlobalHandles::resolve(&self.scope, &self.config))
    }

    /// Handle for `builtin`.
    pub fn get(&self, builtin: Builtin) -> &Handle<S::Value> {
        self.handles().get(builtin)
    }

    /// Whether resolution has already happened.
    pub fn is_resolved(&self) -> bool {
        self.handles.get().is_some()
    }

    /// The underlying host.
    pub fn scope(&self) -> &S {
        &self.scope
    }
}
