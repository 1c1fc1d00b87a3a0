//! Host global namespace abstraction.
//!
//! [`HostScope`] is the only way the binding layer touches the host. The
//! browser build implements it over `globalThis` ([`crate::browser::JsHost`]);
//! [`crate::memory::MemoryHost`] implements it in memory for embedders that
//! run outside a JS engine and for tests.

/// Read-only view of a host's global namespace.
pub trait HostScope {
    /// Reference type for host objects. Cloning must yield a reference to the
    /// same underlying object.
    type Value: Clone;

    /// Look up a global by name.
    ///
    /// Returns `None` when the global is missing, `undefined` or `null`.
    fn global(&self, name: &str) -> Option<Self::Value>;

    /// The host's `location.origin`.
    ///
    /// Returns `None` when the host has no `location` at all. A location with
    /// a missing or non-string `origin` field yields `Some("")`.
    fn location_origin(&self) -> Option<String>;
}

impl<S: HostScope + ?Sized> HostScope for &S {
    type Value = S::Value;

    fn global(&self, name: &str) -> Option<Self::Value> {
        (**self).global(name)
    }

    fn location_origin(&self) -> Option<String> {
        (**self).location_origin()
    }
}
