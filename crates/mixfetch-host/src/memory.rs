//! In-memory host.
//!
//! [`MemoryHost`] stands in for a JS global namespace when the binding layer
//! runs outside a JS engine. Globals are plain [`HostObject`] tokens whose
//! identity is preserved across clones, and reads are counted so callers can
//! check that resolution does not hit the host more than once.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use mixfetch_types::Builtin;

use crate::scope::HostScope;

/// An opaque host object. Clones refer to the same object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostObject(Arc<str>);

impl HostObject {
    /// Create a new object labelled `name`.
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// The label the object was created with.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether `self` and `other` are the same object, not merely equal.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A host global namespace held in memory.
///
/// Clones share the same objects and read counters.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    globals: HashMap<String, HostObject>,
    location: Option<String>,
    global_lookups: Arc<AtomicUsize>,
    location_reads: Arc<AtomicUsize>,
}

impl MemoryHost {
    /// An empty host: no globals, no location.
    pub fn new() -> Self {
        Self::default()
    }

    /// A Node-shaped host: every built-in, no location.
    pub fn node() -> Self {
        Builtin::ALL
            .into_iter()
            .fold(Self::new(), |host, builtin| host.with_builtin(builtin))
    }

    /// A browser-shaped host: every built-in plus `location.origin`.
    pub fn browser(origin: &str) -> Self {
        Self::node().with_location(origin)
    }

    /// Publish `builtin` under its standard global name.
    pub fn with_builtin(self, builtin: Builtin) -> Self {
        self.with_global(builtin.global_name())
    }

    /// Publish a fresh object under `name`.
    pub fn with_global(mut self, name: &str) -> Self {
        self.globals.insert(name.to_string(), HostObject::new(name));
        self
    }

    /// Remove `builtin` from the namespace.
    pub fn without(mut self, builtin: Builtin) -> Self {
        self.globals.remove(builtin.global_name());
        self
    }

    /// Give the host a location whose `origin` is `origin`.
    pub fn with_location(mut self, origin: &str) -> Self {
        self.location = Some(origin.to_string());
        self
    }

    /// Remove the host's location.
    pub fn without_location(mut self) -> Self {
        self.location = None;
        self
    }

    /// Number of [`HostScope::global`] calls so far.
    pub fn global_lookups(&self) -> usize {
        self.global_lookups.load(Ordering::Relaxed)
    }

    /// Number of [`HostScope::location_origin`] calls so far.
    pub fn location_reads(&self) -> usize {
        self.location_reads.load(Ordering::Relaxed)
    }
}

impl HostScope for MemoryHost {
    type Value = HostObject;

    fn global(&self, name: &str) -> Option<HostObject> {
        self.global_lookups.fetch_add(1, Ordering::Relaxed);
        self.globals.get(name).cloned()
    }

    fn location_origin(&self) -> Option<String> {
        self.location_reads.fetch_add(1, Ordering::Relaxed);
        self.location.clone()
    }
}
