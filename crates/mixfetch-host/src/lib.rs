//! Host bindings for the mix-fetch WASM module.
//!
//! The mix-fetch client runs inside a JS host and intercepts `fetch` traffic
//! to route it over the mixnet. To do that it needs two things from the host,
//! and this crate is the only place that reads them:
//!
//! - **Built-in handles** ([`globals`]) -- `Error`, `Promise`, `Reflect`,
//!   `Object`, `Response`, `Request`, `Proxy` and `Headers`, resolved from the
//!   global namespace once and shared read-only afterwards.
//! - **The page origin** ([`origin`]) -- `location.origin`, parsed into an
//!   [`Origin`] for same-origin screening of outbound requests.
//!
//! # Hosts
//!
//! Everything is generic over [`HostScope`]. With the `browser` feature,
//! [`browser::JsHost`] reads from `globalThis` and the free functions in
//! [`browser`] expose a process-wide instance. [`memory::MemoryHost`] keeps
//! the namespace in memory for native embedders and tests.
//!
//! # Example
//!
//! ```rust
//! use mixfetch_host::{Builtin, HostBindings, MemoryHost, Origin};
//!
//! let bindings = HostBindings::new(MemoryHost::browser("http://localhost:8080"));
//! assert!(bindings.handle(Builtin::Request).is_present());
//!
//! let origin = bindings.current_origin();
//! assert_eq!(origin.port(), Some(8080));
//!
//! let node = HostBindings::new(MemoryHost::node());
//! assert_eq!(node.current_origin(), Origin::Unspecified);
//! ```

pub mod bindings;
pub mod globals;
pub mod memory;
pub mod origin;
pub mod scope;

/// `globalThis`-backed host and the process-wide bindings.
///
/// Only available with the `browser` feature.
#[cfg(feature = "browser")]
pub mod browser;

pub use bindings::HostBindings;
pub use globals::{GlobalHandles, GlobalRegistry, Handle};
pub use memory::{HostObject, MemoryHost};
pub use mixfetch_types::{BindingConfig, Builtin, Origin, OriginError, TypeBindingError};
pub use origin::OriginResolver;
pub use scope::HostScope;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
