//! # mixfetch-types
//!
//! Value types for the mix-fetch host binding layer.
//!
//! This crate has no dependency on `wasm-bindgen` so it compiles on every
//! target and can be shared by the request-interception and transport code
//! that consumes the bindings. It contains:
//!
//! - **[`builtin`]** -- the closed set of host built-ins the client needs
//! - **[`origin`]** -- the structured page origin used for same-origin screening
//! - **[`error`]** -- [`TypeBindingError`] and [`OriginError`]
//! - **[`config`]** -- [`BindingConfig`], the binding layer's settings

pub mod builtin;
pub mod config;
pub mod error;
pub mod origin;

pub use builtin::Builtin;
pub use config::BindingConfig;
pub use error::{OriginError, TypeBindingError};
pub use origin::Origin;
