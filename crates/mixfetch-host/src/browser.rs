//! JS host implementation.
//!
//! [`JsHost`] reads from `globalThis` via [`js_sys::Reflect`], so the same
//! code serves a `Window`, a `WorkerGlobalScope` and Node. The free functions
//! in this module are backed by one process-wide [`HostBindings`] that is
//! built on first access and never torn down. WASM is single-threaded and
//! `JsValue` is `!Send`, so the bindings live in a `thread_local!`.

use std::sync::OnceLock;

use js_sys::{Array, Function, Reflect};
use mixfetch_types::{BindingConfig, Builtin, Origin, TypeBindingError};
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};

use crate::bindings::HostBindings;
use crate::globals::Handle;
use crate::scope::HostScope;

static CONFIG: OnceLock<BindingConfig> = OnceLock::new();

thread_local! {
    static BINDINGS: HostBindings<JsHost> =
        HostBindings::with_config(JsHost, CONFIG.get_or_init(BindingConfig::default).clone());
}

/// The JS global object as a [`HostScope`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsHost;

fn is_nullish(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

fn get_property(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|v| !is_nullish(v))
}

impl HostScope for JsHost {
    type Value = JsValue;

    fn global(&self, name: &str) -> Option<JsValue> {
        get_property(&js_sys::global(), name)
    }

    fn location_origin(&self) -> Option<String> {
        // Node has no `location`.
        let location = get_property(&js_sys::global(), "location")?;
        Some(
            get_property(&location, "origin")
                .and_then(|origin| origin.as_string())
                .unwrap_or_default(),
        )
    }
}

/// Convert a [`TypeBindingError`] into a JS `TypeError`.
pub fn type_error(err: &TypeBindingError) -> JsValue {
    js_sys::TypeError::new(&err.to_string()).into()
}

impl Handle<JsValue> {
    /// The handle as a callable constructor.
    ///
    /// Fails for absent handles and for non-callable built-ins (`Reflect`).
    pub fn constructor(&self) -> Result<Function, TypeBindingError> {
        self.value()?
            .dyn_ref::<Function>()
            .cloned()
            .ok_or(TypeBindingError::MissingCapability {
                builtin: self.builtin(),
            })
    }

    /// `new Builtin(...args)`.
    ///
    /// An absent handle fails with a JS `TypeError`; exceptions thrown by the
    /// constructor itself are passed through.
    pub fn construct(&self, args: &Array) -> Result<JsValue, JsValue> {
        let ctor = self.constructor().map_err(|err| type_error(&err))?;
        Reflect::construct(&ctor, args)
    }
}

/// Install the panic hook and resolve every built-in.
///
/// Call once from the embedding module's start function. Without it the
/// built-ins are resolved on first access instead.
pub fn init() {
    init_with_config(BindingConfig::default());
}

/// Like [`init`], with an explicit configuration.
///
/// Returns `false` if the bindings already carry a configuration, either
/// from an earlier call or because another function in this module ran
/// first. The earlier configuration stays in effect.
pub fn init_with_config(config: BindingConfig) -> bool {
    console_error_panic_hook::set_once();
    let applied = install_config(config);
    BINDINGS.with(|bindings| {
        bindings.registry().handles();
    });
    applied
}

/// Install `config` and build the bindings with it. Once the bindings exist
/// their configuration is fixed.
fn install_config(config: BindingConfig) -> bool {
    let applied = CONFIG.set(config).is_ok();
    if !applied {
        debug!("binding config already installed, keeping the first one");
    }
    BINDINGS.with(|_| ());
    applied
}

/// Handle for `builtin`.
pub fn handle(builtin: Builtin) -> Handle<JsValue> {
    BINDINGS.with(|bindings| bindings.handle(builtin).clone())
}

/// Built-ins this host does not provide.
pub fn missing_builtins() -> Vec<Builtin> {
    BINDINGS.with(|bindings| bindings.registry().handles().missing())
}

/// `Error`.
pub fn error() -> Handle<JsValue> {
    handle(Builtin::Error)
}

/// `Promise`.
pub fn promise() -> Handle<JsValue> {
    handle(Builtin::Promise)
}

/// `Reflect`.
pub fn reflect() -> Handle<JsValue> {
    handle(Builtin::Reflect)
}

/// `Object`.
pub fn object() -> Handle<JsValue> {
    handle(Builtin::Object)
}

/// `Response`.
pub fn response() -> Handle<JsValue> {
    handle(Builtin::Response)
}

/// `Request`.
pub fn request() -> Handle<JsValue> {
    handle(Builtin::Request)
}

/// `Proxy`.
pub fn proxy() -> Handle<JsValue> {
    handle(Builtin::Proxy)
}

/// `Headers`.
pub fn headers() -> Handle<JsValue> {
    handle(Builtin::Headers)
}

/// The page's `location.origin`, or `""` outside a browser.
pub fn current_origin_string() -> String {
    BINDINGS.with(|bindings| bindings.current_origin_string())
}

/// The page's parsed origin.
///
/// # Panics
///
/// Panics if the page reports an origin that is not a URL.
pub fn current_origin() -> Origin {
    BINDINGS.with(|bindings| bindings.current_origin())
}
