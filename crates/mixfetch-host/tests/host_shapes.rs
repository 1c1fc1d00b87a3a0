//! Binding behaviour across host shapes.
//!
//! Drives the public API through [`MemoryHost`] configured as a browser page,
//! a Node-like runtime and a stripped-down sandbox, checking handle identity,
//! deferred missing-capability failures and origin resolution.

use mixfetch_host::{
    BindingConfig, Builtin, HostBindings, MemoryHost, Origin, TypeBindingError,
};
use url::Url;

// ── Handle registry ────────────────────────────────────────────────

#[test]
fn handles_are_identical_across_reads() {
    let host = MemoryHost::browser("https://example.com");
    let bindings = HostBindings::new(host.clone());

    for builtin in Builtin::ALL {
        let first = bindings.handle(builtin).value().unwrap().clone();
        let second = bindings.handle(builtin).value().unwrap().clone();
        assert!(first.ptr_eq(&second), "{builtin} re-resolved");
    }
    assert_eq!(
        host.global_lookups(),
        Builtin::ALL.len(),
        "each built-in must be looked up exactly once"
    );
}

#[test]
fn missing_builtin_fails_on_use_not_on_load() {
    let host = MemoryHost::node().without(Builtin::Proxy);
    let bindings = HostBindings::new(host);

    let handles = bindings.registry().handles();
    assert_eq!(handles.missing(), vec![Builtin::Proxy]);

    let err = handles.proxy().value().unwrap_err();
    assert!(
        matches!(err, TypeBindingError::MissingCapability { builtin: Builtin::Proxy }),
        "got: {err}"
    );
    assert!(err.to_string().contains("required host capability missing"));

    assert!(handles.request().value().is_ok());
}

#[test]
fn required_missing_builtin_is_not_fatal() {
    let host = MemoryHost::new().with_builtin(Builtin::Error);
    let bindings = HostBindings::with_config(host, BindingConfig::fetch_interception());

    let handles = bindings.registry().handles();
    assert!(handles.error().is_present());
    assert_eq!(handles.missing().len(), Builtin::ALL.len() - 1);
}

#[test]
fn unrelated_globals_are_ignored() {
    let host = MemoryHost::new()
        .with_global("fetch")
        .with_global("WebSocket");
    let bindings = HostBindings::new(host);
    assert_eq!(bindings.registry().handles().missing().len(), Builtin::ALL.len());
}

// ── Origin resolution ──────────────────────────────────────────────

#[test]
fn node_host_has_empty_origin() {
    let bindings = HostBindings::new(MemoryHost::node());
    assert_eq!(bindings.current_origin_string(), "");

    let origin = bindings.current_origin();
    assert_eq!(origin, Origin::Unspecified);
    assert!(origin.is_empty());
    assert!(origin.matches(&Url::parse("https://nym.com/api").unwrap()));
}

#[test]
fn https_origin_without_port() {
    let bindings = HostBindings::new(MemoryHost::browser("https://example.com"));
    let origin = bindings.current_origin();
    assert_eq!(origin.scheme(), Some("https"));
    assert_eq!(origin.host(), Some("example.com"));
    assert_eq!(origin.port(), None);
}

#[test]
fn http_origin_with_port() {
    let bindings = HostBindings::new(MemoryHost::browser("http://localhost:8080"));
    let origin = bindings.current_origin();
    assert_eq!(origin.scheme(), Some("http"));
    assert_eq!(origin.host(), Some("localhost"));
    assert_eq!(origin.port(), Some(8080));
}

#[test]
fn origin_round_trips() {
    for s in ["https://example.com", "http://localhost:8080", "https://10.0.0.1:4433"] {
        let bindings = HostBindings::new(MemoryHost::browser(s));
        let origin = bindings.current_origin();
        assert_eq!(origin.ascii_serialization(), s);
        assert_eq!(bindings.current_origin_string(), s);
    }
}

#[test]
fn same_origin_screening() {
    let bindings = HostBindings::new(MemoryHost::browser("https://app.example.com"));
    let origin = bindings.current_origin();
    assert!(origin.matches(&Url::parse("https://app.example.com/v1/data").unwrap()));
    assert!(!origin.matches(&Url::parse("https://example.com/").unwrap()));
}

#[test]
fn sandboxed_frame_is_opaque() {
    let bindings = HostBindings::new(MemoryHost::browser("null"));
    let origin = bindings.current_origin();
    assert_eq!(origin, Origin::Opaque);
    assert!(!origin.matches(&Url::parse("https://example.com/").unwrap()));
}

#[test]
#[should_panic(expected = "could not obtain origin")]
fn whitespace_origin_aborts() {
    let bindings = HostBindings::new(MemoryHost::browser("   "));
    bindings.current_origin();
}

#[test]
#[should_panic(expected = "could not obtain origin")]
fn control_character_origin_aborts() {
    let bindings = HostBindings::new(MemoryHost::browser("\u{1}\u{1b}"));
    bindings.current_origin();
}

#[test]
fn origin_resolution_does_not_touch_registry() {
    let host = MemoryHost::browser("https://example.com");
    let bindings = HostBindings::new(host.clone());
    bindings.current_origin();
    assert_eq!(host.global_lookups(), 0);
}
