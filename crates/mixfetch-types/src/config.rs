//! Binding layer configuration.
//!
//! Supplied by the embedding client as JSON. All fields are optional and
//! accept camelCase (the JS side) or snake_case names. Unknown fields are
//! ignored.

use serde::{Deserialize, Serialize};

use crate::builtin::Builtin;

/// Settings for the host binding layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingConfig {
    /// Cache the parsed origin after the first successful resolution.
    #[serde(default = "default_cache_origin", alias = "cache_origin")]
    pub cache_origin: bool,

    /// Built-ins whose absence is reported as a warning at resolution time.
    /// Absence still only fails when the handle is used.
    #[serde(default, alias = "required_builtins")]
    pub required_builtins: Vec<Builtin>,
}

fn default_cache_origin() -> bool {
    true
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            cache_origin: default_cache_origin(),
            required_builtins: Vec::new(),
        }
    }
}

impl BindingConfig {
    /// Parse a config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Require every built-in the fetch interception path uses.
    pub fn fetch_interception() -> Self {
        Self {
            required_builtins: Builtin::ALL.to_vec(),
            ..Self::default()
        }
    }

    /// Whether `builtin` is listed as required.
    pub fn is_required(&self, builtin: Builtin) -> bool {
        self.required_builtins.contains(&builtin)
    }
}
