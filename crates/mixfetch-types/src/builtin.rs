//! Host built-in identifiers.
//!
//! [`Builtin`] enumerates every constructor or utility object the client
//! reads from the host's global namespace. The set is closed: anything the
//! request-handling code needs from the host must be listed here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A host-provided built-in, named by its standard global identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Builtin {
    /// `Error` constructor.
    Error,
    /// `Promise` constructor.
    Promise,
    /// `Reflect` utility object.
    Reflect,
    /// `Object` constructor.
    Object,
    /// Fetch API `Response` constructor.
    Response,
    /// Fetch API `Request` constructor.
    Request,
    /// `Proxy` constructor.
    Proxy,
    /// Fetch API `Headers` constructor.
    Headers,
}

impl Builtin {
    /// Every built-in, in resolution order.
    pub const ALL: [Builtin; 8] = [
        Builtin::Error,
        Builtin::Promise,
        Builtin::Reflect,
        Builtin::Object,
        Builtin::Response,
        Builtin::Request,
        Builtin::Proxy,
        Builtin::Headers,
    ];

    /// The identifier this built-in is published under on the host global.
    pub const fn global_name(self) -> &'static str {
        match self {
            Builtin::Error => "Error",
            Builtin::Promise => "Promise",
            Builtin::Reflect => "Reflect",
            Builtin::Object => "Object",
            Builtin::Response => "Response",
            Builtin::Request => "Request",
            Builtin::Proxy => "Proxy",
            Builtin::Headers => "Headers",
        }
    }

    /// Position of this built-in within [`Builtin::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.global_name())
    }
}

impl FromStr for Builtin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Builtin::ALL
            .into_iter()
            .find(|b| b.global_name() == s)
            .ok_or_else(|| format!("unknown host built-in: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, builtin) in Builtin::ALL.iter().enumerate() {
            assert_eq!(builtin.index(), i);
        }
    }

    #[test]
    fn global_names_are_unique() {
        let mut names: Vec<_> = Builtin::ALL.iter().map(|b| b.global_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Builtin::ALL.len());
    }

    #[test]
    fn from_str_accepts_global_names() {
        assert_eq!("Headers".parse::<Builtin>().unwrap(), Builtin::Headers);
        assert_eq!("Proxy".parse::<Builtin>().unwrap(), Builtin::Proxy);
    }

    #[test]
    fn from_str_is_case_sensitive() {
        let err = "headers".parse::<Builtin>().unwrap_err();
        assert!(err.contains("headers"));
    }

    #[test]
    fn display_matches_global_name() {
        assert_eq!(Builtin::Request.to_string(), "Request");
    }

    #[test]
    fn serde_uses_global_name() {
        let json = serde_json::to_string(&Builtin::Response).unwrap();
        assert_eq!(json, "\"Response\"");
        let back: Builtin = serde_json::from_str("\"Promise\"").unwrap();
        assert_eq!(back, Builtin::Promise);
    }
}
