//! # Service Key
//!
//! Identifies one scanned service as `"<host>:<port>"`.
//!
//! Keys are opaque strings: they compare and sort lexicographically, so
//! `10.0.0.1:8443` sorts before `10.0.0.1:995`.

use std::fmt;

/// Port used for a host block that has not seen an open-port line yet.
pub const UNKNOWN_PORT: &str = "N/A";

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostPortKey(String);

impl HostPortKey {
    pub fn new(host: &str, port: &str) -> Self {
        Self(format!("{host}:{port}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostPortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HostPortKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
