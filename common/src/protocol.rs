//! # Protocol Model
//!
//! The deprecated transport-security versions the parser tracks, and the two
//! report layouts.

use std::fmt;
use std::str::FromStr;

use crate::error::CiphrError;

/// A deprecated protocol version as it is spelled in `ssl-enum-ciphers` output.
///
/// Variant order is the declared order: report sections are always emitted in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Protocol {
    Ssl2,
    Ssl3,
    Tls10,
    Tls11,
}

impl Protocol {
    pub const ALL: [Protocol; 4] = [
        Protocol::Ssl2,
        Protocol::Ssl3,
        Protocol::Tls10,
        Protocol::Tls11,
    ];

    /// Name used by the scanner in its `| <name>:` lines.
    pub fn scan_name(self) -> &'static str {
        match self {
            Protocol::Ssl2 => "SSLv2",
            Protocol::Ssl3 => "SSLv3",
            Protocol::Tls10 => "TLSv1.0",
            Protocol::Tls11 => "TLSv1.1",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scan_name())
    }
}

impl FromStr for Protocol {
    type Err = CiphrError;

    /// Parses a protocol selector.
    ///
    /// Accepts the scanner spelling (`TLSv1.0`) as well as short forms
    /// (`tls1.0`, `tls10`, `sslv3`, `ssl3`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let compact: String = lower.chars().filter(|c| *c != '.' && *c != 'v').collect();

        match compact.as_str() {
            "ssl2" => Ok(Protocol::Ssl2),
            "ssl3" => Ok(Protocol::Ssl3),
            "tls1" | "tls10" => Ok(Protocol::Tls10),
            "tls11" => Ok(Protocol::Tls11),
            _ => Err(CiphrError::UnknownProtocol(s.to_string())),
        }
    }
}

/// Report layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportMode {
    /// One flat list of affected services per finding type.
    #[default]
    Consolidated,
    /// One section per category, and per-service cipher details.
    Grouped,
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportMode::Consolidated => f.write_str("consolidated"),
            ReportMode::Grouped => f.write_str("grouped"),
        }
    }
}

impl FromStr for ReportMode {
    type Err = CiphrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "consolidated" | "c" => Ok(ReportMode::Consolidated),
            "grouped" | "g" => Ok(ReportMode::Grouped),
            _ => Err(CiphrError::UnknownMode(s.to_string())),
        }
    }
}
