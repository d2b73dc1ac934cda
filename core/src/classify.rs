//! Finalize-time grouping of [`Findings`].
//!
//! Consolidated views merge every protocol (or cipher) into one list. Grouped
//! views split protocol findings into categories and cipher findings per service.
//! All output is sorted, and categories follow the declared protocol order.

use std::collections::BTreeSet;
use std::fmt;

use ciphr_common::protocol::Protocol;
use ciphr_common::target::HostPortKey;

use crate::accumulator::Findings;

/// All services offering any tracked protocol, under a combined label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolSummary {
    /// Names of the protocols with at least one member, sorted, joined by `" & "`.
    pub label: String,
    pub hosts: Vec<HostPortKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherSummary {
    pub ciphers: Vec<String>,
    pub hosts: Vec<HostPortKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Both(Protocol, Protocol),
    Only(Protocol),
    Supports(Protocol),
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Both(first, second) => write!(f, "Supporting {first} and {second}"),
            CategoryKind::Only(protocol) => write!(f, "Supporting {protocol} only"),
            CategoryKind::Supports(protocol) => write!(f, "Supporting {protocol}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub kind: CategoryKind,
    pub hosts: Vec<HostPortKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCiphers {
    pub key: HostPortKey,
    pub ciphers: Vec<String>,
}

pub fn consolidate_protocols(findings: &Findings) -> ProtocolSummary {
    let mut names: Vec<&str> = Vec::new();
    let mut hosts: BTreeSet<&HostPortKey> = BTreeSet::new();

    for protocol in findings.tracked() {
        let mut offered = findings.hosts_for(protocol).peekable();
        if offered.peek().is_some() {
            names.push(protocol.scan_name());
        }
        hosts.extend(offered);
    }
    names.sort_unstable();

    ProtocolSummary {
        label: names.join(" & "),
        hosts: hosts.into_iter().cloned().collect(),
    }
}

pub fn consolidate_ciphers(findings: &Findings) -> CipherSummary {
    let pairs = findings.weak_ciphers();
    let ciphers: BTreeSet<&str> = pairs.iter().map(|(_, cipher)| cipher.as_str()).collect();
    let hosts: BTreeSet<&HostPortKey> = pairs.iter().map(|(key, _)| key).collect();

    CipherSummary {
        ciphers: ciphers.into_iter().map(str::to_string).collect(),
        hosts: hosts.into_iter().cloned().collect(),
    }
}

/// Overlap categories when exactly two protocols are tracked, one category
/// per protocol otherwise.
pub fn group_protocols(findings: &Findings) -> Vec<Category> {
    let tracked: Vec<Protocol> = findings.tracked().collect();

    match tracked.as_slice() {
        [first, second] => overlap_categories(findings, *first, *second),
        _ => tracked
            .into_iter()
            .map(|protocol| Category {
                kind: CategoryKind::Supports(protocol),
                hosts: findings.hosts_for(protocol).cloned().collect(),
            })
            .collect(),
    }
}

fn overlap_categories(findings: &Findings, first: Protocol, second: Protocol) -> Vec<Category> {
    let empty = BTreeSet::new();
    let a = findings.protocol_set(first).unwrap_or(&empty);
    let b = findings.protocol_set(second).unwrap_or(&empty);

    vec![
        Category {
            kind: CategoryKind::Both(first, second),
            hosts: a.intersection(b).cloned().collect(),
        },
        Category {
            kind: CategoryKind::Only(first),
            hosts: a.difference(b).cloned().collect(),
        },
        Category {
            kind: CategoryKind::Only(second),
            hosts: b.difference(a).cloned().collect(),
        },
    ]
}

pub fn group_ciphers(findings: &Findings) -> Vec<HostCiphers> {
    findings
        .ciphers_by_host()
        .into_iter()
        .map(|(key, ciphers)| HostCiphers {
            key: key.clone(),
            ciphers: ciphers.into_iter().map(str::to_string).collect(),
        })
        .collect()
}
