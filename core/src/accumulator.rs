//! Finding storage for the streaming phase.
//!
//! [`Accumulator`] only grows while input is read. [`Accumulator::finish`]
//! consumes it and hands out read-only [`Findings`] for the reporting phase.

use std::collections::{BTreeMap, BTreeSet};

use ciphr_common::protocol::Protocol;
use ciphr_common::target::HostPortKey;
use tracing::trace;

type ProtocolSets = BTreeMap<Protocol, BTreeSet<HostPortKey>>;

pub struct Accumulator {
    protocols: ProtocolSets,
    weak_ciphers: BTreeSet<(HostPortKey, String)>,
    lines_read: usize,
}

impl Accumulator {
    /// Starts with one empty set per tracked protocol.
    pub fn new(tracked: &[Protocol]) -> Self {
        Self {
            protocols: tracked.iter().map(|p| (*p, BTreeSet::new())).collect(),
            weak_ciphers: BTreeSet::new(),
            lines_read: 0,
        }
    }

    pub fn record_protocol(&mut self, protocol: Protocol, key: HostPortKey) {
        trace!("{key} offers {protocol}");
        self.protocols.entry(protocol).or_default().insert(key);
    }

    pub fn record_cipher(&mut self, key: HostPortKey, cipher: &str) {
        trace!("{key} offers weak cipher {cipher}");
        self.weak_ciphers.insert((key, cipher.to_string()));
    }

    pub(crate) fn set_lines_read(&mut self, lines_read: usize) {
        self.lines_read = lines_read;
    }

    pub fn finish(self) -> Findings {
        Findings {
            protocols: self.protocols,
            weak_ciphers: self.weak_ciphers,
            lines_read: self.lines_read,
        }
    }
}

/// Everything observed over one complete pass of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Findings {
    protocols: ProtocolSets,
    weak_ciphers: BTreeSet<(HostPortKey, String)>,
    lines_read: usize,
}

impl Findings {
    /// Tracked protocols in declared order.
    pub fn tracked(&self) -> impl Iterator<Item = Protocol> + '_ {
        self.protocols.keys().copied()
    }

    /// Services that offered `protocol`, sorted. Empty for untracked protocols.
    pub fn hosts_for(&self, protocol: Protocol) -> impl Iterator<Item = &HostPortKey> {
        self.protocols.get(&protocol).into_iter().flatten()
    }

    pub(crate) fn protocol_set(&self, protocol: Protocol) -> Option<&BTreeSet<HostPortKey>> {
        self.protocols.get(&protocol)
    }

    /// Deduplicated `(service, cipher)` pairs, sorted by service then cipher.
    pub fn weak_ciphers(&self) -> &BTreeSet<(HostPortKey, String)> {
        &self.weak_ciphers
    }

    pub fn ciphers_by_host(&self) -> BTreeMap<&HostPortKey, BTreeSet<&str>> {
        let mut view: BTreeMap<&HostPortKey, BTreeSet<&str>> = BTreeMap::new();
        for (key, cipher) in &self.weak_ciphers {
            view.entry(key).or_default().insert(cipher.as_str());
        }
        view
    }

    pub fn hosts_by_cipher(&self) -> BTreeMap<&str, BTreeSet<&HostPortKey>> {
        let mut view: BTreeMap<&str, BTreeSet<&HostPortKey>> = BTreeMap::new();
        for (key, cipher) in &self.weak_ciphers {
            view.entry(cipher.as_str()).or_default().insert(key);
        }
        view
    }

    /// Distinct services with at least one finding of either kind.
    pub fn affected_services(&self) -> BTreeSet<&HostPortKey> {
        self.protocols
            .values()
            .flatten()
            .chain(self.weak_ciphers.iter().map(|(key, _)| key))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.weak_ciphers.is_empty() && self.protocols.values().all(BTreeSet::is_empty)
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}
