use tracing::debug;

use crate::protocol::{Protocol, ReportMode};

pub struct Config {
    /// Layout used by both the protocol and the cipher section of the report.
    pub mode: ReportMode,
    /// Protocols whose `| <name>:` flag lines are tracked, in declared order.
    ///
    /// Never empty and never contains duplicates once built through [`Config::new`].
    pub protocols: Vec<Protocol>,
    /// Suppresses the status header and summary. The report itself is always written.
    pub quiet: bool,
}

impl Config {
    pub fn new(mode: ReportMode, protocols: &[Protocol], quiet: bool) -> Self {
        Self {
            mode,
            protocols: normalize_protocols(protocols),
            quiet,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(ReportMode::default(), &[], false)
    }
}

/// Deduplicates and reorders a user supplied protocol list into declared order.
/// An empty list selects every tracked protocol.
fn normalize_protocols(requested: &[Protocol]) -> Vec<Protocol> {
    if requested.is_empty() {
        return Protocol::ALL.to_vec();
    }

    let selected: Vec<Protocol> = Protocol::ALL
        .iter()
        .copied()
        .filter(|protocol| requested.contains(protocol))
        .collect();

    if selected.len() != requested.len() {
        debug!("Ignoring duplicate protocols in {:?}", requested);
    }
    selected
}
