//! Streaming phase: classifies each line and feeds the result, tagged with the
//! current service key, into an [`Accumulator`].

use std::io::BufRead;

use ciphr_common::CiphrError;
use ciphr_common::protocol::Protocol;
use tracing::{debug, info, trace};

use crate::accumulator::Accumulator;

mod context;
mod line;

pub use context::ScanContext;
pub use line::{CipherRow, LineClassifier, LineKind};

pub struct ScanParser {
    classifier: LineClassifier,
    context: ScanContext,
    lines_read: usize,
}

impl ScanParser {
    pub fn new(tracked: &[Protocol]) -> Self {
        Self {
            classifier: LineClassifier::new(tracked),
            context: ScanContext::default(),
            lines_read: 0,
        }
    }

    /// Feeds one line (without its terminator) through the pipeline.
    pub fn feed(&mut self, line: &str, acc: &mut Accumulator) {
        self.lines_read += 1;

        match self.classifier.classify(line) {
            LineKind::NewHost(host) => {
                debug!("Entering host block for {host}");
                self.context.enter_host(host);
            }
            LineKind::OpenPort(port) => {
                if !self.context.open_port(port) {
                    debug!("Skipping open port {port} seen before any host");
                }
            }
            LineKind::ProtocolFlag(protocol) => match self.context.key() {
                Some(key) => acc.record_protocol(protocol, key),
                None => debug!("Skipping {protocol} flag seen before any host"),
            },
            LineKind::CipherRow(row) => match self.context.key() {
                Some(key) => acc.record_cipher(key, row.name),
                None => debug!("Skipping cipher {} seen before any host", row.name),
            },
            LineKind::Ignore => trace!("Ignoring line {}", self.lines_read),
        }
    }

    /// Reads `reader` to exhaustion, one line at a time.
    ///
    /// Lines are decoded lossily, so stray non-UTF-8 bytes only affect the line
    /// they appear on.
    pub fn consume<R: BufRead>(
        &mut self,
        mut reader: R,
        acc: &mut Accumulator,
    ) -> Result<(), CiphrError> {
        let mut buf: Vec<u8> = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| CiphrError::Read { source })?;
            if read == 0 {
                break;
            }

            let text = String::from_utf8_lossy(&buf);
            let line = text.trim_end_matches(['\n', '\r']);
            self.feed(line, acc);
        }

        info!("Parsed {} lines of scan output", self.lines_read);
        acc.set_lines_read(self.lines_read);
        Ok(())
    }
}
