//! Turns `ssl-enum-ciphers` scan output into a deprecated protocol and weak
//! cipher report.
//!
//! The pipeline runs in two phases. [`parser::ScanParser`] streams lines into an
//! [`accumulator::Accumulator`]; once the input is exhausted the accumulator is
//! frozen into [`accumulator::Findings`], which [`classify`] groups and
//! [`report`] lays out.

pub mod accumulator;
pub mod classify;
pub mod parser;
pub mod report;

use std::io::BufRead;

use ciphr_common::{CiphrError, config::Config};

use accumulator::{Accumulator, Findings};
use parser::ScanParser;

/// Runs the streaming phase over `reader` and returns the frozen findings.
pub fn analyze<R: BufRead>(reader: R, cfg: &Config) -> Result<Findings, CiphrError> {
    let mut parser = ScanParser::new(&cfg.protocols);
    let mut acc = Accumulator::new(&cfg.protocols);
    parser.consume(reader, &mut acc)?;
    Ok(acc.finish())
}

/// Convenience wrapper over [`analyze`] and [`report::render`] for in-memory input.
pub fn report_for(input: &str, cfg: &Config) -> Result<String, CiphrError> {
    let findings = analyze(input.as_bytes(), cfg)?;
    Ok(report::render_to_string(&findings, cfg.mode))
}
