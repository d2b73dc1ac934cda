#![cfg(test)]

mod end_to_end;
mod properties;

use ciphr_common::config::Config;
use ciphr_common::protocol::{Protocol, ReportMode};

pub const SAMPLE_SCAN: &str = include_str!("../fixtures/ssl-enum-ciphers.txt");

pub fn config(mode: ReportMode, protocols: &[Protocol]) -> Config {
    Config::new(mode, protocols, true)
}
