pub mod report;

use std::path::PathBuf;

use clap::Parser;
use ciphr_common::protocol::{Protocol, ReportMode};

#[derive(Parser)]
#[command(name = "ciphr", version)]
#[command(about = "Reports deprecated TLS protocols and weak ciphers from nmap ssl-enum-ciphers output.")]
pub struct CommandLine {
    /// Scan output to read. Reads stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Report layout: consolidated or grouped
    #[arg(short, long, default_value_t = ReportMode::Consolidated, conflicts_with = "grouped")]
    pub mode: ReportMode,

    /// Shorthand for `--mode grouped`
    #[arg(short, long)]
    pub grouped: bool,

    /// Comma-separated protocols to track (sslv2, sslv3, tls1.0, tls1.1). Defaults to all
    #[arg(short, long, value_delimiter = ',')]
    pub protocols: Vec<Protocol>,

    /// Raise log verbosity, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print the report
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn mode(&self) -> ReportMode {
        if self.grouped {
            ReportMode::Grouped
        } else {
            self.mode
        }
    }
}
