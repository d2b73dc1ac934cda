use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use tracing::info;

use ciphr_common::{CiphrError, config::Config};
use ciphr_core::accumulator::Findings;
use ciphr_core::report;

use crate::terminal::{colors, print};

pub fn report(input: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();
    print::header("analyzing scan output", cfg.quiet);

    let findings: Findings = match input {
        Some(path) if path != Path::new("-") => {
            info!("Reading scan output from {}", path.display());
            let file = File::open(path).map_err(|source| CiphrError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            ciphr_core::analyze(BufReader::new(file), cfg)?
        }
        _ => {
            info!("Reading scan output from stdin");
            ciphr_core::analyze(io::stdin().lock(), cfg)?
        }
    };

    let rendered: String = report::render_to_string(&findings, cfg.mode);
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|_| stdout.flush())
        .context("failed to write report")?;

    print_summary(&findings, start_time.elapsed(), cfg);
    Ok(())
}

fn print_summary(findings: &Findings, total_time: Duration, cfg: &Config) {
    if cfg.quiet {
        return;
    }

    let lines: ColoredString = format!("{} lines", findings.lines_read()).bold().yellow();
    let services: ColoredString = format!("{} affected services", findings.affected_services().len())
        .bold()
        .red();
    let ciphers: ColoredString = format!("{} weak ciphers", findings.hosts_by_cipher().len())
        .bold()
        .red();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString = format!("Read {lines} in {total_time}: {services}, {ciphers}")
        .color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output.to_string());
}
