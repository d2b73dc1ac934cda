//! Plain-text report layout.
//!
//! The report has a protocol part and a cipher part, separated by a blank line,
//! both laid out in the same [`ReportMode`].

use std::fmt::{self, Write};

use ciphr_common::protocol::ReportMode;
use ciphr_common::target::HostPortKey;

use crate::accumulator::Findings;
use crate::classify::{self, Category, HostCiphers};

mod columns;

pub use columns::{FIELD_WIDTH, column_count, write_columns};

/// Rule length under grouped-mode section headers.
pub const GROUPED_RULE_WIDTH: usize = 40;

const NONE_FOUND: &str = "  none found";

pub fn render<W: Write>(out: &mut W, findings: &Findings, mode: ReportMode) -> fmt::Result {
    match mode {
        ReportMode::Consolidated => {
            consolidated_protocols(out, findings)?;
            out.write_char('\n')?;
            consolidated_ciphers(out, findings)
        }
        ReportMode::Grouped => {
            grouped_protocols(out, &classify::group_protocols(findings))?;
            out.write_char('\n')?;
            grouped_ciphers(out, &classify::group_ciphers(findings))
        }
    }
}

pub fn render_to_string(findings: &Findings, mode: ReportMode) -> String {
    let mut out = String::new();
    let _ = render(&mut out, findings, mode);
    out
}

fn header<W: Write>(out: &mut W, title: &str, rule_width: usize) -> fmt::Result {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(rule_width))
}

fn consolidated_header<W: Write>(out: &mut W, title: &str) -> fmt::Result {
    header(out, title, title.chars().count())
}

fn consolidated_protocols<W: Write>(out: &mut W, findings: &Findings) -> fmt::Result {
    let summary = classify::consolidate_protocols(findings);
    if summary.hosts.is_empty() {
        return writeln!(out, "No deprecated protocols found.");
    }

    consolidated_header(out, &format!("Deprecated protocols supported ({})", summary.label))?;
    write_columns(out, &summary.hosts)
}

fn consolidated_ciphers<W: Write>(out: &mut W, findings: &Findings) -> fmt::Result {
    let summary = classify::consolidate_ciphers(findings);
    if summary.ciphers.is_empty() {
        return writeln!(out, "No weak ciphers found.");
    }

    consolidated_header(out, "Weak ciphers supported")?;
    for cipher in &summary.ciphers {
        writeln!(out, "{cipher}")?;
    }
    out.write_char('\n')?;
    consolidated_header(out, "Hosts supporting weak ciphers")?;
    write_columns(out, &summary.hosts)
}

fn grouped_protocols<W: Write>(out: &mut W, categories: &[Category]) -> fmt::Result {
    for (idx, category) in categories.iter().enumerate() {
        if idx > 0 {
            out.write_char('\n')?;
        }
        header(out, &category.kind.to_string(), GROUPED_RULE_WIDTH)?;
        host_list_or_none(out, &category.hosts)?;
    }
    Ok(())
}

fn grouped_ciphers<W: Write>(out: &mut W, hosts: &[HostCiphers]) -> fmt::Result {
    header(out, "Weak ciphers by host", GROUPED_RULE_WIDTH)?;
    if hosts.is_empty() {
        return writeln!(out, "{NONE_FOUND}");
    }

    for host in hosts {
        writeln!(out, "{}", host.key)?;
        for cipher in &host.ciphers {
            writeln!(out, "    ({cipher})")?;
        }
    }
    Ok(())
}

fn host_list_or_none<W: Write>(out: &mut W, hosts: &[HostPortKey]) -> fmt::Result {
    if hosts.is_empty() {
        writeln!(out, "{NONE_FOUND}")
    } else {
        write_columns(out, hosts)
    }
}
