//! Per-line tokenizer for `ssl-enum-ciphers` output.
//!
//! Everything here looks at a single line, except for the cipher block flag:
//! a line containing `ciphers:` opens the block and a line containing
//! `compressors:` closes it. Both delimiter lines belong to the block.

use ciphr_common::protocol::Protocol;

const HOST_HEADER: &str = "Nmap scan report for";
const CIPHERS_OPEN: &str = "ciphers:";
const CIPHERS_CLOSE: &str = "compressors:";
const TOP_GRADE: &str = "A";
const EXPERIMENTAL_GRADE: &str = "experimental";

/// A cipher table row graded below the top tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherRow<'a> {
    pub name: &'a str,
    pub grade: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    NewHost(&'a str),
    OpenPort(&'a str),
    ProtocolFlag(Protocol),
    CipherRow(CipherRow<'a>),
    Ignore,
}

pub struct LineClassifier {
    tracked: Vec<Protocol>,
    in_cipher_block: bool,
}

impl LineClassifier {
    pub fn new(tracked: &[Protocol]) -> Self {
        Self {
            tracked: tracked.to_vec(),
            in_cipher_block: false,
        }
    }

    pub fn in_cipher_block(&self) -> bool {
        self.in_cipher_block
    }

    pub fn classify<'a>(&mut self, line: &'a str) -> LineKind<'a> {
        if line.contains(CIPHERS_OPEN) {
            self.in_cipher_block = true;
        }
        let inside = self.in_cipher_block;
        if line.contains(CIPHERS_CLOSE) {
            self.in_cipher_block = false;
        }

        if let Some(host) = new_host(line) {
            return LineKind::NewHost(host);
        }
        if let Some(port) = open_port(line) {
            return LineKind::OpenPort(port);
        }
        if let Some(protocol) = self.protocol_flag(line) {
            return LineKind::ProtocolFlag(protocol);
        }
        if inside {
            if let Some(row) = weak_cipher_row(line) {
                return LineKind::CipherRow(row);
            }
        }
        LineKind::Ignore
    }

    fn protocol_flag(&self, line: &str) -> Option<Protocol> {
        let rest = line.strip_prefix('|')?;
        let name = rest.trim_start();
        if name.len() == rest.len() {
            return None;
        }
        self.tracked.iter().copied().find(|protocol| {
            name.strip_prefix(protocol.scan_name())
                .is_some_and(|tail| tail.starts_with(':'))
        })
    }
}

/// `Nmap scan report for <host>` or `Nmap scan report for <name> (<ip>)`.
fn new_host(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(HOST_HEADER)?;
    let token = rest.split_whitespace().last()?;
    let host = token.trim_start_matches('(').trim_end_matches(')');
    (!host.is_empty()).then_some(host)
}

/// `<digits>/tcp<whitespace>open...`
fn open_port(line: &str) -> Option<&str> {
    let (port, rest) = line.split_once("/tcp")?;
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let state = rest.trim_start();
    if state.len() == rest.len() || !state.starts_with("open") {
        return None;
    }
    Some(port)
}

/// `| <name> ... - <grade>` where grade is neither `A` nor `experimental`.
fn weak_cipher_row(line: &str) -> Option<CipherRow<'_>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (name, dash, grade) = match fields.as_slice() {
        [_, name, .., dash, grade] => (*name, *dash, *grade),
        [_, dash, grade] => (*dash, *dash, *grade),
        _ => return None,
    };
    if dash != "-" || grade == TOP_GRADE || grade == EXPERIMENTAL_GRADE {
        return None;
    }
    Some(CipherRow { name, grade })
}
