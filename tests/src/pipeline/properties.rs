use std::collections::BTreeSet;
use std::fmt::Write;

use ciphr_common::protocol::{Protocol, ReportMode};
use ciphr_common::target::HostPortKey;
use ciphr_core::classify;
use ciphr_core::report::{FIELD_WIDTH, column_count};

use super::{SAMPLE_SCAN, config};

/// One host block per service, each offering `protocol` on port 443.
fn scan_with_hosts(count: usize, protocol: &str) -> String {
    let mut scan = String::new();
    for i in 0..count {
        let _ = writeln!(scan, "Nmap scan report for 10.1.{}.{}", i / 256, i % 256);
        let _ = writeln!(scan, "443/tcp open  https");
        let _ = writeln!(scan, "|   {protocol}: ");
    }
    scan
}

#[test]
fn rendering_is_deterministic() -> anyhow::Result<()> {
    for mode in [ReportMode::Consolidated, ReportMode::Grouped] {
        let cfg = config(mode, &[]);
        let first = ciphr_core::report_for(SAMPLE_SCAN, &cfg)?;
        let second = ciphr_core::report_for(SAMPLE_SCAN, &cfg)?;
        assert_eq!(first, second);
    }
    Ok(())
}

#[test]
fn reported_services_come_from_qualifying_blocks() -> anyhow::Result<()> {
    let cfg = config(ReportMode::Consolidated, &[]);
    let findings = ciphr_core::analyze(SAMPLE_SCAN.as_bytes(), &cfg)?;

    let affected: Vec<&str> = findings
        .affected_services()
        .into_iter()
        .map(HostPortKey::as_str)
        .collect();
    assert_eq!(affected, vec!["192.0.2.10:443", "192.0.2.20:25"]);

    // 993 only offers A and experimental ciphers on TLSv1.2; 8443 is closed.
    let report = ciphr_core::report_for(SAMPLE_SCAN, &cfg)?;
    assert!(!report.contains(":993"));
    assert!(!report.contains(":8443"));
    Ok(())
}

#[test]
fn overlap_categories_are_disjoint_and_complete() -> anyhow::Result<()> {
    let input = format!(
        "{}{}Nmap scan report for 10.9.9.9\n443/tcp open  https\n|   TLSv1.0: \n|   TLSv1.1: \n\
         Nmap scan report for 10.8.8.8\n443/tcp open  https\n|   TLSv1.0: \n",
        scan_with_hosts(3, "TLSv1.0"),
        scan_with_hosts(5, "TLSv1.1"),
    );
    let cfg = config(ReportMode::Grouped, &[Protocol::Tls10, Protocol::Tls11]);
    let findings = ciphr_core::analyze(input.as_bytes(), &cfg)?;
    let categories = classify::group_protocols(&findings);
    assert_eq!(categories.len(), 3);

    let mut seen: BTreeSet<&HostPortKey> = BTreeSet::new();
    for category in &categories {
        let mut sorted = category.hosts.clone();
        sorted.sort();
        assert_eq!(category.hosts, sorted);
        for host in &category.hosts {
            assert!(seen.insert(host), "{host} is in more than one category");
        }
    }

    let union: BTreeSet<&HostPortKey> = findings
        .hosts_for(Protocol::Tls10)
        .chain(findings.hosts_for(Protocol::Tls11))
        .collect();
    assert_eq!(seen, union);

    // 10.1.0.0-2 and 10.9.9.9 offer both, 10.8.8.8 only TLSv1.0, 10.1.0.3-4 only TLSv1.1.
    let sizes: Vec<usize> = categories.iter().map(|c| c.hosts.len()).collect();
    assert_eq!(sizes, vec![4, 1, 2]);
    assert_eq!(categories[1].hosts[0].as_str(), "10.8.8.8:443");
    Ok(())
}

#[test]
fn column_breakpoints_in_rendered_report() -> anyhow::Result<()> {
    for (count, columns) in [(11, 2), (31, 3), (10, 1)] {
        assert_eq!(column_count(count), columns);

        let cfg = config(ReportMode::Consolidated, &[Protocol::Ssl3]);
        let report = ciphr_core::report_for(&scan_with_hosts(count, "SSLv3"), &cfg)?;
        let first_row = report.lines().nth(2).unwrap_or_default();
        assert_eq!(first_row.len(), FIELD_WIDTH * columns, "{count} services");
    }
    Ok(())
}

#[test]
fn cipher_grades_and_duplicates() -> anyhow::Result<()> {
    let input = "\
Nmap scan report for 10.0.0.1
443/tcp open  https
|   TLSv1.2: 
|     ciphers: 
|       TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256 (secp256r1) - A
|       TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256 (secp256r1) - experimental
|       TLS_RSA_WITH_AES_128_CBC_SHA (rsa 1024) - B
|       TLS_RSA_WITH_AES_128_CBC_SHA (rsa 1024) - B
|       TLS_RSA_WITH_RC4_128_SHA (rsa 2048) - C
|     compressors: 
|   TLSv1.1: 
|     ciphers: 
|       TLS_RSA_WITH_AES_128_CBC_SHA (rsa 1024) - B
|     compressors: 
";
    let cfg = config(ReportMode::Grouped, &[]);
    let findings = ciphr_core::analyze(input.as_bytes(), &cfg)?;

    let ciphers: Vec<&str> = findings
        .weak_ciphers()
        .iter()
        .map(|(_, cipher)| cipher.as_str())
        .collect();
    assert_eq!(ciphers, vec!["TLS_RSA_WITH_AES_128_CBC_SHA", "TLS_RSA_WITH_RC4_128_SHA"]);

    let report = ciphr_core::report_for(input, &cfg)?;
    assert_eq!(report.matches("(TLS_RSA_WITH_AES_128_CBC_SHA)").count(), 1);
    assert!(!report.contains("GCM_SHA256"));
    assert!(!report.contains("CHACHA20"));
    Ok(())
}
