use ciphr_common::protocol::{Protocol, ReportMode};
use ciphr_core::report::GROUPED_RULE_WIDTH;

use super::{SAMPLE_SCAN, config};

fn cell(key: &str) -> String {
    format!("{key:<24}")
}

#[test]
fn single_tls10_service_consolidated() -> anyhow::Result<()> {
    let input = "\
Nmap scan report for 203.0.113.5
PORT    STATE SERVICE
443/tcp open  https
| ssl-enum-ciphers: 
|   TLSv1.0: 
|     ciphers: 
|       TLS_RSA_WITH_RC4_128_SHA (rsa 2048) - C
|     compressors: 
|       NULL
|_  least strength: C
";
    let cfg = config(ReportMode::Consolidated, &[]);
    let report = ciphr_core::report_for(input, &cfg)?;

    let title = "Deprecated protocols supported (TLSv1.0)";
    let expected = format!(
        "{title}\n{}\n{}\n\n\
         Weak ciphers supported\n----------------------\nTLS_RSA_WITH_RC4_128_SHA\n\n\
         Hosts supporting weak ciphers\n-----------------------------\n{}\n",
        "-".repeat(title.len()),
        cell("203.0.113.5:443"),
        cell("203.0.113.5:443"),
    );
    assert_eq!(report, expected);
    assert_eq!(report.matches("TLS_RSA_WITH_RC4_128_SHA").count(), 1);
    Ok(())
}

#[test]
fn sample_scan_consolidated() -> anyhow::Result<()> {
    let cfg = config(ReportMode::Consolidated, &[]);
    let report = ciphr_core::report_for(SAMPLE_SCAN, &cfg)?;

    let title = "Deprecated protocols supported (SSLv3 & TLSv1.0 & TLSv1.1)";
    let expected = format!(
        "{title}\n{}\n{}\n{}\n\n\
         Weak ciphers supported\n----------------------\n\
         TLS_RSA_WITH_3DES_EDE_CBC_SHA\n\
         TLS_RSA_WITH_AES_128_CBC_SHA\n\
         TLS_RSA_WITH_RC4_128_MD5\n\
         TLS_RSA_WITH_RC4_128_SHA\n\n\
         Hosts supporting weak ciphers\n-----------------------------\n{}\n{}\n",
        "-".repeat(title.len()),
        cell("192.0.2.10:443"),
        cell("192.0.2.20:25"),
        cell("192.0.2.10:443"),
        cell("192.0.2.20:25"),
    );
    assert_eq!(report, expected);
    Ok(())
}

#[test]
fn sample_scan_grouped_two_protocols() -> anyhow::Result<()> {
    let cfg = config(ReportMode::Grouped, &[Protocol::Tls10, Protocol::Tls11]);
    let report = ciphr_core::report_for(SAMPLE_SCAN, &cfg)?;

    let rule = "-".repeat(GROUPED_RULE_WIDTH);
    let expected = format!(
        "Supporting TLSv1.0 and TLSv1.1\n{rule}\n{}\n\n\
         Supporting TLSv1.0 only\n{rule}\n{}\n\n\
         Supporting TLSv1.1 only\n{rule}\n  none found\n\n\
         Weak ciphers by host\n{rule}\n\
         192.0.2.10:443\n\
         \x20   (TLS_RSA_WITH_3DES_EDE_CBC_SHA)\n\
         \x20   (TLS_RSA_WITH_AES_128_CBC_SHA)\n\
         \x20   (TLS_RSA_WITH_RC4_128_SHA)\n\
         192.0.2.20:25\n\
         \x20   (TLS_RSA_WITH_RC4_128_MD5)\n",
        cell("192.0.2.10:443"),
        cell("192.0.2.20:25"),
    );
    assert_eq!(report, expected);
    Ok(())
}

#[test]
fn sample_scan_grouped_all_protocols() -> anyhow::Result<()> {
    let cfg = config(ReportMode::Grouped, &[]);
    let report = ciphr_core::report_for(SAMPLE_SCAN, &cfg)?;

    let titles: Vec<&str> = report
        .lines()
        .filter(|line| line.starts_with("Supporting"))
        .collect();
    assert_eq!(
        titles,
        vec![
            "Supporting SSLv2",
            "Supporting SSLv3",
            "Supporting TLSv1.0",
            "Supporting TLSv1.1",
        ]
    );
    assert!(report.starts_with(&format!(
        "Supporting SSLv2\n{}\n  none found\n",
        "-".repeat(GROUPED_RULE_WIDTH)
    )));
    Ok(())
}

#[test]
fn empty_input_reports_nothing_found() -> anyhow::Result<()> {
    let cfg = config(ReportMode::Consolidated, &[]);
    let report = ciphr_core::report_for("", &cfg)?;
    assert_eq!(report, "No deprecated protocols found.\n\nNo weak ciphers found.\n");
    Ok(())
}
