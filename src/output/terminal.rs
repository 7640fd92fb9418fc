//! Terminal output formatting
//!
//! Renders a certificate as a boxed title followed by aligned
//! `Key : value` rows.

use crate::models::{CertificateInfo, ExpiryResult, Severity};
use console::style;

const KEY_WIDTH: usize = 12;
const TITLE: &str = "TLS Certificate";

/// Render a certificate and its expiry countdown as text
pub fn render_certificate(cert: &CertificateInfo, expiry: &ExpiryResult) -> String {
    let rows = [
        ("Host", cert.host().to_string()),
        ("Subject", cert.subject.clone()),
        ("SANs", cert.dns_names.join(", ")),
        ("Issuer", cert.issuer.clone()),
        ("Validity", format_validity(cert)),
        ("Expires In", format_expiry(expiry)),
        ("Serial", cert.serial.clone()),
        ("Version", format!("{} (X.509v{})", cert.version, cert.version)),
        ("Public Key", cert.public_key.clone()),
        ("Sig Alg", cert.signature_algorithm.clone()),
        ("Key Usage", join_or_none(&cert.key_usage)),
        ("Ext Usage", join_or_none(&cert.extended_key_usage)),
        ("BasicConstr", cert.basic_constraints.to_string()),
        ("SHA-256", cert.fingerprint_sha256.clone()),
    ];

    let mut output = render_title();
    for (key, value) in rows {
        output.push_str(&format!(
            "{}{}{}\n",
            style(format!("{:<width$}", key, width = KEY_WIDTH)).dim(),
            style(" : ").dim(),
            value
        ));
    }
    output
}

/// Print a certificate to stdout
pub fn print_certificate(cert: &CertificateInfo, expiry: &ExpiryResult) {
    print!("{}", render_certificate(cert, expiry));
}

fn render_title() -> String {
    let bar = "━".repeat(TITLE.chars().count() + 2);
    format!(
        "{}\n{} {} {}\n{}\n",
        style(format!("┏{}┓", bar)).cyan(),
        style("┃").cyan(),
        style(TITLE).cyan().bold(),
        style("┃").cyan(),
        style(format!("┗{}┛", bar)).cyan(),
    )
}

fn format_validity(cert: &CertificateInfo) -> String {
    format!(
        "{}  →  {}",
        cert.not_before.format("%Y-%m-%d %H:%M:%SZ"),
        cert.not_after.format("%Y-%m-%d %H:%M:%SZ")
    )
}

/// Format the countdown, e.g. `✅ 9 Days 23 Hours` or `⚠️ 23 Hours`
pub fn format_expiry(expiry: &ExpiryResult) -> String {
    let span = format_span(expiry.days.abs(), expiry.hours.abs());
    match expiry.severity {
        Severity::Ok => format!("{} {}", style("✅").green(), span),
        Severity::Warning => format!("{}", style(format!("⚠️ {}", span)).yellow()),
        Severity::Critical if expiry.is_expired() => {
            format!("{}", style(format!("❌ Expired {} ago", span)).red().bold())
        }
        Severity::Critical => format!("{}", style(format!("❌ {}", span)).red().bold()),
    }
}

fn format_span(days: i64, hours: i64) -> String {
    if days == 0 {
        format!("{} Hours", hours)
    } else {
        format!("{} Days {} Hours", days, hours)
    }
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "None".to_string()
    } else {
        values.join(", ")
    }
}
