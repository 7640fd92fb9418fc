//! JSON output formatter

use crate::models::{CertificateInfo, ExpiryResult};
use crate::target::Mode;
use serde::Serialize;

/// JSON-serializable output structure
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub source: String,
    pub mode: Mode,
    pub certificate: &'a CertificateInfo,
    pub expiry: &'a ExpiryResult,
}

/// Serialize a certificate report as pretty JSON
pub fn to_json(output: &JsonOutput<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(output)
}

/// Print a certificate report as JSON to stdout
pub fn print_json(output: &JsonOutput<'_>) -> anyhow::Result<()> {
    println!("{}", to_json(output)?);
    Ok(())
}
