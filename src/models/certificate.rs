//! Certificate information types

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Basic constraints extension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BasicConstraints {
    /// Whether the certificate may act as a CA
    pub is_ca: bool,
    /// Maximum number of intermediate CAs below this one
    pub path_len: Option<u32>,
}

impl fmt::Display for BasicConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_ca, self.path_len) {
            (true, Some(len)) => write!(f, "CA=true, pathlen={}", len),
            (ca, _) => write!(f, "CA={}, pathlen=—", ca),
        }
    }
}

/// The decoded leaf certificate
#[derive(Debug, Clone, Serialize)]
pub struct CertificateInfo {
    /// X.509 version (1, 2 or 3)
    pub version: u32,
    /// Serial number as colon-separated upper-case hex
    pub serial: String,
    /// Subject distinguished name
    pub subject: String,
    /// Subject common name, empty when absent
    pub common_name: String,
    /// Issuer distinguished name
    pub issuer: String,
    /// Not valid before
    pub not_before: DateTime<Utc>,
    /// Not valid after
    pub not_after: DateTime<Utc>,
    /// DNS subject alternative names, in certificate order
    pub dns_names: Vec<String>,
    /// Signature algorithm
    pub signature_algorithm: String,
    /// Public key description, e.g. "RSA (2048 bits)"
    pub public_key: String,
    pub key_usage: Vec<String>,
    pub extended_key_usage: Vec<String>,
    pub basic_constraints: BasicConstraints,
    /// SHA-256 fingerprint of the DER encoding
    pub fingerprint_sha256: String,
    #[serde(skip)]
    pub raw_der: Vec<u8>,
}

impl CertificateInfo {
    /// Name to show as the certificate's host: the first DNS name, else the CN
    pub fn host(&self) -> &str {
        self.dns_names
            .first()
            .map(String::as_str)
            .unwrap_or(&self.common_name)
    }

    /// Check if the certificate is not yet valid at `now`
    pub fn is_not_yet_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.not_before
    }
}
