//! Data models for tls-inspector

pub mod certificate;
pub mod expiry;

pub use certificate::{BasicConstraints, CertificateInfo};
pub use expiry::{ExpiryResult, Severity};
