//! Custom error types for tls-inspector
//!
//! Errors are grouped by the stage that produced them so the caller can tell
//! a bad argument apart from a failed file read or a failed handshake.

use thiserror::Error;

/// Top-level error type for a single certificate read
#[derive(Error, Debug)]
pub enum InspectError {
    #[error(transparent)]
    Target(#[from] TargetError),

    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Ssl(#[from] SslError),

    #[error(transparent)]
    Certificate(#[from] CertificateError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("operation cancelled")]
    Cancelled,
}

/// Validation errors for the target string and mode
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TargetError {
    #[error("invalid mode: {mode} (must be auto, file, or server)")]
    InvalidMode { mode: String },

    #[error("no host provided")]
    NoHostProvided,

    #[error("invalid host: {host}")]
    InvalidHost { host: String },
}

/// Errors reading a certificate from a file or standard input
#[derive(Error, Debug)]
pub enum FileError {
    #[error("failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("failed to decode PEM block in {path}")]
    NoPemBlock { path: String },
}

/// Errors acquiring a certificate from a remote server
#[derive(Error, Debug)]
pub enum SslError {
    #[error("failed to connect to {address}: {message}")]
    ConnectionError { address: String, message: String },

    #[error("TLS handshake with {address} failed: {message}")]
    HandshakeFailed { address: String, message: String },

    #[error("{stage} timed out for {address}")]
    Timeout { address: String, stage: Stage },

    #[error("TLS configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("no certificates found for {address}")]
    NoCertificates { address: String },
}

/// Network stage an [`SslError::Timeout`] occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Connect,
    Handshake,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Connect => write!(f, "TCP connection"),
            Stage::Handshake => write!(f, "TLS handshake"),
        }
    }
}

/// Certificate decoding errors
#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("failed to parse certificate: {message}")]
    ParseError { message: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias using InspectError
pub type Result<T> = std::result::Result<T, InspectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(TargetError::NoHostProvided.to_string(), "no host provided");
        assert_eq!(
            TargetError::InvalidHost {
                host: "example.com:fff".to_string()
            }
            .to_string(),
            "invalid host: example.com:fff"
        );
    }

    #[test]
    fn test_timeout_names_stage() {
        let err = SslError::Timeout {
            address: "example.com:443".to_string(),
            stage: Stage::Handshake,
        };
        assert_eq!(err.to_string(), "TLS handshake timed out for example.com:443");
    }

    #[test]
    fn test_wrapped_error_is_transparent() {
        let err: InspectError = TargetError::NoHostProvided.into();
        assert_eq!(err.to_string(), "no host provided");
    }
}
