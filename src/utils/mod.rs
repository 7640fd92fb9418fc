//! Utility modules for tls-inspector
//!
//! This module contains error types and progress indicators.

pub mod error;
pub mod progress;

pub use error::{
    CertificateError, ConfigError, FileError, InspectError, Result, SslError, Stage, TargetError,
};
