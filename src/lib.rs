//! tls-inspector library
//!
//! Reads a single TLS leaf certificate from a server, a PEM file or
//! standard input and summarizes it:
//! - Target mode detection and `host:port` normalization
//! - Certificate acquisition with chain verification disabled
//! - X.509 decoding and expiry countdown with severity
//! - Aligned terminal and JSON output
//!
//! # Usage
//!
//! ```rust,ignore
//! use tls_inspector::config::ReadSettings;
//! use tls_inspector::target::Mode;
//!
//! #[tokio::main]
//! async fn main() {
//!     let cert = tls_inspector::reader::read("example.com", Mode::Auto, &ReadSettings::default())
//!         .await
//!         .unwrap();
//!     println!("{}", cert.subject);
//! }
//! ```

pub mod certificate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod output;
pub mod reader;
pub mod target;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Settings;
pub use models::{CertificateInfo, ExpiryResult, Severity};
pub use reader::read;
pub use target::{Mode, Target};
pub use utils::{InspectError, Result};
