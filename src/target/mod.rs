//! Target resolution
//!
//! Turns the raw target string and requested [`Mode`] into a [`Target`]
//! that says exactly where the certificate will be read from.

pub mod address;
pub mod mode;

pub use address::{get_address, host_of, strip_url, DEFAULT_PORT};
pub use mode::{detect_mode, parse_mode, Mode};

use crate::utils::TargetError;
use std::fmt;
use std::path::PathBuf;

/// Literal target that means "read PEM from standard input"
pub const STDIN_TARGET: &str = "-";

/// A resolved certificate source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// PEM file on disk
    File(PathBuf),
    /// PEM read from standard input
    Stdin,
    /// Normalized `host:port` of a TLS server
    Server(String),
}

impl Target {
    /// Resolve `raw` under `mode`, detecting the mode first when it is
    /// [`Mode::Auto`]. Server targets go through [`get_address`].
    pub fn resolve(raw: &str, mode: Mode, default_port: u16) -> Result<Self, TargetError> {
        if raw == STDIN_TARGET && mode != Mode::Server {
            return Ok(Target::Stdin);
        }

        let mode = match mode {
            Mode::Auto => detect_mode(raw),
            explicit => explicit,
        };

        match mode {
            Mode::File => Ok(Target::File(PathBuf::from(raw))),
            _ => get_address(strip_url(raw), default_port).map(Target::Server),
        }
    }

    /// The terminal mode this target was resolved to
    pub fn mode(&self) -> Mode {
        match self {
            Target::File(_) | Target::Stdin => Mode::File,
            Target::Server(_) => Mode::Server,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::File(path) => write!(f, "{}", path.display()),
            Target::Stdin => write!(f, "<stdin>"),
            Target::Server(address) => write!(f, "{}", address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_auto() {
        assert_eq!(
            Target::resolve("cert.pem", Mode::Auto, DEFAULT_PORT).unwrap(),
            Target::File(PathBuf::from("cert.pem"))
        );
        assert_eq!(
            Target::resolve("example.com", Mode::Auto, DEFAULT_PORT).unwrap(),
            Target::Server("example.com:443".to_string())
        );
        assert_eq!(
            Target::resolve("https://bar:8443/", Mode::Auto, DEFAULT_PORT).unwrap(),
            Target::Server("bar:8443".to_string())
        );
    }

    #[test]
    fn test_resolve_explicit_mode_wins() {
        assert_eq!(
            Target::resolve("example.com", Mode::File, DEFAULT_PORT).unwrap(),
            Target::File(PathBuf::from("example.com"))
        );
        assert_eq!(
            Target::resolve("cert.pem", Mode::Server, DEFAULT_PORT).unwrap(),
            Target::Server("cert.pem:443".to_string())
        );
    }

    #[test]
    fn test_resolve_stdin() {
        assert_eq!(
            Target::resolve("-", Mode::Auto, DEFAULT_PORT).unwrap(),
            Target::Stdin
        );
        assert_eq!(
            Target::resolve("-", Mode::File, DEFAULT_PORT).unwrap(),
            Target::Stdin
        );
    }

    #[test]
    fn test_resolve_server_validation() {
        assert_eq!(
            Target::resolve("", Mode::Auto, DEFAULT_PORT),
            Err(TargetError::NoHostProvided)
        );
        assert_eq!(
            Target::resolve("example.com:", Mode::Server, DEFAULT_PORT),
            Err(TargetError::InvalidHost {
                host: "example.com:".to_string()
            })
        );
    }
}
