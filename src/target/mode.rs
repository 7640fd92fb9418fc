//! Target interpretation mode
//!
//! A target string is either read from disk or fetched from a server.
//! [`Mode::Auto`] asks [`detect_mode`] to choose between the two.

use crate::utils::TargetError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How a target string should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Auto,
    File,
    Server,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Auto => "auto",
            Mode::File => "file",
            Mode::Server => "server",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mode(s)
    }
}

/// Parse a mode name, ignoring case and surrounding whitespace.
pub fn parse_mode(raw: &str) -> Result<Mode, TargetError> {
    let mode = raw.trim().to_lowercase();
    match mode.as_str() {
        "auto" => Ok(Mode::Auto),
        "file" => Ok(Mode::File),
        "server" => Ok(Mode::Server),
        _ => Err(TargetError::InvalidMode { mode }),
    }
}

type Rule = (fn(&str) -> bool, Mode);

/// Detection rules, first match wins. Order matters: a URL may contain
/// slashes and a `host:port` may end in `.pem`.
const RULES: &[Rule] = &[
    (is_url, Mode::Server),
    (has_path_separator, Mode::File),
    (has_pem_extension, Mode::File),
    (has_port, Mode::Server),
];

fn is_url(target: &str) -> bool {
    target.starts_with("https://") || target.starts_with("http://")
}

fn has_path_separator(target: &str) -> bool {
    target.contains('/')
}

fn has_pem_extension(target: &str) -> bool {
    target.ends_with(".pem")
}

fn has_port(target: &str) -> bool {
    target.contains(':')
}

/// Pick [`Mode::File`] or [`Mode::Server`] from the shape of the target.
///
/// Purely syntactic: the filesystem is never consulted. A bare word that
/// matches no rule (`localhost`, `cert`) is assumed to be a hostname, which
/// can surprise users who meant a file in the current directory; they should
/// write `./cert` or pass `--mode file`.
pub fn detect_mode(target: &str) -> Mode {
    let lowered = target.to_lowercase();
    RULES
        .iter()
        .find(|(matches, _)| matches(&lowered))
        .map(|(_, mode)| *mode)
        .unwrap_or(Mode::Server)
}
