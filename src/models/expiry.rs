//! Expiry countdown types

use chrono::TimeDelta;
use serde::Serialize;
use std::fmt;

/// How urgently a certificate needs attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Ok => write!(f, "ok"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Time remaining until a certificate's not-after date.
///
/// `days` and `hours` are truncated toward zero and share the sign of the
/// remaining duration, so an expired certificate yields negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpiryResult {
    pub days: i64,
    pub hours: i64,
    #[serde(skip)]
    pub remaining: TimeDelta,
    pub severity: Severity,
}

impl ExpiryResult {
    /// Whether the not-after date has already passed
    pub fn is_expired(&self) -> bool {
        self.remaining < TimeDelta::zero()
    }
}
