//! Expiry countdown and severity

use crate::models::{ExpiryResult, Severity};
use crate::utils::ConfigError;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;

/// Below this many days remaining a certificate is flagged as a warning
pub const DEFAULT_WARNING_DAYS: i64 = 7;

/// Below this many days remaining a certificate is critical; zero means
/// only already-expired certificates are critical
pub const DEFAULT_CRITICAL_DAYS: i64 = 0;

/// Day thresholds for [`Severity`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExpiryThresholds {
    pub warning_days: i64,
    pub critical_days: i64,
}

impl Default for ExpiryThresholds {
    fn default() -> Self {
        Self {
            warning_days: DEFAULT_WARNING_DAYS,
            critical_days: DEFAULT_CRITICAL_DAYS,
        }
    }
}

/// Largest threshold accepted from configuration, roughly a century
pub const MAX_THRESHOLD_DAYS: i64 = 36_500;

impl ExpiryThresholds {
    /// Check both thresholds lie within `0..=MAX_THRESHOLD_DAYS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, days) in [
            ("warning_days", self.warning_days),
            ("critical_days", self.critical_days),
        ] {
            if !(0..=MAX_THRESHOLD_DAYS).contains(&days) {
                return Err(ConfigError::InvalidValue {
                    key: format!("expiry.{}", key),
                    message: format!("{} is outside 0..={}", days, MAX_THRESHOLD_DAYS),
                });
            }
        }
        Ok(())
    }

    fn severity(&self, remaining: TimeDelta) -> Severity {
        if below(remaining, self.critical_days) {
            Severity::Critical
        } else if below(remaining, self.warning_days) {
            Severity::Warning
        } else {
            Severity::Ok
        }
    }
}

/// `remaining < days`, saturating when `days` is out of `TimeDelta` range.
fn below(remaining: TimeDelta, days: i64) -> bool {
    match TimeDelta::try_days(days) {
        Some(threshold) => remaining < threshold,
        None => days > 0,
    }
}

/// Evaluate the time left until `not_after` using the default thresholds.
pub fn evaluate(not_after: DateTime<Utc>, now: DateTime<Utc>) -> ExpiryResult {
    evaluate_with(not_after, now, &ExpiryThresholds::default())
}

/// Evaluate the time left until `not_after` as whole days plus whole hours.
///
/// Both parts truncate toward zero and are never clamped, so a certificate
/// that expired 30 hours ago reports -1 days and -6 hours.
pub fn evaluate_with(
    not_after: DateTime<Utc>,
    now: DateTime<Utc>,
    thresholds: &ExpiryThresholds,
) -> ExpiryResult {
    let remaining = not_after.signed_duration_since(now);
    let days = remaining.num_days();
    let hours = (remaining - TimeDelta::days(days)).num_hours();

    ExpiryResult {
        days,
        hours,
        remaining,
        severity: thresholds.severity(remaining),
    }
}
