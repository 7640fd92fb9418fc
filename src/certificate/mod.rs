//! Certificate decoding and expiry evaluation

pub mod expiry;
pub mod parser;

pub use expiry::{
    evaluate, evaluate_with, ExpiryThresholds, DEFAULT_CRITICAL_DAYS, DEFAULT_WARNING_DAYS,
};
pub use parser::parse_certificate;
