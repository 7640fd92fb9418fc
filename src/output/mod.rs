//! Output formatting module
//!
//! Provides the aligned terminal view and JSON export.

pub mod json;
pub mod terminal;

pub use json::{print_json, to_json, JsonOutput};
pub use terminal::{format_expiry, print_certificate, render_certificate};
