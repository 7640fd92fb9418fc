//! Configuration module for tls-inspector
//!
//! Handles loading settings from TOML files.

pub mod settings;

pub use settings::{ReadSettings, Settings};

use crate::utils::Result;
use std::path::Path;

/// Load settings from `path` when given, otherwise from the default location
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let settings = match path {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::load_default()?,
    };
    Ok(settings)
}
