//! Command implementations

pub mod read;

pub use read::run_read;
