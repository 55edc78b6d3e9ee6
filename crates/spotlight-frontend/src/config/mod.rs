//! Application configuration
//!
//! The stage reads an optional RON file from the OS configuration directory
//! at startup. Nothing is written back.

mod manager;

pub use manager::{CONFIG_FILE_NAME, ConfigError, ConfigManager};
