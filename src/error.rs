//! # Error Types Module
//!
//! Error types for the monitor. Generating readings cannot fail; errors only
//! come from reading the optional config file and from the CLI console loop.
//!
//! ## Error Types
//! - `ConfigError`: Configuration file I/O, parsing and validation errors
//! - `CliError`: Console output and interrupt handler failures

use std::fmt;

/// Errors that can occur while loading configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read config file
    ReadFailed(std::io::Error),
    /// Failed to parse config file
    ParseFailed(toml::de::Error),
    /// Refresh interval of zero seconds
    InvalidInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReadFailed(e) => {
                write!(f, "Failed to read config file: {}", e)
            }
            ConfigError::ParseFailed(e) => {
                write!(f, "Failed to parse config file: {}", e)
            }
            ConfigError::InvalidInterval => {
                write!(f, "Refresh interval must be at least one second")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadFailed(e) => Some(e),
            ConfigError::ParseFailed(e) => Some(e),
            ConfigError::InvalidInterval => None,
        }
    }
}

/// Errors that end the console loop
#[derive(Debug)]
pub enum CliError {
    /// Failed to listen for Ctrl+C
    Signal(std::io::Error),
    /// Failed to write readings to stdout
    Output(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Signal(e) => write!(f, "Failed to listen for interrupt: {}", e),
            CliError::Output(e) => write!(f, "Failed to write readings: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Signal(e) | CliError::Output(e) => Some(e),
        }
    }
}
