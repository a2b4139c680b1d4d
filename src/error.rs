//! Crate-level error types.

use std::fmt;

/// Errors produced by the tiltgrid crate.
///
/// The animation pipeline itself is total — degenerate inputs degrade to
/// neutral values or skipped writes — so every variant here concerns
/// configuration handling.
#[derive(Debug)]
pub enum TiltgridError {
    /// An option value failed validation.
    InvalidOptions(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure while reading or writing a preset file.
    Io(std::io::Error),
}

impl fmt::Display for TiltgridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOptions(msg) => {
                write!(f, "invalid options: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for TiltgridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TiltgridError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
