//! Crate-level error types.

use std::fmt;

/// Errors produced by the pager-dots crate.
///
/// Widget operations never fail; these only surface at the configuration
/// boundary and from the strict saved-state decoder.
#[derive(Debug)]
pub enum DotsError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A configured value is outside its legal range.
    InvalidOption(String),
    /// Saved-state blob could not be encoded or decoded.
    SavedState(String),
}

impl fmt::Display for DotsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
            Self::SavedState(msg) => write!(f, "saved state error: {msg}"),
        }
    }
}

impl std::error::Error for DotsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DotsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
