//! Error types for grammar expansion and turtle interpretation.
//!
//! Failures are reported to the caller as-is. Nothing here carries fallback
//! geometry: an interpretation either completes or yields no output at all.

use thiserror::Error;

/// Errors produced while configuring, expanding, or interpreting a tree.
#[derive(Error, Debug)]
pub enum TreeError {
    /// A generation parameter is out of range. Generation never starts.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The symbol string closes a branch that was never opened.
    #[error("malformed symbol string: unmatched `{symbol}` at index {index}")]
    MalformedInput {
        /// Character offset of the offending symbol.
        index: usize,
        /// The offending symbol.
        symbol: char,
    },

    /// A generator configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A generator configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl TreeError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
