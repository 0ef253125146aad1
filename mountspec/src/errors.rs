//! Error types for volume spec parsing and rendering.

use thiserror::Error;

/// Errors produced while parsing, building or loading volume specs.
///
/// None of these are transient: a failed parse means the input itself is
/// wrong and has to be fixed by whoever supplied it.
#[derive(Debug, Error)]
pub enum MountspecError {
    /// The volume string could not be split into host path, container path
    /// and mode.
    #[error("failed to parse volume from '{input}': {reason}")]
    InvalidFormat { input: String, reason: &'static str },

    /// The mode segment is not one of the recognized mode tokens.
    #[error("invalid volume mode '{mode}' in '{input}'")]
    InvalidMode { input: String, mode: String },

    /// No volume syntax is known for the requested runtime.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Serialized volume configuration could not be read.
    #[error("config: {0}")]
    Config(String),
}

impl MountspecError {
    pub(crate) fn invalid_format(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            reason,
        }
    }
}

pub type MountspecResult<T> = Result<T, MountspecError>;
