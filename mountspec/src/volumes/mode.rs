//! Volume access modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MountspecError;

/// Access mode tag applied to a volume mount.
///
/// The set is closed: anything not listed here is not a mode. Lowercase `z`
/// asks the runtime to relabel the content for sharing between containers,
/// uppercase `Z` for private use by one container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "ro")]
    ReadOnly,
    #[serde(rename = "rw")]
    ReadWrite,
    #[serde(rename = "z")]
    Shared,
    #[serde(rename = "Z")]
    Private,
    #[serde(rename = "ro,z")]
    ReadOnlyShared,
    #[serde(rename = "ro,Z")]
    ReadOnlyPrivate,
    #[serde(rename = "rw,z")]
    ReadWriteShared,
    #[serde(rename = "rw,Z")]
    ReadWritePrivate,
}

impl Mode {
    /// Every recognized mode, in token order.
    pub const ALL: [Mode; 8] = [
        Mode::ReadOnly,
        Mode::ReadWrite,
        Mode::Shared,
        Mode::Private,
        Mode::ReadOnlyShared,
        Mode::ReadOnlyPrivate,
        Mode::ReadWriteShared,
        Mode::ReadWritePrivate,
    ];

    /// Token as written in a volume string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::ReadOnly => "ro",
            Mode::ReadWrite => "rw",
            Mode::Shared => "z",
            Mode::Private => "Z",
            Mode::ReadOnlyShared => "ro,z",
            Mode::ReadOnlyPrivate => "ro,Z",
            Mode::ReadWriteShared => "rw,z",
            Mode::ReadWritePrivate => "rw,Z",
        }
    }

    /// Look up a token. Matching is exact: `RO` is not a mode.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == token)
    }

    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Mode::ReadOnly | Mode::ReadOnlyShared | Mode::ReadOnlyPrivate
        )
    }
}

impl FromStr for Mode {
    type Err = MountspecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| MountspecError::InvalidMode {
            input: s.to_string(),
            mode: s.to_string(),
        })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
