//! Volume specs for container runtimes.
//!
//! Each runtime has its own volume string syntax. [`ContainerVolume`] is the
//! common surface, [`RuntimeKind`] picks the syntax for a runtime and
//! [`Volume`] carries a parsed spec of any known syntax.

mod docker;
mod mode;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{MountspecError, MountspecResult};

pub use docker::DockerVolume;
pub use mode::Mode;

/// A volume mount in some runtime's syntax.
pub trait ContainerVolume: Sized {
    /// Parse the runtime's volume string.
    fn from_spec(as_str: &str) -> MountspecResult<Self>;

    fn host_path(&self) -> Option<&str>;

    fn path(&self) -> &str;

    fn mode(&self) -> Option<Mode>;

    /// Modes this runtime accepts.
    fn valid_modes() -> &'static [Mode] {
        &Mode::ALL
    }

    /// Render as a single shell word for a command line.
    fn to_cmd_arg(&self) -> String;
}

/// Container runtimes with a known volume syntax.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RuntimeKind {
    #[default]
    Docker,
}

impl RuntimeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeKind::Docker => "docker",
        }
    }

    /// Parse a volume string using this runtime's syntax.
    pub fn parse_volume(&self, as_str: &str) -> MountspecResult<Volume> {
        match self {
            RuntimeKind::Docker => DockerVolume::from_spec(as_str).map(Volume::Docker),
        }
    }

    /// Build a volume from explicit fields.
    pub fn volume(
        &self,
        path: String,
        host_path: Option<String>,
        mode: Option<Mode>,
    ) -> MountspecResult<Volume> {
        match self {
            RuntimeKind::Docker => DockerVolume::new(path, host_path, mode).map(Volume::Docker),
        }
    }
}

impl FromStr for RuntimeKind {
    type Err = MountspecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "docker" => Ok(RuntimeKind::Docker),
            _ => Err(MountspecError::Unsupported(format!(
                "Unknown runtime: '{}'. Supported: docker",
                s
            ))),
        }
    }
}

impl fmt::Display for RuntimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed volume, tagged with the runtime whose syntax it follows.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "runtime", rename_all = "lowercase")]
pub enum Volume {
    Docker(DockerVolume),
}

impl Volume {
    pub fn runtime(&self) -> RuntimeKind {
        match self {
            Volume::Docker(_) => RuntimeKind::Docker,
        }
    }

    pub fn host_path(&self) -> Option<&str> {
        match self {
            Volume::Docker(v) => v.host_path(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Volume::Docker(v) => v.path(),
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        match self {
            Volume::Docker(v) => v.mode(),
        }
    }

    pub fn to_cmd_arg(&self) -> String {
        match self {
            Volume::Docker(v) => v.to_cmd_arg(),
        }
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cmd_arg())
    }
}
