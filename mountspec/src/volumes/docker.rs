//! Docker `--volume` syntax.
//!
//! A volume string has the form `[host_path][:path][:mode]`. Only the first
//! two colons split fields, so anything after a third colon stays in the mode
//! segment. The legacy `<path>:<mode>` shorthand is accepted even though
//! Docker itself no longer does.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ContainerVolume;
use super::mode::Mode;
use crate::errors::{MountspecError, MountspecResult};

/// A single volume mount as passed to `docker run --volume`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DockerVolumeFields")]
pub struct DockerVolume {
    /// Host side of the mount. `None` for an anonymous volume.
    #[serde(skip_serializing_if = "Option::is_none")]
    host_path: Option<String>,
    /// Mount point inside the container.
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<Mode>,
}

/// Unchecked serialized form, validated into a [`DockerVolume`].
#[derive(Deserialize)]
struct DockerVolumeFields {
    #[serde(default)]
    host_path: Option<String>,
    path: String,
    #[serde(default)]
    mode: Option<Mode>,
}

impl TryFrom<DockerVolumeFields> for DockerVolume {
    type Error = MountspecError;

    fn try_from(fields: DockerVolumeFields) -> Result<Self, Self::Error> {
        DockerVolume::new(fields.path, fields.host_path, fields.mode)
    }
}

impl DockerVolume {
    /// Build a volume from explicit fields.
    ///
    /// Fails with [`MountspecError::InvalidFormat`] when `path` is empty.
    /// A volume with a mode but no host path cannot be rendered without
    /// ambiguity, see [`DockerVolume::spec_string`].
    pub fn new(
        path: impl Into<String>,
        host_path: Option<String>,
        mode: Option<Mode>,
    ) -> MountspecResult<Self> {
        let volume = Self {
            host_path,
            path: path.into(),
            mode,
        };
        if volume.path.is_empty() {
            return Err(MountspecError::invalid_format(
                volume.spec_string(),
                "empty container path",
            ));
        }
        Ok(volume)
    }

    /// Parse a volume string that may be absent.
    ///
    /// `None` is rejected the same way as an empty string.
    pub fn parse_opt(as_str: Option<&str>) -> MountspecResult<Self> {
        match as_str {
            Some(s) => s.parse(),
            None => Err(MountspecError::invalid_format("", "no volume string given")),
        }
    }

    /// Load a volume from its JSON form.
    pub fn from_json(json: &str) -> MountspecResult<Self> {
        let fields: DockerVolumeFields = serde_json::from_str(json)
            .map_err(|e| MountspecError::Config(format!("Failed to parse volume JSON: {}", e)))?;
        fields.try_into()
    }

    pub fn host_path(&self) -> Option<&str> {
        self.host_path.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// True when no host path was given (`:/path` or built without one).
    ///
    /// The one-segment shorthand `/data` names its host path explicitly and
    /// is not reported here.
    pub fn is_anonymous(&self) -> bool {
        self.host_path.is_none()
    }

    pub fn is_read_only(&self) -> bool {
        self.mode.is_some_and(|mode| mode.is_read_only())
    }

    /// Colon-joined fields without any shell quoting.
    ///
    /// Absent fields are dropped rather than left empty, so a volume with no
    /// host path but a mode renders as `path:mode` and reads back as a
    /// host/container pair.
    pub fn spec_string(&self) -> String {
        let mut fields: Vec<&str> = Vec::with_capacity(3);
        if let Some(host_path) = &self.host_path {
            fields.push(host_path);
        }
        fields.push(&self.path);
        if let Some(mode) = &self.mode {
            fields.push(mode.as_str());
        }
        fields.join(":")
    }

    /// Render the volume as one shell word.
    ///
    /// Strings with a `$` are wrapped in double quotes instead of escaped so
    /// that variables such as `$_JOB_TMP_DIR` are still expanded by the
    /// shell running the command.
    pub fn to_cmd_arg(&self) -> String {
        if self.host_path.is_none() && self.mode.is_some() {
            tracing::warn!(
                path = %self.path,
                mode = ?self.mode,
                "Volume has a mode but no host path, rendered string will not parse back the same"
            );
        }

        let spec = self.spec_string();
        if spec.contains('$') {
            format!("\"{}\"", spec)
        } else {
            shell_quote(&spec).into_owned()
        }
    }
}

/// Characters that never need quoting in a POSIX shell word.
fn is_shell_safe(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(ch, '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-')
}

/// Quote a string as one shell word, leaving plain paths and mode lists
/// like `/host:/container:rw,z` untouched.
fn shell_quote(s: &str) -> Cow<'_, str> {
    if !s.is_empty() && s.chars().all(is_shell_safe) {
        Cow::Borrowed(s)
    } else {
        shell_escape::unix::escape(Cow::Borrowed(s))
    }
}

impl FromStr for DockerVolume {
    type Err = MountspecError;

    fn from_str(as_str: &str) -> Result<Self, Self::Err> {
        if as_str.is_empty() {
            return Err(MountspecError::invalid_format(as_str, "empty volume string"));
        }

        let mut parts = as_str.splitn(3, ':');
        let first = parts.next().unwrap_or_default();
        let host_path = Some(first).filter(|p| !p.is_empty()).map(str::to_string);

        let (path, mode) = match (parts.next(), parts.next()) {
            // Anonymous shorthand: the one path is used on both sides.
            (None, _) => (first, None),
            (Some(second), None) => match Mode::from_token(second) {
                Some(mode) => (first, Some(mode)),
                None => (second, None),
            },
            (Some(path), Some(mode)) => {
                let mode = Mode::from_token(mode).ok_or_else(|| MountspecError::InvalidMode {
                    input: as_str.to_string(),
                    mode: mode.to_string(),
                })?;
                (path, Some(mode))
            }
        };

        let volume = Self::new(path, host_path, mode)?;

        tracing::debug!(
            volume = as_str,
            host_path = ?volume.host_path,
            path = %volume.path,
            mode = ?volume.mode,
            "Parsed docker volume"
        );

        Ok(volume)
    }
}

impl fmt::Display for DockerVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cmd_arg())
    }
}

impl ContainerVolume for DockerVolume {
    fn from_spec(as_str: &str) -> MountspecResult<Self> {
        as_str.parse()
    }

    fn host_path(&self) -> Option<&str> {
        DockerVolume::host_path(self)
    }

    fn path(&self) -> &str {
        DockerVolume::path(self)
    }

    fn mode(&self) -> Option<Mode> {
        DockerVolume::mode(self)
    }

    fn to_cmd_arg(&self) -> String {
        DockerVolume::to_cmd_arg(self)
    }
}
