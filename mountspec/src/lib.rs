//! Mountspec - container volume mount specifications
//!
//! Parses the colon-delimited volume strings container runtimes take on
//! their command line (`docker run --volume /host:/container:ro`) and
//! renders them back as shell-safe arguments.
//!
//! ```
//! use mountspec::{DockerVolume, Mode};
//!
//! let volume: DockerVolume = "/srv/data:/data:ro".parse().unwrap();
//! assert_eq!(volume.host_path(), Some("/srv/data"));
//! assert_eq!(volume.mode(), Some(Mode::ReadOnly));
//! assert_eq!(volume.spec_string(), "/srv/data:/data:ro");
//! ```

pub mod errors;
pub mod volumes;

pub use errors::{MountspecError, MountspecResult};
pub use volumes::{ContainerVolume, DockerVolume, Mode, RuntimeKind, Volume};
