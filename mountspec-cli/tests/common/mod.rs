#![allow(dead_code)]

use assert_cmd::Command;
use std::time::Duration;

/// Command for the mountspec binary with a clean environment.
pub fn mountspec() -> Command {
    let bin_path = env!("CARGO_BIN_EXE_mountspec");
    let mut cmd = Command::new(bin_path);
    cmd.timeout(Duration::from_secs(30));
    cmd.env_remove("MOUNTSPEC_RUNTIME");
    cmd.env_remove("RUST_LOG");
    cmd
}
