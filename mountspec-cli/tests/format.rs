use predicates::prelude::*;

mod common;

#[test]
fn test_format_quotes_spaces() {
    common::mountspec()
        .args(["format", "--host-path", "/my data", "--path", "/data"])
        .assert()
        .success()
        .stdout("'/my data:/data'\n");
}

#[test]
fn test_format_keeps_variables() {
    common::mountspec()
        .args([
            "format",
            "--host-path",
            "$TMP",
            "--path",
            "$TMP",
            "--mode",
            "rw",
        ])
        .assert()
        .success()
        .stdout("\"$TMP:$TMP:rw\"\n");
}

#[test]
fn test_format_anonymous_volume() {
    common::mountspec()
        .args(["format", "--path", "/cache"])
        .assert()
        .success()
        .stdout("/cache\n");
}

#[test]
fn test_format_plain_volume_is_unquoted() {
    common::mountspec()
        .args([
            "format",
            "--host-path",
            "/host",
            "--path",
            "/container",
            "--mode",
            "ro,z",
        ])
        .assert()
        .success()
        .stdout("/host:/container:ro,z\n");
}

#[test]
fn test_format_empty_path_fails() {
    common::mountspec()
        .args(["format", "--host-path", "/host", "--path", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty container path"));
}

#[test]
fn test_format_mode_without_host_path_fails() {
    common::mountspec()
        .args(["format", "--path", "/data", "--mode", "ro"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--mode requires --host-path"));
}

#[test]
fn test_format_rejects_unknown_mode() {
    common::mountspec()
        .args(["format", "--host-path", "/a", "--path", "/b", "--mode", "rx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid volume mode"));
}

#[test]
fn test_modes_lists_every_token() {
    common::mountspec()
        .arg("modes")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ro\tread-only\nrw\tread-write\n"))
        .stdout(predicate::str::contains("rw,Z\tread-write"));
}
