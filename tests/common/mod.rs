//! Common test utilities

use assert_cmd::Command;

/// Build a `depviz` command with the given arguments
#[allow(dead_code)]
pub fn depviz(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("depviz").unwrap();
    cmd.args(args).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// The minimal valid argument list
#[allow(dead_code)]
pub fn required_args() -> Vec<&'static str> {
    vec!["--package", "serde", "--repo", "/src/serde"]
}
