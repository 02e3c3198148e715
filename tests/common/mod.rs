#![allow(dead_code, deprecated)]

use assert_cmd::Command;
use std::path::Path;

pub fn tara_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tara").unwrap();
    cmd.env_remove("TARA_ROOT");
    cmd.env_remove("TARA_LOG");
    cmd
}

/// Command running inside an initialized journal root
pub fn tara_in(root: &Path) -> Command {
    let mut cmd = tara_cmd();
    cmd.current_dir(root);
    cmd
}

/// Initialize `root`, sign up `username` with `password` and log in
pub fn logged_in(root: &Path, username: &str, password: &str) {
    tara_cmd().arg("init").arg(root).assert().success();
    tara_in(root)
        .args(["signup", username, password])
        .assert()
        .success();
    tara_in(root)
        .args(["login", username, password])
        .assert()
        .success();
}
