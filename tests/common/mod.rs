#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn simpletags_cmd() -> Command {
    let mut cmd = Command::cargo_bin("simpletags").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
