#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn diary_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sleepdiary").unwrap();
    cmd.env_remove("SLEEPDIARY_ROOT");
    cmd.env_remove("SLEEPDIARY_LOG");
    cmd
}

/// Initialize a diary in `dir`
pub fn init_diary(dir: &Path) {
    diary_cmd().arg("init").arg(dir).assert().success();
}

/// Command running inside an initialized diary
pub fn in_diary(dir: &Path) -> Command {
    let mut cmd = diary_cmd();
    cmd.current_dir(dir);
    cmd
}
