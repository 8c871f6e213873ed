#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Command with colors off, pointed at the given config file
pub fn rts(config: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rtimesplit");
    cmd.env("NO_COLOR", "1").args(["--config", config]);
    cmd
}

/// Create a unique config path inside the system temp dir and remove any existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesplit.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Write a config file with the given YAML body
pub fn write_config(name: &str, yaml: &str) -> String {
    let path = setup_test_config(name);
    fs::write(&path, yaml).expect("write config");
    path
}
