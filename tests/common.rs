#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn rwd() -> Command {
    let mut cmd = cargo_bin_cmd!("rworkday");
    // keep log output out of the assertions
    cmd.env_remove("RWORKDAY_LOG");
    cmd
}

/// Temp dir plus the config path inside it (file not created).
pub fn setup_config(name: &str) -> (TempDir, String) {
    let dir = tempfile::Builder::new()
        .prefix(&format!("rworkday_{name}_"))
        .tempdir()
        .expect("temp dir");
    let path: PathBuf = dir.path().join("rworkday.conf");
    (dir, path.to_string_lossy().to_string())
}

/// Same as `setup_config`, with `yaml` written to the file.
pub fn config_with(name: &str, yaml: &str) -> (TempDir, String) {
    let (dir, path) = setup_config(name);
    fs::write(&path, yaml).expect("write config");
    (dir, path)
}

/// `track` arguments for a fixed day and instant.
pub fn track_at(cfg: &str, start: &str, ls: &str, le: &str, at: &str) -> Vec<String> {
    [
        "--config",
        cfg,
        "track",
        "--start",
        start,
        "--lunch-start",
        ls,
        "--lunch-end",
        le,
        "--date",
        "2025-06-02",
        "--at",
        at,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
