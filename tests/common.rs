#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's config directory.
pub fn zki(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("zkindicator");
    cmd.env("ZKINDICATOR_HOME", test_home(name));
    cmd
}

/// Per-test config directory inside the system temp dir
pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_zkindicator_home", name));
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_zkindicator.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB and add two devices and two punches
pub fn init_db_with_data(name: &str, db_path: &str) {
    zki(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    zki(name)
        .args(["--db", db_path, "device", "add", "SN-ON", "--status", "Online"])
        .assert()
        .success();

    zki(name)
        .args(["--db", db_path, "device", "add", "SN-OFF"])
        .assert()
        .success();

    zki(name)
        .args(["--db", db_path, "punch", "add", "SN-ON", "101", "2026-03-02 08:59:12"])
        .assert()
        .success();

    zki(name)
        .args([
            "--db",
            db_path,
            "punch",
            "add",
            "SN-ON",
            "102",
            "2026-03-02 17:31:40",
            "--type",
            "OUT",
        ])
        .assert()
        .success();
}
