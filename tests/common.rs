#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use trackese::models::Section;
use trackese::store::AttendanceStore;

pub fn trk() -> Command {
    let mut cmd = cargo_bin_cmd!("trackese");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create an empty, unique home directory inside the system temp dir
pub fn setup_test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trackese", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

pub fn home_arg(home: &PathBuf) -> String {
    home.to_string_lossy().to_string()
}

/// A store rooted in a fresh temp data directory
pub fn temp_store(name: &str) -> (AttendanceStore, PathBuf) {
    let home = setup_test_home(name);
    let data_dir = home.join("attendance_data");
    (AttendanceStore::new(&data_dir), data_dir)
}

pub fn section_58c() -> Section {
    Section::new("58", "C")
}

/// Run `init` in test mode (no config file written)
pub fn init_home(home: &PathBuf) {
    trk()
        .args(["--home", &home_arg(home), "--test", "init"])
        .assert()
        .success();
}
