#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn jt() -> Command {
    cargo_bin_cmd!("jobtrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jobtrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests:
/// one company (id 1) with one role (id 1).
pub fn init_db_with_data(db_path: &str) {
    jt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    jt().args([
        "--db",
        db_path,
        "company",
        "add",
        "Acme",
        "--hq-city",
        "Springfield",
    ])
    .assert()
    .success();

    jt().args([
        "--db",
        db_path,
        "role",
        "add",
        "1",
        "Backend Engineer",
        "--status",
        "applied",
        "--posted-min",
        "150000",
    ])
    .assert()
    .success();
}
