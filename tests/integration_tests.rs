use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{home_arg, init_home, setup_test_home, trk};

#[test]
fn test_init_seeds_registry() {
    let home = setup_test_home("cli_init");
    init_home(&home);

    assert!(home.join("batch_sections.json").exists());
    assert!(home.join("attendance_data").is_dir());
    assert!(home.join("trackese.sqlite").exists());
    assert!(!home.join("trackese.conf").exists());

    trk()
        .args(["--home", &home_arg(&home), "section", "list"])
        .assert()
        .success()
        .stdout(contains("58_C.csv"))
        .stdout(contains("58_D.csv"))
        .stdout(contains("58_E.csv"));
}

#[test]
fn test_init_writes_config() {
    let home = setup_test_home("cli_init_config");

    trk()
        .args(["--home", &home_arg(&home), "init"])
        .assert()
        .success();

    let content = fs::read_to_string(home.join("trackese.conf")).expect("read config");
    assert!(content.contains("lookback_days: 3"));

    trk()
        .args(["--home", &home_arg(&home), "config", "--print"])
        .assert()
        .success()
        .stdout(contains("attendance_data"));
}

#[test]
fn test_section_add_and_remove() {
    let home = setup_test_home("cli_section");
    let h = home_arg(&home);
    init_home(&home);

    trk()
        .args(["--home", &h, "section", "add", "61 A", "Morning"])
        .assert()
        .success()
        .stdout(contains("61_A_Morning.csv"));

    trk()
        .args(["--home", &h, "section", "add", "61 a", "MORNING"])
        .assert()
        .success()
        .stdout(contains("already registered"));

    trk()
        .args(["--home", &h, "section", "remove", "58", "D"])
        .assert()
        .success();

    trk()
        .args(["--home", &h, "section", "list"])
        .assert()
        .success()
        .stdout(contains("61_A_Morning.csv"))
        .stdout(contains("58_D.csv").not());
}

#[test]
fn test_unregistered_section_fails() {
    let home = setup_test_home("cli_unregistered");
    let h = home_arg(&home);
    init_home(&home);

    trk()
        .args(["--home", &h, "students", "99", "Z", "--range", "1", "3"])
        .assert()
        .failure()
        .stderr(contains("Section not registered"));
}

#[test]
fn test_students_range_and_list() {
    let home = setup_test_home("cli_students");
    let h = home_arg(&home);
    init_home(&home);

    trk()
        .args(["--home", &h, "students", "58", "C", "--range", "5", "8"])
        .assert()
        .success()
        .stdout(contains("4 student id(s) added"))
        .stdout(contains("Total: 4"));

    trk()
        .args(["--home", &h, "students", "58", "c", "--add", "7-9, 12"])
        .assert()
        .success()
        .stdout(contains("Total: 6"));

    let content =
        fs::read_to_string(home.join("attendance_data").join("58_C.csv")).expect("read csv");
    assert_eq!(content, "Student ID\n5\n6\n7\n8\n9\n12\n");
}

#[test]
fn test_students_invalid_input() {
    let home = setup_test_home("cli_students_invalid");
    let h = home_arg(&home);
    init_home(&home);

    trk()
        .args(["--home", &h, "students", "58", "C", "--range", "a", "3"])
        .assert()
        .failure()
        .stderr(contains("Invalid student id"));

    trk()
        .args(["--home", &h, "students", "58", "C", "--range", "9", "3"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));

    trk()
        .args([
            "--home",
            &h,
            "students",
            "58",
            "C",
            "--range",
            "0",
            "9223372036854775807",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));

    assert!(!home.join("attendance_data").join("58_C.csv").exists());
}

#[test]
fn test_mark_pending_and_show() {
    let home = setup_test_home("cli_mark");
    let h = home_arg(&home);
    init_home(&home);

    trk()
        .args(["--home", &h, "students", "58", "E", "--range", "1", "3"])
        .assert()
        .success();

    trk()
        .args([
            "--home",
            &h,
            "mark",
            "58",
            "E",
            "1",
            "--present",
            "--date",
            "2024-02-29",
        ])
        .assert()
        .success();

    trk()
        .args([
            "--home",
            &h,
            "mark",
            "58",
            "E",
            "2",
            "--absent",
            "--date",
            "2024-03-02",
        ])
        .assert()
        .success()
        .stdout(contains("Mar 02, 2024"));

    trk()
        .args(["--home", &h, "pending", "58", "E", "--date", "2024-03-02"])
        .assert()
        .success()
        .stdout(contains("2 of 3 unmarked"))
        .stdout(contains("Feb 29, 2024: Present"))
        .stdout(contains("Mar 01, 2024: Not Marked"));

    trk()
        .args(["--home", &h, "show", "58", "E"])
        .assert()
        .success()
        .stdout(contains("Feb 29, 2024"))
        .stdout(contains("Mar 02, 2024"))
        .stdout(contains("Absent"));

    let content =
        fs::read_to_string(home.join("attendance_data").join("58_E.csv")).expect("read csv");
    assert_eq!(
        content,
        "Student ID,2024-02-29,2024-03-02\n1,Present,\n2,,Absent\n3,,\n"
    );
}

#[test]
fn test_mark_remaining() {
    let home = setup_test_home("cli_mark_remaining");
    let h = home_arg(&home);
    init_home(&home);

    trk()
        .args(["--home", &h, "students", "58", "D", "--add", "1-4"])
        .assert()
        .success();

    trk()
        .args(["--home", &h, "mark", "58", "D", "2", "-p", "-d", "2024-06-03"])
        .assert()
        .success();

    trk()
        .args([
            "--home",
            &h,
            "mark",
            "58",
            "D",
            "--remaining",
            "--absent",
            "--date",
            "2024-06-03",
        ])
        .assert()
        .success()
        .stdout(contains("3 student(s) marked Absent"));

    trk()
        .args(["--home", &h, "pending", "58", "D", "--date", "2024-06-03"])
        .assert()
        .success()
        .stdout(contains("All 4 students"));
}

#[test]
fn test_mark_requires_value_and_valid_date() {
    let home = setup_test_home("cli_mark_invalid");
    let h = home_arg(&home);
    init_home(&home);

    trk()
        .args(["--home", &h, "mark", "58", "C", "1"])
        .assert()
        .failure();

    trk()
        .args(["--home", &h, "mark", "58", "C", "1", "--present", "--absent"])
        .assert()
        .failure();

    trk()
        .args([
            "--home", &h, "mark", "58", "C", "1", "--present", "--date", "2024-3-2",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_dates_last() {
    trk()
        .args(["dates", "--last", "3", "--from", "2024-03-02"])
        .assert()
        .success()
        .stdout(contains("2024-03-01  Mar 01, 2024"))
        .stdout(contains("2024-02-29  Feb 29, 2024"))
        .stdout(contains("2024-02-28  Feb 28, 2024"));
}

#[test]
fn test_log_records_operations() {
    let home = setup_test_home("cli_log");
    let h = home_arg(&home);
    init_home(&home);

    trk()
        .args(["--home", &h, "students", "58", "C", "--range", "1", "2"])
        .assert()
        .success();

    trk()
        .args(["--home", &h, "mark", "58", "C", "1", "--present"])
        .assert()
        .success();

    trk()
        .args(["--home", &h, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("students"))
        .stdout(contains("mark"));
}

#[test]
fn test_backup_creates_zip() {
    let home = setup_test_home("cli_backup");
    let h = home_arg(&home);
    init_home(&home);

    trk()
        .args(["--home", &h, "students", "58", "C", "--range", "1", "2"])
        .assert()
        .success();

    let out = home.join("backup").join("attendance.zip");
    let out_arg = out.to_string_lossy().to_string();

    trk()
        .args(["--home", &h, "backup", "--file", &out_arg, "--force"])
        .assert()
        .success()
        .stdout(contains("2 file(s)"));

    let bytes = fs::read(&out).expect("read zip");
    assert!(bytes.starts_with(b"PK"));
}
