use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const AT: &str = "2023-07-04T08:05:09.007Z";

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and an isolated
/// settings file
fn progdt_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("progdt").expect("Failed to find progdt binary");
    cmd.arg("--no-color")
        .arg("--config-file")
        .arg(temp_dir.path().join("settings.json"));
    cmd
}

#[test]
fn test_cli_date_utc() {
    let temp_dir = create_cli_test_environment();

    progdt_cmd(&temp_dir)
        .args(["--utc", "date", "--at", AT])
        .assert()
        .success()
        .stdout("2023-07-04\n");
}

#[test]
fn test_cli_time_utc() {
    let temp_dir = create_cli_test_environment();

    progdt_cmd(&temp_dir)
        .args(["--utc", "time", "--at", AT])
        .assert()
        .success()
        .stdout("08:05:09.007+00:00\n");
}

#[test]
fn test_cli_datetime_utc() {
    let temp_dir = create_cli_test_environment();

    progdt_cmd(&temp_dir)
        .args(["--utc", "datetime", "--at", AT])
        .assert()
        .success()
        .stdout("2023-07-04T08:05:09.007+00:00\n");
}

#[test]
fn test_cli_local_time_with_fixed_zone() {
    let temp_dir = create_cli_test_environment();

    progdt_cmd(&temp_dir)
        .args(["--tz", "+01:00", "time", "--at", "2023-01-01T00:00:00Z"])
        .assert()
        .success()
        .stdout("01:00:00.000+01:00\n");

    progdt_cmd(&temp_dir)
        .args(["--tz", "-05:30", "dt", "--at", "2023-01-01T00:00:00Z"])
        .assert()
        .success()
        .stdout("2022-12-31T18:30:00.000-05:30\n");
}

#[test]
fn test_cli_epoch_millis() {
    let temp_dir = create_cli_test_environment();

    progdt_cmd(&temp_dir)
        .args(["--utc", "datetime", "--at", "1688457909007"])
        .assert()
        .success()
        .stdout("2023-07-04T08:05:09.007+00:00\n");
}

#[test]
fn test_cli_default_command_prints_datetime() {
    let temp_dir = create_cli_test_environment();

    progdt_cmd(&temp_dir)
        .arg("--utc")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}\+00:00\n$").unwrap());
}

#[test]
fn test_cli_setting_controls_mode() {
    let temp_dir = create_cli_test_environment();

    progdt_cmd(&temp_dir)
        .args(["--tz", "+02:00", "time", "--at", AT])
        .assert()
        .success()
        .stdout("10:05:09.007+02:00\n");

    progdt_cmd(&temp_dir)
        .args(["config", "set", "utc", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**utc** (Use UTC Time): true"));

    progdt_cmd(&temp_dir)
        .args(["--tz", "+02:00", "time", "--at", AT])
        .assert()
        .success()
        .stdout("08:05:09.007+00:00\n");

    // --local beats the stored setting
    progdt_cmd(&temp_dir)
        .args(["--local", "--tz", "+02:00", "time", "--at", AT])
        .assert()
        .success()
        .stdout("10:05:09.007+02:00\n");
}

#[test]
fn test_cli_config_get_and_show() {
    let temp_dir = create_cli_test_environment();

    progdt_cmd(&temp_dir)
        .args(["config", "get", "utc"])
        .assert()
        .success()
        .stdout("false\n");

    progdt_cmd(&temp_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Settings"))
        .stdout(predicate::str::contains("settings.json"));
}

#[test]
fn test_cli_config_schema() {
    let temp_dir = create_cli_test_environment();

    progdt_cmd(&temp_dir)
        .args(["config", "schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"key\": \"utc\""))
        .stdout(predicate::str::contains("\"type\": \"boolean\""))
        .stdout(predicate::str::contains("\"default\": false"));
}

#[test]
fn test_cli_config_rejects_bad_input() {
    let temp_dir = create_cli_test_environment();

    progdt_cmd(&temp_dir)
        .args(["config", "set", "utc", "perhaps"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a boolean"));

    progdt_cmd(&temp_dir)
        .args(["config", "get", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown setting"));
}

#[test]
fn test_cli_malformed_settings_file() {
    let temp_dir = create_cli_test_environment();
    fs::write(temp_dir.path().join("settings.json"), "not json").unwrap();

    progdt_cmd(&temp_dir)
        .args(["date", "--at", AT])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}

#[test]
fn test_cli_invalid_inputs() {
    let temp_dir = create_cli_test_environment();

    progdt_cmd(&temp_dir)
        .args(["date", "--at", "tomorrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'at'"));

    progdt_cmd(&temp_dir)
        .args(["--tz", "+99:00", "date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --tz"));

    progdt_cmd(&temp_dir)
        .args(["--utc", "--local", "date"])
        .assert()
        .failure();
}

#[test]
fn test_cli_insert_at_offset() {
    let temp_dir = create_cli_test_environment();
    let file = temp_dir.path().join("notes.md");
    fs::write(&file, "Created: \nBody\n").unwrap();

    progdt_cmd(&temp_dir)
        .args(["--utc", "insert", "date", "--at", AT, "--offset", "9", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Inserted `2023-07-04`"));

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "Created: 2023-07-04\nBody\n"
    );
}

#[test]
fn test_cli_insert_replaces_selection() {
    let temp_dir = create_cli_test_environment();
    let file = temp_dir.path().join("log.txt");
    fs::write(&file, "at NOW!").unwrap();

    progdt_cmd(&temp_dir)
        .args(["--utc", "insert", "time", "--at", AT, "-o", "3", "-e", "6", "-f"])
        .arg(&file)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "at 08:05:09.007+00:00!"
    );
}

#[test]
fn test_cli_insert_appends_by_default() {
    let temp_dir = create_cli_test_environment();
    let file = temp_dir.path().join("append.txt");
    fs::write(&file, "Stamp: ").unwrap();

    progdt_cmd(&temp_dir)
        .args(["--tz", "UTC", "--local", "insert", "datetime", "--at", AT, "--file"])
        .arg(&file)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "Stamp: 2023-07-04T08:05:09.007-00:00"
    );
}

#[test]
fn test_cli_insert_into_missing_file_is_noop() {
    let temp_dir = create_cli_test_environment();
    let file = temp_dir.path().join("missing.txt");

    progdt_cmd(&temp_dir)
        .args(["insert", "date", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing inserted"));

    assert!(!file.exists());
}

#[test]
fn test_cli_insert_rejects_offset_past_end() {
    let temp_dir = create_cli_test_environment();
    let file = temp_dir.path().join("short.txt");
    fs::write(&file, "abc").unwrap();

    progdt_cmd(&temp_dir)
        .args(["insert", "date", "--offset", "10", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("past the end"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "abc");
}

#[test]
fn test_cli_list_commands() {
    let temp_dir = create_cli_test_environment();

    progdt_cmd(&temp_dir)
        .arg("commands")
        .assert()
        .success()
        .stdout(predicate::str::contains("`progdt:date`"))
        .stdout(predicate::str::contains("`progdt:time`"))
        .stdout(predicate::str::contains("`progdt:datetime`"));
}
