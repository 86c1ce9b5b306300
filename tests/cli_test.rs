#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const SUCCESS_LINE: &str = "All trucks processed successfully!";

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_truck-fleet"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_json_format_keeps_logs_off_stdout() {
    let output = run_cli(&["--format", "json", "--delay-ms", "0"]);
    assert!(output.status.success(), "exit status: {:?}", output.status);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let (report, last_line) = stdout.trim_end().rsplit_once('\n').unwrap();
    assert_eq!(last_line, SUCCESS_LINE);

    // stdout 只能有 JSON 報告與結果行
    let statuses: serde_json::Value = serde_json::from_str(report).unwrap();
    let trucks = statuses.as_array().unwrap();
    assert_eq!(trucks.len(), 4);
    assert!(trucks.iter().all(|t| t["cargo"] == 0));
    assert_eq!(trucks[1]["battery"], 98.0);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Started processing truck NT1"));
}

#[test]
fn test_text_format_prints_only_success_line() {
    let output = run_cli(&["--delay-ms", "0", "--mode", "sequential"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end(), SUCCESS_LINE);
}

#[test]
fn test_missing_config_file_exits_with_failure() {
    let output = run_cli(&["--config", "/definitely/not/here/fleet.toml"]);

    assert_eq!(output.status.code(), Some(truck_fleet::FAILURE_EXIT_CODE));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains(SUCCESS_LINE));
}

#[test]
fn test_invalid_config_exits_with_failure() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(
            br#"
[[trucks]]
id = "ET1"
kind = "electric"
batery = 5.0
"#,
        )
        .unwrap();

    let path = temp_file.path().to_str().unwrap().to_string();
    let output = run_cli(&["--config", &path]);

    assert_eq!(output.status.code(), Some(truck_fleet::FAILURE_EXIT_CODE));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("batery"));
}

#[test]
fn test_strict_run_succeeds_when_every_truck_succeeds() {
    let output = run_cli(&["--strict", "--delay-ms", "0"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end(), SUCCESS_LINE);
}

#[test]
fn test_strict_and_mode_are_rejected_together() {
    let output = run_cli(&["--strict", "--mode", "sequential"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
