//! Robot-mode (JSON output) end-to-end tests.

use crate::common::cli::CliRunner;
use crate::common::fixtures::Workspace;
use crate::common::init_test_logging;

#[test]
fn quick_start_is_json_with_discovery_commands() {
    init_test_logging();
    let result = CliRunner::new().run_robot(&[]);
    result.assert_success();

    let json = result.json();
    assert_eq!(json["tool"], "portpick");
    assert!(json["list_ports"].as_str().unwrap().contains("list"));
}

#[test]
fn version_json_has_build_fields() {
    init_test_logging();
    let result = CliRunner::new().run_robot(&["version"]);
    result.assert_success();

    let json = result.json();
    assert!(json["version"].is_string());
    assert!(json["rustc_version"].is_string());
}

#[cfg(unix)]
#[test]
fn list_json_is_array_of_port_records() {
    init_test_logging();
    let ws = Workspace::with_helper_output("['/dev/ttyUSB0', 'COM3']");

    let result = CliRunner::new()
        .with_working_dir(ws.path().to_path_buf())
        .run_robot(&["list"]);

    result.assert_success();
    let json = result.json();
    let ports = json.as_array().unwrap();
    assert_eq!(ports.len(), 2);
    assert_eq!(ports[0]["name"], "/dev/ttyUSB0");
    assert_eq!(ports[1]["name"], "COM3");
    assert_eq!(ports[0]["manufacturer"], "");
}

#[cfg(unix)]
#[test]
fn list_compact_json_is_single_line() {
    init_test_logging();
    let ws = Workspace::with_helper_output("['/dev/ttyUSB0']");

    let result = CliRunner::new()
        .with_working_dir(ws.path().to_path_buf())
        .run(&["--format", "json-compact", "list"]);

    result.assert_success();
    assert_eq!(result.stdout.trim().lines().count(), 1);
    result.json();
}

#[cfg(unix)]
#[test]
fn list_error_json_carries_suggestion() {
    init_test_logging();
    let ws = Workspace::with_helper_output("nothing quoted here");

    let result = CliRunner::new()
        .with_working_dir(ws.path().to_path_buf())
        .run_robot(&["list"]);

    result.assert_failure();
    let json: serde_json::Value = serde_json::from_str(&result.stderr)
        .unwrap_or_else(|e| panic!("stderr is not JSON ({e}):\n{}", result.stderr));
    assert_eq!(json["error"], true);
    assert!(json["message"].as_str().unwrap().contains("No serial ports"));
    assert_eq!(json["recoverable"], true);
    assert!(json["suggestion"].is_string());
}

#[cfg(unix)]
#[test]
fn select_json_reports_port_and_location() {
    init_test_logging();
    let ws = Workspace::with_helper_output("['/dev/ttyUSB0']");

    let result = CliRunner::new()
        .with_working_dir(ws.path().to_path_buf())
        .with_stdin("1\n")
        .run_robot(&["select"]);

    result.assert_success();
    let json = result.json();
    assert_eq!(json["ok"], true);
    assert_eq!(json["port"], "/dev/ttyUSB0");
    assert!(json["location"].as_str().unwrap().contains(".portpick.toml"));
}

#[cfg(unix)]
#[test]
fn select_failure_json_lands_on_stderr() {
    init_test_logging();
    let ws = Workspace::with_helper_output("nothing quoted here");

    let result = CliRunner::new()
        .with_working_dir(ws.path().to_path_buf())
        .run_robot(&["select"]);

    result.assert_failure();
    // Stderr carries JSON log lines too; the error record is the one
    // with `error: true`.
    let json = result
        .stderr
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .find(|value| value["error"] == true)
        .unwrap_or_else(|| panic!("no error JSON on stderr:\n{}", result.stderr));
    assert!(json["message"].as_str().unwrap().contains("No serial ports"));
    assert_eq!(json["recoverable"], true);
    assert!(json["suggestion"].is_string());
}

#[cfg(unix)]
#[test]
fn select_dismissal_json_is_ok() {
    init_test_logging();
    let ws = Workspace::with_helper_output("['/dev/ttyUSB0']");

    let result = CliRunner::new()
        .with_working_dir(ws.path().to_path_buf())
        .with_stdin("\n")
        .run_robot(&["select"]);

    result.assert_success();
    let json = result.json();
    assert_eq!(json["dismissed"], true);
    assert_eq!(json["ok"], true);
}

#[test]
fn show_json_port_is_null_when_unset() {
    init_test_logging();
    let ws = Workspace::new();

    let result = CliRunner::new()
        .with_working_dir(ws.path().to_path_buf())
        .run_robot(&["show"]);

    result.assert_success();
    assert!(result.json()["port"].is_null());
}
