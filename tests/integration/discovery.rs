//! Integration tests for helper-process enumeration.
#![cfg(unix)]

use portpick::discovery::{Enumerate, HelperEnumerator};
use portpick::error::PortError;

use crate::common::fixtures::Workspace;
use crate::common::init_test_logging;

#[test]
fn helper_output_becomes_snapshot_in_order() {
    init_test_logging();
    let ws = Workspace::with_helper_output("['/dev/ttyUSB0', '/dev/ttyUSB1', 'COM3']");

    let ports = HelperEnumerator::new().enumerate(ws.path()).unwrap();

    let names: Vec<_> = ports.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["/dev/ttyUSB0", "/dev/ttyUSB1", "COM3"]);
    assert!(ports.iter().all(|p| p.manufacturer.is_empty()));
}

#[test]
fn helper_chatter_around_tokens_is_ignored() {
    init_test_logging();
    let ws = Workspace::with_helper_output("Found ports: ['/dev/ttyUSB0'] ['COM3']");

    let ports = HelperEnumerator::new().enumerate(ws.path()).unwrap();

    assert_eq!(ports.len(), 2);
    assert_eq!(ports[0].name, "/dev/ttyUSB0");
    assert_eq!(ports[1].name, "COM3");
}

#[test]
fn unparseable_output_is_no_ports_found() {
    init_test_logging();
    let ws = Workspace::with_helper_output("no devices");

    let result = HelperEnumerator::new().enumerate(ws.path());

    assert!(matches!(result, Err(PortError::NoPortsFound)));
}

#[test]
fn nonzero_exit_is_helper_failed() {
    init_test_logging();
    let ws = Workspace::with_failing_helper(3);

    let result = HelperEnumerator::new().enumerate(ws.path());

    assert!(matches!(result, Err(PortError::HelperFailed { .. })));
}

#[test]
fn missing_helper_is_spawn_failure() {
    init_test_logging();
    let ws = Workspace::with_missing_helper();

    let result = HelperEnumerator::new().enumerate(ws.path());

    match result {
        Err(PortError::HelperSpawnFailed { helper, .. }) => {
            assert!(helper.contains("no-such-helper"));
        }
        other => panic!("Expected spawn failure, got {other:?}"),
    }
}

#[test]
fn every_call_spawns_a_fresh_helper() {
    init_test_logging();
    // The script appends to a side file, so the call count is observable.
    let ws = Workspace::new();
    let marker = ws.path().join("calls");
    let script = ws.write_helper_script(&format!(
        "echo x >> '{}'\necho \"['/dev/ttyUSB0']\"\n",
        marker.display()
    ));
    ws.set_helper(&script);

    let enumerator = HelperEnumerator::new();
    enumerator.enumerate(ws.path()).unwrap();
    enumerator.enumerate(ws.path()).unwrap();

    let calls = std::fs::read_to_string(&marker).unwrap();
    assert_eq!(calls.lines().count(), 2);
}
