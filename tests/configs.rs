mod util;

use roadie::{Daemon, Error, Sdk};
use serde_json::json;
use util::MockDaemon;

#[test]
fn test_get_config() {
    let daemon = MockDaemon::ok(json!({"value": "blue"}));
    let sdk = Sdk::with_daemon(Daemon::new(daemon.port()));

    let value = sdk.get_config("color").unwrap();
    assert_eq!(value, "blue");

    let requests = daemon.finish();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/config/get");
    assert_eq!(requests[0].body, json!({"key": "color"}));
}

#[test]
fn test_get_config_missing_key_is_empty() {
    let daemon = MockDaemon::ok(json!({"value": null}));
    let sdk = Sdk::with_daemon(Daemon::new(daemon.port()));

    let value = sdk.get_config("color").unwrap();
    assert_eq!(value, "");
    daemon.finish();
}

#[test]
fn test_get_config_rejects_non_string() {
    let daemon = MockDaemon::ok(json!({"value": 7}));
    let sdk = Sdk::with_daemon(Daemon::new(daemon.port()));

    let error = sdk.get_config("color").unwrap_err();
    assert!(matches!(
        error,
        Error::UnexpectedReply {
            expected: "string",
            ..
        }
    ));
    daemon.finish();
}

#[test]
fn test_set_config() {
    let daemon = MockDaemon::ok(json!({}));
    let sdk = Sdk::with_daemon(Daemon::new(daemon.port()));

    sdk.set_config("color", "blue").unwrap();

    let requests = daemon.finish();
    assert_eq!(requests[0].path, "/config/set");
    assert_eq!(requests[0].body, json!({"key": "color", "value": "blue"}));
}

#[test]
fn test_delete_config() {
    let daemon = MockDaemon::ok(json!({"value": true}));
    let sdk = Sdk::with_daemon(Daemon::new(daemon.port()));

    let deleted = sdk.delete_config("color").unwrap();
    assert!(deleted);

    let requests = daemon.finish();
    assert_eq!(requests[0].path, "/config/delete");
    assert_eq!(requests[0].body, json!({"key": "color"}));
}

#[test]
fn test_delete_config_rejects_non_boolean() {
    let daemon = MockDaemon::ok(json!({"value": "gone"}));
    let sdk = Sdk::with_daemon(Daemon::new(daemon.port()));

    let error = sdk.delete_config("color").unwrap_err();
    assert!(matches!(
        error,
        Error::UnexpectedReply {
            expected: "boolean",
            ..
        }
    ));
    daemon.finish();
}

#[test]
fn test_get_all_config() {
    let daemon = MockDaemon::ok(json!({"value": {"color": "blue", "mood": "calm"}}));
    let sdk = Sdk::with_daemon(Daemon::new(daemon.port()));

    let configs = sdk.get_all_config().unwrap();
    assert_eq!(configs.len(), 2);
    assert_eq!(configs["color"], "blue");
    assert_eq!(configs["mood"], "calm");

    let requests = daemon.finish();
    assert_eq!(requests[0].path, "/config/get-all");
    assert_eq!(requests[0].body, json!({}));
}

#[test]
fn test_get_all_config_rejects_non_string_entry() {
    let daemon = MockDaemon::ok(json!({"value": {"color": "blue", "retries": 3}}));
    let sdk = Sdk::with_daemon(Daemon::new(daemon.port()));

    let error = sdk.get_all_config().unwrap_err();
    assert!(matches!(
        error,
        Error::UnexpectedReply {
            expected: "string",
            ..
        }
    ));
    daemon.finish();
}
