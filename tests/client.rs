mod util;

use std::io::Write;

use roadie::{Client, ConfirmPrompt, Daemon};
use serde_json::json;
use tempfile::NamedTempFile;
use util::{CannedResponse, MockDaemon};

#[test]
fn test_client_shares_one_daemon() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"deploy": true}"#).unwrap();
    file.flush().unwrap();

    let daemon = MockDaemon::serve(vec![
        CannedResponse::ok(json!({})),
        CannedResponse::ok(json!({"value": "blue"})),
        CannedResponse::ok(json!({"replyFilename": file.path().to_str().unwrap()})),
    ]);
    let client = Client::with_daemon(Daemon::new(daemon.port()));

    client.ux.print("checking").unwrap();
    assert_eq!(client.sdk.get_config("color").unwrap(), "blue");
    assert!(client
        .prompt
        .confirm(ConfirmPrompt::new("deploy", "Deploy now?"))
        .unwrap());

    let requests = daemon.finish();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].path, "/print");
    assert_eq!(requests[1].path, "/config/get");
    assert_eq!(requests[2].path, "/prompt");
}
