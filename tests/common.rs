#![allow(dead_code)]

use httpmock::MockServer;
use marketstack_rs::MarketstackClient;
use std::{fs, path::Path};
use url::Url;

pub const TEST_KEY: &str = "test-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, symbol: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, symbol, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> MarketstackClient {
    MarketstackClient::builder()
        .api_key(TEST_KEY)
        .base_url(Url::parse(&format!("{}/v1/", server.base_url())).unwrap())
        .build()
        .unwrap()
}

/// A client that never reaches a server; requests fail or are rejected locally.
pub fn offline_client() -> MarketstackClient {
    MarketstackClient::builder()
        .api_key(TEST_KEY)
        .base_url(Url::parse("http://127.0.0.1:1/v1/").unwrap())
        .build()
        .unwrap()
}
