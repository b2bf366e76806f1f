/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for huobi-swap-cross-adapter tests

use huobi_swap_cross_adapter::{Credentials, HuobiSwapCrossClient, QueryParams};
use wiremock::{MockServer, ResponseTemplate};

pub const TEST_ACCESS_KEY: &str = "test-access-key";
pub const TEST_SECRET_KEY: &str = "test-secret-key";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_ACCESS_KEY, TEST_SECRET_KEY)
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> HuobiSwapCrossClient {
    HuobiSwapCrossClient::with_host(&server.uri(), test_credentials()).expect("client init")
}

/// `{"status": "ok", "data": data}` response
pub fn ok_response(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "status": "ok",
        "data": data,
        "ts": 1_700_000_000_000u64,
    }))
}

/// Query parameters of a recorded request
#[allow(dead_code)]
pub fn query_of(request: &wiremock::Request) -> QueryParams {
    request
        .url
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}
