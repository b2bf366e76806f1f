/*
[INPUT]:  Recorded signed requests from a mock server
[OUTPUT]: Test results for request signing
[POS]:    Integration tests - signature scheme
[UPDATE]: When signing parameters or canonicalization change
*/

mod common;

use common::{TEST_ACCESS_KEY, client_for, ok_response, query_of, setup_mock_server};
use huobi_swap_cross_adapter::{HttpMethod, QueryParams};
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::Mock;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_signed_request_verifies_against_recomputed_signature() {
    let server = setup_mock_server().await;
    let endpoint = "/linear-swap-api/v1/swap_cross_account_info";
    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(ok_response(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_ok!(client.get_asset_info(Some("USDT")).await);

    let received = server.received_requests().await.expect("recording enabled");
    let mut params = query_of(&received[0]);

    assert_eq!(params.get("AccessKeyId"), Some(TEST_ACCESS_KEY));
    assert_eq!(params.get("SignatureMethod"), Some("HmacSHA256"));
    assert_eq!(params.get("SignatureVersion"), Some("2"));
    assert!(params.contains_key("Timestamp"));

    let signature = params.remove("Signature").expect("signature param");
    assert_eq!(client.signer().sign(HttpMethod::Post, &params, endpoint), signature);

    // body fields are not part of the signed parameter set
    assert!(!params.contains_key("margin_account"));
}

#[tokio::test]
async fn test_signature_changes_with_method_and_path() {
    let server = setup_mock_server().await;
    let client = client_for(&server);
    let params = QueryParams::new()
        .with("AccessKeyId", TEST_ACCESS_KEY)
        .with("Timestamp", "2024-01-01T00:00:00");

    let base = client.signer().sign(HttpMethod::Post, &params, "/a");
    assert_ne!(base, client.signer().sign(HttpMethod::Get, &params, "/a"));
    assert_ne!(base, client.signer().sign(HttpMethod::Post, &params, "/b"));
}
