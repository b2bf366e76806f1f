/*
[INPUT]:  Transfer amounts and source/destination accounts
[OUTPUT]: Transfer confirmation payloads
[POS]:    HTTP layer - fund transfer endpoints (require signed requests)
[UPDATE]: When transfer endpoints or account names change
*/

use serde_json::Value;
use tracing::info;

use crate::http::{ApiRequest, HuobiSwapCrossClient, RequestBody, Result};
use crate::types::{InnerTransferRequest, SpotSwapTransferRequest};

impl HuobiSwapCrossClient {
    /// Move margin between margin accounts of the same user
    ///
    /// POST /linear-swap-api/v1/swap_transfer_inner
    pub async fn transfer_inner(&self, transfer: &InnerTransferRequest) -> Result<Value> {
        info!(
            asset = %transfer.asset,
            from = %transfer.from_margin_account,
            to = %transfer.to_margin_account,
            amount = %transfer.amount,
            "transferring between margin accounts"
        );
        let body = RequestBody::from_serialize(transfer)?;
        let request =
            ApiRequest::signed_post("/linear-swap-api/v1/swap_transfer_inner").body(body);
        self.request(request).await
    }

    /// Move funds between the spot account and a swap margin account.
    ///
    /// Served by the spot host, so the request is signed against that host.
    /// The spot API answers without a `status` field; such replies surface as
    /// [`HuobiError::Api`](crate::HuobiError::Api) carrying the full payload.
    ///
    /// POST {spot_host}/v2/account/transfer
    pub async fn transfer_between_spot_swap(
        &self,
        transfer: &SpotSwapTransferRequest,
    ) -> Result<Value> {
        info!(
            margin_account = %transfer.margin_account,
            amount = %transfer.amount,
            "transferring between spot and swap"
        );
        let url = self.spot_url("/v2/account/transfer")?;
        let body = RequestBody::from_serialize(transfer)?;
        let request = ApiRequest::signed_post(url).body(body);
        self.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, Credentials, HuobiSwapCrossClient, QueryParams};
    use crate::types::{HttpMethod, InnerTransferRequest, SpotSwapTransferRequest, TransferAccount};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_transfer_inner() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/linear-swap-api/v1/swap_transfer_inner"))
            .and(query_param("AccessKeyId", "access"))
            .and(body_json(json!({
                "asset": "USDT",
                "from_margin_account": "BTC-USDT",
                "to_margin_account": "ETH-USDT",
                "amount": 25.5,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ok",
                "data": {"order_id": "771"},
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            HuobiSwapCrossClient::with_host(&server.uri(), Credentials::new("access", "secret"))
                .expect("client init");
        let transfer = InnerTransferRequest {
            asset: "USDT".to_string(),
            from_margin_account: "BTC-USDT".to_string(),
            to_margin_account: "ETH-USDT".to_string(),
            amount: "25.5".parse().expect("amount"),
        };

        client
            .transfer_inner(&transfer)
            .await
            .expect("transfer_inner failed");
    }

    #[tokio::test]
    async fn test_spot_transfer_signed_against_spot_host() {
        let spot = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/account/transfer"))
            .and(body_json(json!({
                "from": "spot",
                "to": "linear-swap",
                "amount": 100.0,
                "margin-account": "USDT",
                "currency": "USDT",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ok",
                "data": 1024,
            })))
            .expect(1)
            .mount(&spot)
            .await;

        let config = ClientConfig {
            spot_host: spot.uri(),
            ..ClientConfig::default()
        };
        let client = HuobiSwapCrossClient::with_config(
            "https://api.hbdm.com",
            Credentials::new("access", "secret"),
            config,
        )
        .expect("client init");

        let transfer = SpotSwapTransferRequest::new(
            "USDT",
            "100".parse().expect("amount"),
            TransferAccount::Spot,
            TransferAccount::LinearSwap,
        );
        client
            .transfer_between_spot_swap(&transfer)
            .await
            .expect("transfer_between_spot_swap failed");

        let received = spot.received_requests().await.expect("recording enabled");
        let mut params: QueryParams = received[0]
            .url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        let signature = params.remove("Signature").expect("signature");
        let expected = client.signer().sign(
            HttpMethod::Post,
            &params,
            &format!("{}/v2/account/transfer", spot.uri()),
        );
        assert_eq!(signature, expected);
    }
}
