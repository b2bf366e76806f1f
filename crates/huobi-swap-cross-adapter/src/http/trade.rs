/*
[INPUT]:  Order, trigger order and close-position requests
[OUTPUT]: Order placement and cancellation payloads
[POS]:    HTTP layer - trading endpoints (require signed requests)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use serde_json::Value;
use tracing::info;

use crate::http::{ApiRequest, HuobiError, HuobiSwapCrossClient, RequestBody, Result};
use crate::types::{LightningCloseRequest, NewOrderRequest, TriggerOrderRequest};

impl HuobiSwapCrossClient {
    /// Place an order
    ///
    /// POST /linear-swap-api/v1/swap_cross_order
    pub async fn create_order(&self, order: &NewOrderRequest) -> Result<Value> {
        info!(
            contract_code = %order.contract_code,
            direction = order.direction.as_str(),
            offset = order.offset.as_str(),
            volume = order.volume,
            "placing order"
        );
        let body = RequestBody::from_serialize(order)?;
        let request = ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_order").body(body);
        self.request(request).await
    }

    /// Place several orders in one call, sent as `{"orders_data": [...]}`
    ///
    /// POST /linear-swap-api/v1/swap_cross_batchorder
    pub async fn create_orders(&self, orders: &[NewOrderRequest]) -> Result<Value> {
        info!(count = orders.len(), "placing batch orders");
        let orders_data = serde_json::to_value(orders)
            .map_err(|err| HuobiError::InvalidRequest(err.to_string()))?;
        let body = RequestBody::new().with("orders_data", orders_data);
        let request =
            ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_batchorder").body(body);
        self.request(request).await
    }

    /// Cancel one order by exchange id or client id
    ///
    /// POST /linear-swap-api/v1/swap_cross_cancel
    pub async fn revoke_order(
        &self,
        contract_code: &str,
        order_id: Option<&str>,
        client_order_id: Option<&str>,
    ) -> Result<Value> {
        let body = RequestBody::new()
            .with("contract_code", contract_code)
            .with_opt("order_id", order_id)
            .with_opt("client_order_id", client_order_id);
        let request = ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_cancel").body(body);
        self.request(request).await
    }

    /// Cancel several orders; id lists are sent comma-joined
    ///
    /// POST /linear-swap-api/v1/swap_cross_cancel
    pub async fn revoke_orders<S: AsRef<str>>(
        &self,
        contract_code: &str,
        order_ids: &[S],
        client_order_ids: &[S],
    ) -> Result<Value> {
        let body = RequestBody::new()
            .with("contract_code", contract_code)
            .with_joined("order_id", order_ids)
            .with_joined("client_order_id", client_order_ids);
        let request = ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_cancel").body(body);
        self.request(request).await
    }

    /// Cancel every open order of a contract
    ///
    /// POST /linear-swap-api/v1/swap_cross_cancelall
    pub async fn revoke_order_all(&self, contract_code: &str) -> Result<Value> {
        let body = RequestBody::new().with("contract_code", contract_code);
        let request = ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_cancelall").body(body);
        self.request(request).await
    }

    /// Place a trigger order
    ///
    /// POST /linear-swap-api/v1/swap_cross_trigger_order
    pub async fn create_trigger_order(&self, order: &TriggerOrderRequest) -> Result<Value> {
        info!(
            contract_code = %order.contract_code,
            trigger_price = %order.trigger_price,
            "placing trigger order"
        );
        let body = RequestBody::from_serialize(order)?;
        let request =
            ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_trigger_order").body(body);
        self.request(request).await
    }

    /// Cancel trigger orders by id
    ///
    /// POST /linear-swap-api/v1/swap_cross_trigger_cancel
    pub async fn revoke_trigger_order<S: AsRef<str>>(
        &self,
        contract_code: &str,
        order_ids: &[S],
    ) -> Result<Value> {
        let body = RequestBody::new()
            .with("contract_code", contract_code)
            .with_joined("order_id", order_ids);
        let request =
            ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_trigger_cancel").body(body);
        self.request(request).await
    }

    /// Cancel every trigger order of a contract
    ///
    /// POST /linear-swap-api/v1/swap_cross_trigger_cancelall
    pub async fn revoke_all_trigger_orders(&self, contract_code: &str) -> Result<Value> {
        let body = RequestBody::new().with("contract_code", contract_code);
        let request =
            ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_trigger_cancelall").body(body);
        self.request(request).await
    }

    /// Close a position at the best available price
    ///
    /// POST /linear-swap-api/v1/swap_cross_lightning_close_position
    pub async fn lightning_close_position(&self, close: &LightningCloseRequest) -> Result<Value> {
        info!(
            contract_code = %close.contract_code,
            direction = close.direction.as_str(),
            volume = close.volume,
            "closing position"
        );
        let body = RequestBody::from_serialize(close)?;
        let request =
            ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_lightning_close_position")
                .body(body);
        self.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{Credentials, HuobiSwapCrossClient};
    use crate::types::{
        Direction, LightningCloseRequest, NewOrderRequest, Offset, OrderPriceType,
        TriggerOrderRequest, TriggerType,
    };
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HuobiSwapCrossClient {
        HuobiSwapCrossClient::with_host(&server.uri(), Credentials::new("access", "secret"))
            .expect("client init")
    }

    async fn expect_signed_post(server: &MockServer, endpoint: &str, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .and(query_param("SignatureMethod", "HmacSHA256"))
            .and(body_json(body))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ok",
                "data": {"order_id": 986, "order_id_str": "986"},
                "ts": 1,
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_create_order() {
        let server = MockServer::start().await;
        expect_signed_post(
            &server,
            "/linear-swap-api/v1/swap_cross_order",
            json!({
                "contract_code": "BTC-USDT",
                "price": 30000.5,
                "volume": 1,
                "direction": "buy",
                "offset": "open",
                "lever_rate": 20,
                "order_price_type": "limit",
                "client_order_id": 42,
            }),
        )
        .await;

        let order = NewOrderRequest::limit(
            "BTC-USDT",
            "30000.5".parse().expect("price"),
            1,
            Direction::Buy,
            Offset::Open,
            20,
        )
        .with_client_order_id(42);

        let response = client_for(&server)
            .create_order(&order)
            .await
            .expect("create_order failed");
        assert_eq!(response["data"]["order_id_str"], "986");
    }

    #[tokio::test]
    async fn test_create_orders_wraps_in_orders_data() {
        let server = MockServer::start().await;
        expect_signed_post(
            &server,
            "/linear-swap-api/v1/swap_cross_batchorder",
            json!({
                "orders_data": [
                    {
                        "contract_code": "BTC-USDT",
                        "volume": 1,
                        "direction": "buy",
                        "offset": "open",
                        "lever_rate": 20,
                        "order_price_type": "opponent",
                    },
                    {
                        "contract_code": "BTC-USDT",
                        "volume": 2,
                        "direction": "sell",
                        "offset": "close",
                        "lever_rate": 20,
                        "order_price_type": "optimal_5",
                    },
                ],
            }),
        )
        .await;

        let orders = vec![
            NewOrderRequest::new(
                "BTC-USDT",
                1,
                Direction::Buy,
                Offset::Open,
                20,
                OrderPriceType::Opponent,
            ),
            NewOrderRequest::new(
                "BTC-USDT",
                2,
                Direction::Sell,
                Offset::Close,
                20,
                OrderPriceType::Optimal5,
            ),
        ];

        client_for(&server)
            .create_orders(&orders)
            .await
            .expect("create_orders failed");
    }

    #[tokio::test]
    async fn test_revoke_order_single_id() {
        let server = MockServer::start().await;
        expect_signed_post(
            &server,
            "/linear-swap-api/v1/swap_cross_cancel",
            json!({"contract_code": "BTC-USDT", "client_order_id": "42"}),
        )
        .await;

        client_for(&server)
            .revoke_order("BTC-USDT", None, Some("42"))
            .await
            .expect("revoke_order failed");
    }

    #[tokio::test]
    async fn test_revoke_orders_joins_ids() {
        let server = MockServer::start().await;
        expect_signed_post(
            &server,
            "/linear-swap-api/v1/swap_cross_cancel",
            json!({"contract_code": "BTC-USDT", "order_id": "1,2,3"}),
        )
        .await;

        let order_ids = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        client_for(&server)
            .revoke_orders("BTC-USDT", &order_ids, &[])
            .await
            .expect("revoke_orders failed");
    }

    #[tokio::test]
    async fn test_revoke_order_all_and_trigger_cancels() {
        let server = MockServer::start().await;
        expect_signed_post(
            &server,
            "/linear-swap-api/v1/swap_cross_cancelall",
            json!({"contract_code": "BTC-USDT"}),
        )
        .await;
        expect_signed_post(
            &server,
            "/linear-swap-api/v1/swap_cross_trigger_cancel",
            json!({"contract_code": "BTC-USDT", "order_id": "4,5"}),
        )
        .await;
        expect_signed_post(
            &server,
            "/linear-swap-api/v1/swap_cross_trigger_cancelall",
            json!({"contract_code": "BTC-USDT"}),
        )
        .await;

        let client = client_for(&server);
        client
            .revoke_order_all("BTC-USDT")
            .await
            .expect("revoke_order_all failed");
        client
            .revoke_trigger_order("BTC-USDT", &["4", "5"])
            .await
            .expect("revoke_trigger_order failed");
        client
            .revoke_all_trigger_orders("BTC-USDT")
            .await
            .expect("revoke_all_trigger_orders failed");
    }

    #[tokio::test]
    async fn test_create_trigger_order() {
        let server = MockServer::start().await;
        expect_signed_post(
            &server,
            "/linear-swap-api/v1/swap_cross_trigger_order",
            json!({
                "contract_code": "BTC-USDT",
                "trigger_type": "ge",
                "trigger_price": 13900.0,
                "order_price": 13900.0,
                "order_price_type": "limit",
                "volume": 1,
                "direction": "sell",
                "offset": "open",
                "lever_rate": 10,
            }),
        )
        .await;

        let order = TriggerOrderRequest {
            contract_code: "BTC-USDT".to_string(),
            trigger_type: TriggerType::Ge,
            trigger_price: "13900".parse().expect("trigger"),
            order_price: Some("13900".parse().expect("order price")),
            order_price_type: Some(OrderPriceType::Limit),
            volume: 1,
            direction: Direction::Sell,
            offset: Offset::Open,
            lever_rate: 10,
        };

        client_for(&server)
            .create_trigger_order(&order)
            .await
            .expect("create_trigger_order failed");
    }

    #[tokio::test]
    async fn test_lightning_close_position() {
        let server = MockServer::start().await;
        expect_signed_post(
            &server,
            "/linear-swap-api/v1/swap_cross_lightning_close_position",
            json!({
                "contract_code": "BTC-USDT",
                "volume": 3,
                "direction": "sell",
                "order_price_type": "lightning_ioc",
            }),
        )
        .await;

        let mut close = LightningCloseRequest::new("BTC-USDT", 3, Direction::Sell);
        close.order_price_type = Some(OrderPriceType::LightningIoc);

        client_for(&server)
            .lightning_close_position(&close)
            .await
            .expect("lightning_close_position failed");
    }

    #[tokio::test]
    async fn test_rejected_order_surfaces_envelope() {
        let server = MockServer::start().await;
        let envelope = json!({
            "status": "error",
            "err_code": 1061,
            "err_msg": "order price exceeds limit",
            "ts": 1,
        });
        Mock::given(method("POST"))
            .and(path("/linear-swap-api/v1/swap_cross_order"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope.clone()))
            .mount(&server)
            .await;

        let order = NewOrderRequest::limit(
            "BTC-USDT",
            "1".parse().expect("price"),
            1,
            Direction::Buy,
            Offset::Open,
            20,
        );
        let err = client_for(&server)
            .create_order(&order)
            .await
            .expect_err("rejected order");

        assert_eq!(err.api_error().expect("api error").payload(), &envelope);
    }
}
