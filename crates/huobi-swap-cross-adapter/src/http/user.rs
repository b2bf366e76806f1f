/*
[INPUT]:  Margin accounts, contract codes, order ids and query filters
[OUTPUT]: Account, position and order query payloads
[POS]:    HTTP layer - user data endpoints (require signed requests)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

use serde_json::Value;

use crate::http::{ApiRequest, HuobiSwapCrossClient, RequestBody, Result};
use crate::types::{HistoryOrdersQuery, OrderDetailQuery, TriggerHistoryQuery};

const DEFAULT_OPEN_ORDERS_PAGE_SIZE: u32 = 50;

impl HuobiSwapCrossClient {
    /// Query cross margin account assets; all accounts when `margin_account` is `None`
    ///
    /// POST /linear-swap-api/v1/swap_cross_account_info
    pub async fn get_asset_info(&self, margin_account: Option<&str>) -> Result<Value> {
        let body = RequestBody::new().with_opt("margin_account", margin_account);
        let request =
            ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_account_info").body(body);
        self.request(request).await
    }

    /// Query positions; all contracts when `contract_code` is `None`
    ///
    /// POST /linear-swap-api/v1/swap_cross_position_info
    pub async fn get_position(&self, contract_code: Option<&str>) -> Result<Value> {
        let body = RequestBody::new().with_opt("contract_code", contract_code);
        let request =
            ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_position_info").body(body);
        self.request(request).await
    }

    /// Query account and positions together
    ///
    /// POST /linear-swap-api/v1/swap_cross_account_position_info
    pub async fn get_account_position(&self, margin_account: &str) -> Result<Value> {
        let body = RequestBody::new().with("margin_account", margin_account);
        let request =
            ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_account_position_info")
                .body(body);
        self.request(request).await
    }

    /// Query orders by exchange ids and/or client ids (at most 20 of each)
    ///
    /// POST /linear-swap-api/v1/swap_cross_order_info
    pub async fn get_order_info<S: AsRef<str>>(
        &self,
        contract_code: &str,
        order_ids: &[S],
        client_order_ids: &[S],
    ) -> Result<Value> {
        let body = RequestBody::new()
            .with("contract_code", contract_code)
            .with_joined("order_id", order_ids)
            .with_joined("client_order_id", client_order_ids);
        let request = ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_order_info").body(body);
        self.request(request).await
    }

    /// Query fills and details of a single order
    ///
    /// POST /linear-swap-api/v1/swap_cross_order_detail
    pub async fn get_order_detail(&self, query: &OrderDetailQuery) -> Result<Value> {
        let body = RequestBody::from_serialize(query)?;
        let request =
            ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_order_detail").body(body);
        self.request(request).await
    }

    /// Query open orders. Defaults to the first page of 50.
    ///
    /// POST /linear-swap-api/v1/swap_cross_openorders
    pub async fn get_open_orders(
        &self,
        contract_code: &str,
        page_index: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<Value> {
        let body = RequestBody::new()
            .with("contract_code", contract_code)
            .with("page_index", page_index.unwrap_or(1))
            .with(
                "page_size",
                page_size.unwrap_or(DEFAULT_OPEN_ORDERS_PAGE_SIZE),
            );
        let request = ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_openorders").body(body);
        self.request(request).await
    }

    /// Query historical orders
    ///
    /// POST /linear-swap-api/v1/swap_cross_hisorders
    pub async fn get_history_orders(&self, query: &HistoryOrdersQuery) -> Result<Value> {
        let body = RequestBody::from_serialize(query)?;
        let request = ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_hisorders").body(body);
        self.request(request).await
    }

    /// Query untriggered trigger orders
    ///
    /// POST /linear-swap-api/v1/swap_cross_trigger_openorders
    pub async fn get_trigger_openorders(
        &self,
        contract_code: &str,
        page_index: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<Value> {
        let body = RequestBody::new()
            .with("contract_code", contract_code)
            .with_opt("page_index", page_index)
            .with_opt("page_size", page_size);
        let request =
            ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_trigger_openorders").body(body);
        self.request(request).await
    }

    /// Query historical trigger orders
    ///
    /// POST /linear-swap-api/v1/swap_cross_trigger_hisorders
    pub async fn get_trigger_hisorders(&self, query: &TriggerHistoryQuery) -> Result<Value> {
        let body = RequestBody::from_serialize(query)?;
        let request =
            ApiRequest::signed_post("/linear-swap-api/v1/swap_cross_trigger_hisorders").body(body);
        self.request(request).await
    }
}
