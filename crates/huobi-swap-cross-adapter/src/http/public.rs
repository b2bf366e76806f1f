/*
[INPUT]:  Contract codes and kline query parameters
[OUTPUT]: Market data payloads (contract info, price limits, depth, klines, funding)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing query parameters
*/

use serde_json::Value;

use crate::http::{ApiRequest, HuobiSwapCrossClient, QueryParams, Result};
use crate::types::KlinePeriod;

impl HuobiSwapCrossClient {
    /// Query contract information; all contracts when `contract_code` is `None`
    ///
    /// GET /linear-swap-api/v1/swap_contract_info
    pub async fn get_swap_info(&self, contract_code: Option<&str>) -> Result<Value> {
        let params = QueryParams::new().with_opt("contract_code", contract_code);
        let request =
            ApiRequest::public_get("/linear-swap-api/v1/swap_contract_info").params(params);
        self.request(request).await
    }

    /// Query price limits; all contracts when `contract_code` is `None`
    ///
    /// GET /linear-swap-api/v1/swap_price_limit
    pub async fn get_price_limit(&self, contract_code: Option<&str>) -> Result<Value> {
        let params = QueryParams::new().with_opt("contract_code", contract_code);
        let request = ApiRequest::public_get("/linear-swap-api/v1/swap_price_limit").params(params);
        self.request(request).await
    }

    /// Query the unmerged (`step0`) order book
    ///
    /// GET /linear-swap-ex/market/depth
    pub async fn get_orderbook(&self, contract_code: &str) -> Result<Value> {
        let params = QueryParams::new()
            .with("contract_code", contract_code)
            .with("type", "step0");
        let request = ApiRequest::public_get("/linear-swap-ex/market/depth").params(params);
        self.request(request).await
    }

    /// Get kline history. `size` is 1..=2000; `from`/`to` are unix seconds.
    ///
    /// GET /linear-swap-ex/market/history/kline
    pub async fn get_klines(
        &self,
        contract_code: &str,
        period: KlinePeriod,
        size: Option<u32>,
        from: Option<i64>,
        to: Option<i64>,
    ) -> Result<Value> {
        let params = QueryParams::new()
            .with("contract_code", contract_code)
            .with("period", period)
            .with_opt("size", size)
            .with_opt("from", from)
            .with_opt("to", to);
        let request = ApiRequest::public_get("/linear-swap-ex/market/history/kline").params(params);
        self.request(request).await
    }

    /// Get merged ticker data
    ///
    /// GET /linear-swap-ex/market/detail/merged
    pub async fn get_merged_data(&self, contract_code: &str) -> Result<Value> {
        let params = QueryParams::new().with("contract_code", contract_code);
        let request = ApiRequest::public_get("/linear-swap-ex/market/detail/merged").params(params);
        self.request(request).await
    }

    /// Get the current funding rate
    ///
    /// GET /linear-swap-ex/v1/swap_funding_rate
    pub async fn get_funding_rate(&self, contract_code: &str) -> Result<Value> {
        let params = QueryParams::new().with("contract_code", contract_code);
        let request = ApiRequest::public_get("/linear-swap-ex/v1/swap_funding_rate").params(params);
        self.request(request).await
    }
}
