/*
[INPUT]:  Caller-supplied order, query and transfer arguments
[OUTPUT]: Typed request structs serialized into present-only JSON bodies
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When endpoint body fields change
*/

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::enums::{Direction, Offset, OrderPriceType, TransferAccount, TriggerType};

const DEFAULT_DETAIL_PAGE_SIZE: u32 = 20;
const DEFAULT_HISTORY_PAGE_SIZE: u32 = 50;
const DEFAULT_TRANSFER_CURRENCY: &str = "USDT";

/// Body of `swap_cross_order` and one entry of `swap_cross_batchorder`.
///
/// Optional fields are omitted from the body when `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrderRequest {
    pub contract_code: String,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    pub volume: u64,
    pub direction: Direction,
    pub offset: Offset,
    pub lever_rate: u32,
    pub order_price_type: OrderPriceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<u64>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_trigger_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_order_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_order_price_type: Option<OrderPriceType>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl_trigger_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl_order_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl_order_price_type: Option<OrderPriceType>,
    #[serde(serialize_with = "serialize_flag")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_only: Option<bool>,
}

impl NewOrderRequest {
    /// Order without a price; suitable for `opponent`/`optimal_*` price types
    pub fn new(
        contract_code: impl Into<String>,
        volume: u64,
        direction: Direction,
        offset: Offset,
        lever_rate: u32,
        order_price_type: OrderPriceType,
    ) -> Self {
        Self {
            contract_code: contract_code.into(),
            price: None,
            volume,
            direction,
            offset,
            lever_rate,
            order_price_type,
            client_order_id: None,
            tp_trigger_price: None,
            tp_order_price: None,
            tp_order_price_type: None,
            sl_trigger_price: None,
            sl_order_price: None,
            sl_order_price_type: None,
            reduce_only: None,
        }
    }

    /// Limit order at `price`
    pub fn limit(
        contract_code: impl Into<String>,
        price: Decimal,
        volume: u64,
        direction: Direction,
        offset: Offset,
        lever_rate: u32,
    ) -> Self {
        let mut order = Self::new(
            contract_code,
            volume,
            direction,
            offset,
            lever_rate,
            OrderPriceType::Limit,
        );
        order.price = Some(price);
        order
    }

    pub fn with_client_order_id(mut self, client_order_id: u64) -> Self {
        self.client_order_id = Some(client_order_id);
        self
    }
}

/// Body of `swap_cross_trigger_order`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerOrderRequest {
    pub contract_code: String,
    pub trigger_type: TriggerType,
    #[serde(with = "rust_decimal::serde::float")]
    pub trigger_price: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_price_type: Option<OrderPriceType>,
    pub volume: u64,
    pub direction: Direction,
    pub offset: Offset,
    pub lever_rate: u32,
}

/// Body of `swap_cross_order_detail`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetailQuery {
    pub contract_code: String,
    pub order_id: String,
    /// Order creation time in milliseconds; widens the lookup window for cancelled orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// 1 quotation, 2 cancelled, 3 forced liquidation, 4 delivery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<u8>,
    pub page_index: u32,
    pub page_size: u32,
}

impl OrderDetailQuery {
    pub fn new(contract_code: impl Into<String>, order_id: impl Into<String>) -> Self {
        Self {
            contract_code: contract_code.into(),
            order_id: order_id.into(),
            created_at: None,
            order_type: None,
            page_index: 1,
            page_size: DEFAULT_DETAIL_PAGE_SIZE,
        }
    }
}

/// Body of `swap_cross_hisorders`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryOrdersQuery {
    pub contract_code: String,
    /// 0 all, 1 buy long, 2 sell short, 3 buy short, 4 sell long, 5/6 liquidations
    pub trade_type: u8,
    /// 1 all orders, 2 finished orders
    #[serde(rename = "type")]
    pub kind: u8,
    /// Comma separated status codes, "0" for all
    pub status: String,
    /// Look-back window in days
    pub create_date: u32,
    pub page_index: u32,
    pub page_size: u32,
}

impl HistoryOrdersQuery {
    pub fn new(
        contract_code: impl Into<String>,
        trade_type: u8,
        kind: u8,
        status: impl Into<String>,
        create_date: u32,
    ) -> Self {
        Self {
            contract_code: contract_code.into(),
            trade_type,
            kind,
            status: status.into(),
            create_date,
            page_index: 1,
            page_size: DEFAULT_HISTORY_PAGE_SIZE,
        }
    }
}

/// Body of `swap_cross_trigger_hisorders`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerHistoryQuery {
    pub contract_code: String,
    /// 0 all, 1 open buy, 2 open sell, 3 close buy, 4 close sell
    pub trade_type: u8,
    /// Comma separated status codes, "0" for finished orders
    pub status: String,
    pub create_date: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl TriggerHistoryQuery {
    pub fn new(
        contract_code: impl Into<String>,
        trade_type: u8,
        status: impl Into<String>,
        create_date: u32,
    ) -> Self {
        Self {
            contract_code: contract_code.into(),
            trade_type,
            status: status.into(),
            create_date,
            page_index: None,
            page_size: None,
        }
    }
}

/// Body of `swap_cross_lightning_close_position`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightningCloseRequest {
    pub contract_code: String,
    pub volume: u64,
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_price_type: Option<OrderPriceType>,
}

impl LightningCloseRequest {
    pub fn new(contract_code: impl Into<String>, volume: u64, direction: Direction) -> Self {
        Self {
            contract_code: contract_code.into(),
            volume,
            direction,
            client_order_id: None,
            order_price_type: None,
        }
    }
}

/// Body of `swap_transfer_inner` (margin account to margin account)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InnerTransferRequest {
    pub asset: String,
    pub from_margin_account: String,
    pub to_margin_account: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Body of the spot-side `/v2/account/transfer` endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotSwapTransferRequest {
    pub from: TransferAccount,
    pub to: TransferAccount,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "margin-account")]
    pub margin_account: String,
    pub currency: String,
}

impl SpotSwapTransferRequest {
    pub fn new(
        margin_account: impl Into<String>,
        amount: Decimal,
        from: TransferAccount,
        to: TransferAccount,
    ) -> Self {
        Self {
            from,
            to,
            amount,
            margin_account: margin_account.into(),
            currency: DEFAULT_TRANSFER_CURRENCY.to_string(),
        }
    }
}

fn serialize_flag<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(flag) => serializer.serialize_u8(u8::from(*flag)),
        None => serializer.serialize_none(),
    }
}
