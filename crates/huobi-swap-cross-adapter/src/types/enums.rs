/*
[INPUT]:  Exchange field vocabularies (directions, offsets, price types, periods)
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the exchange adds new enumerated values
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP verbs accepted by the request dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Uppercase verb as it appears in the signing payload
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Buy => "buy",
            Direction::Sell => "sell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Offset {
    Open,
    Close,
}

impl Offset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Offset::Open => "open",
            Offset::Close => "close",
        }
    }
}

/// Order price types accepted by order, trigger and lightning-close endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderPriceType {
    #[serde(rename = "limit")]
    Limit,
    #[serde(rename = "opponent")]
    Opponent,
    #[serde(rename = "post_only")]
    PostOnly,
    #[serde(rename = "optimal_5")]
    Optimal5,
    #[serde(rename = "optimal_10")]
    Optimal10,
    #[serde(rename = "optimal_20")]
    Optimal20,
    #[serde(rename = "ioc")]
    Ioc,
    #[serde(rename = "fok")]
    Fok,
    #[serde(rename = "opponent_ioc")]
    OpponentIoc,
    #[serde(rename = "optimal_5_ioc")]
    Optimal5Ioc,
    #[serde(rename = "optimal_10_ioc")]
    Optimal10Ioc,
    #[serde(rename = "optimal_20_ioc")]
    Optimal20Ioc,
    #[serde(rename = "opponent_fok")]
    OpponentFok,
    #[serde(rename = "optimal_5_fok")]
    Optimal5Fok,
    #[serde(rename = "optimal_10_fok")]
    Optimal10Fok,
    #[serde(rename = "optimal_20_fok")]
    Optimal20Fok,
    #[serde(rename = "lightning")]
    Lightning,
    #[serde(rename = "lightning_ioc")]
    LightningIoc,
    #[serde(rename = "lightning_fok")]
    LightningFok,
}

impl OrderPriceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderPriceType::Limit => "limit",
            OrderPriceType::Opponent => "opponent",
            OrderPriceType::PostOnly => "post_only",
            OrderPriceType::Optimal5 => "optimal_5",
            OrderPriceType::Optimal10 => "optimal_10",
            OrderPriceType::Optimal20 => "optimal_20",
            OrderPriceType::Ioc => "ioc",
            OrderPriceType::Fok => "fok",
            OrderPriceType::OpponentIoc => "opponent_ioc",
            OrderPriceType::Optimal5Ioc => "optimal_5_ioc",
            OrderPriceType::Optimal10Ioc => "optimal_10_ioc",
            OrderPriceType::Optimal20Ioc => "optimal_20_ioc",
            OrderPriceType::OpponentFok => "opponent_fok",
            OrderPriceType::Optimal5Fok => "optimal_5_fok",
            OrderPriceType::Optimal10Fok => "optimal_10_fok",
            OrderPriceType::Optimal20Fok => "optimal_20_fok",
            OrderPriceType::Lightning => "lightning",
            OrderPriceType::LightningIoc => "lightning_ioc",
            OrderPriceType::LightningFok => "lightning_fok",
        }
    }
}

/// Trigger condition: fire when the latest price is >= (`ge`) or <= (`le`) the trigger price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    Ge,
    Le,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KlinePeriod {
    #[serde(rename = "1min")]
    OneMinute,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "15min")]
    FifteenMinutes,
    #[serde(rename = "30min")]
    ThirtyMinutes,
    #[serde(rename = "60min")]
    OneHour,
    #[serde(rename = "4hour")]
    FourHours,
    #[serde(rename = "1day")]
    OneDay,
    #[serde(rename = "1week")]
    OneWeek,
    #[serde(rename = "1mon")]
    OneMonth,
}

impl KlinePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            KlinePeriod::OneMinute => "1min",
            KlinePeriod::FiveMinutes => "5min",
            KlinePeriod::FifteenMinutes => "15min",
            KlinePeriod::ThirtyMinutes => "30min",
            KlinePeriod::OneHour => "60min",
            KlinePeriod::FourHours => "4hour",
            KlinePeriod::OneDay => "1day",
            KlinePeriod::OneWeek => "1week",
            KlinePeriod::OneMonth => "1mon",
        }
    }
}

impl fmt::Display for KlinePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account side of a spot <-> swap transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferAccount {
    #[serde(rename = "spot")]
    Spot,
    #[serde(rename = "linear-swap")]
    LinearSwap,
}
