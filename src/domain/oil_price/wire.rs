//! Wire types for the `avgAllPrice.do` response.

use serde::{Deserialize, Serialize};

/// Top-level response envelope: `{ "RESULT": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OilPriceResponse {
    #[serde(rename = "RESULT")]
    pub result: OilResult,
}

/// Holds the price list: `{ "OIL": [ ... ] }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OilResult {
    #[serde(rename = "OIL")]
    pub oil: Vec<OilPriceRecord>,
}

/// A single product row as the backend sends it. Every field is a string,
/// including the numeric-looking `PRICE` and `DIFF`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OilPriceRecord {
    #[serde(rename = "TRADE_DT")]
    pub trade_dt: String,
    #[serde(rename = "PRODCD")]
    pub prodcd: String,
    #[serde(rename = "PRODNM")]
    pub prodnm: String,
    #[serde(rename = "PRICE")]
    pub price: String,
    #[serde(rename = "DIFF")]
    pub diff: String,
}
